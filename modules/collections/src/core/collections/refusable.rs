//! Transactional stack with speculative pops.

mod refusable_stack;
mod transaction_state;
#[cfg(test)]
mod tests;

pub use refusable_stack::RefusableStack;
pub use transaction_state::TransactionState;
