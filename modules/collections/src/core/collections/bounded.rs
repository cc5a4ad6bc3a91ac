//! Capacity decorator for any container.

mod bounded_collection;
mod capacity_counter;
#[cfg(test)]
mod tests;

pub use bounded_collection::Bounded;
pub use capacity_counter::CapacityCounter;
