/// Whether a [`RefusableStack`](super::RefusableStack) holds pops that are not yet finalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionState {
  /// No speculative pops are buffered.
  Clean,
  /// At least one pop awaits `accept` or `refuse`.
  Pending,
}
