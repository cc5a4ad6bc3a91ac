/// Storage strategy backing a container built from a [`ContainerConfig`](super::ContainerConfig).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorageKind {
  /// Contiguous storage: `Vec` for stacks, a `VecDeque` ring buffer for queues.
  #[default]
  Array,
  /// Linked node chain.
  Linked,
}
