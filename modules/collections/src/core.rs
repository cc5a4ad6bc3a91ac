/// Containers, decorators and their shared contracts.
pub mod collections;
/// Reader/writer lock abstraction used by every container layer.
pub mod sync;
