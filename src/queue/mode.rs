use std::time::Duration;

/// How a removal behaves when the queue has no item to hand out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemoveMode {
    /// Wait until an item arrives or the queue is closed
    #[default]
    Blocking,
    /// Never wait, fail with [`QueueError::Empty`](crate::QueueError::Empty) instead
    NonBlocking,
    /// Wait at most the given duration, a zero duration never waits
    Timeout(Duration),
}
