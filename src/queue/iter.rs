use super::ClosableQueue;

/// Blocking iterator over a [`ClosableQueue`], created by [`ClosableQueue::iter`]
///
/// Each call to `next` removes an item, waiting for one if necessary, and the iterator
/// ends once the queue is closed and drained.
pub struct Iter<'a, ItemType> {
    queue: &'a ClosableQueue<ItemType>,
}

impl<'a, ItemType> Iter<'a, ItemType> {
    pub(crate) fn new(queue: &'a ClosableQueue<ItemType>) -> Self {
        Self { queue }
    }
}

impl<ItemType> Iterator for Iter<'_, ItemType> {
    type Item = ItemType;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove()
    }
}
