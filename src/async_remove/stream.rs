use std::{
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use futures_lite::Stream;

use crate::queue::Shared;

use super::waiter::Waiter;

/// Stream returned by [`ClosableQueue::stream`](crate::ClosableQueue::stream)
///
/// Yields items in insertion order and ends once the queue is closed and drained.
///
/// # Examples
/// ```
/// use closable_queue::ClosableQueue;
/// use futures_lite::StreamExt;
///
/// let queue: ClosableQueue<u8> = (1..=3).collect();
/// queue.close();
/// let items: Vec<u8> = futures_lite::future::block_on(queue.stream().collect());
/// assert_eq!(items, [1, 2, 3]);
/// ```
#[must_use = "streams do nothing unless polled"]
pub struct RemoveStream<ItemType> {
    waiter: Waiter<ItemType>,
}

impl<ItemType> RemoveStream<ItemType> {
    pub(crate) fn new(shared: Arc<Shared<ItemType>>) -> Self {
        Self {
            waiter: Waiter::new(shared),
        }
    }
}

impl<ItemType> Stream for RemoveStream<ItemType> {
    type Item = ItemType;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.waiter.poll_item(cx)
    }
}
