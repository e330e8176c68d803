use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use crate::queue::Shared;

use super::waiter::Waiter;

/// Future returned by [`ClosableQueue::remove_async`](crate::ClosableQueue::remove_async)
///
/// Resolves to the head of the queue, or `None` once the queue is closed and drained.
/// While pending it counts as a waiter. Dropping it before completion leaves the queue untouched.
///
/// # Examples
/// ```
/// use closable_queue::ClosableQueue;
///
/// let queue = ClosableQueue::from(vec![7]);
/// queue.close();
/// futures_lite::future::block_on(async {
///     assert_eq!(queue.remove_async().await, Some(7));
///     assert_eq!(queue.remove_async().await, None);
/// });
/// ```
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Remove<ItemType> {
    waiter: Waiter<ItemType>,
}

impl<ItemType> Remove<ItemType> {
    pub(crate) fn new(shared: Arc<Shared<ItemType>>) -> Self {
        Self {
            waiter: Waiter::new(shared),
        }
    }
}

impl<ItemType> Future for Remove<ItemType> {
    type Output = Option<ItemType>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.waiter.poll_item(cx)
    }
}
