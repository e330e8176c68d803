use std::{
    sync::Arc,
    task::{Context, Poll},
};

use crate::queue::{Shared, State, WaiterKey};

/// An async consumer's registration with the queue
///
/// While registered it is counted by `num_waiting`, dropping it gives up the registration.
pub(super) struct Waiter<ItemType> {
    shared: Arc<Shared<ItemType>>,
    key: Option<WaiterKey>,
}

impl<ItemType> Waiter<ItemType> {
    pub(super) fn new(shared: Arc<Shared<ItemType>>) -> Self {
        Self { shared, key: None }
    }

    pub(super) fn poll_item(&mut self, cx: &mut Context<'_>) -> Poll<Option<ItemType>> {
        let mut lock = self.shared.state.lock();
        if let Some(value) = lock.buffer.pop_front() {
            release(&mut self.key, &mut lock);
            return Poll::Ready(Some(value));
        }
        if lock.is_closed() {
            release(&mut self.key, &mut lock);
            return Poll::Ready(None);
        }
        let key = match self.key {
            Some(key) => key,
            None => {
                lock.increment_waiting();
                let key = lock.next_waiter_key();
                self.key = Some(key);
                key
            }
        };
        lock.register_waker(key, cx.waker());
        Poll::Pending
    }
}

fn release<ItemType>(key: &mut Option<WaiterKey>, lock: &mut State<ItemType>) {
    if let Some(key) = key.take() {
        lock.remove_waker(key);
        lock.decrement_waiting();
    }
}

impl<ItemType> Drop for Waiter<ItemType> {
    fn drop(&mut self) {
        let Some(key) = self.key.take() else {
            return;
        };
        let mut lock = self.shared.state.lock();
        let woken = !lock.remove_waker(key);
        lock.decrement_waiting();
        // a wake meant for this waiter must not be lost with it
        if !woken || lock.buffer.is_empty() {
            return;
        }
        log::trace!("dropped a woken async waiter, passing the wake on");
        let waker = self.shared.wake_one(&mut lock);
        drop(lock);
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}
