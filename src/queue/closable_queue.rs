use std::{
    collections::VecDeque,
    fmt,
    sync::Arc,
    task::Waker,
    time::{Duration, Instant},
};

use parking_lot::{lock_api::MutexGuard, Condvar, Mutex, RawMutex};

use crate::{
    args::Arg,
    async_remove::{Remove, RemoveStream},
    error::QueueError,
};

use super::{iter::Iter, mode::RemoveMode, state::State};

type StateGuard<'a, ItemType> = MutexGuard<'a, RawMutex, State<ItemType>>;

pub(crate) struct Shared<ItemType> {
    pub(crate) state: Mutex<State<ItemType>>,
    available: Condvar,
}

impl<ItemType> Shared<ItemType> {
    /// Hands one "item available" signal to a waiter, async waiters first
    ///
    /// A returned waker must be woken after the state lock is released.
    #[must_use]
    pub(crate) fn wake_one(&self, state: &mut State<ItemType>) -> Option<Waker> {
        let waker = state.take_waker();
        if waker.is_none() {
            self.available.notify_one();
        }
        waker
    }
}

/// A FIFO queue shared between threads which can be closed
///
/// Every handle produced by [`Clone`] refers to the same queue. Producers call [`insert`](Self::insert),
/// consumers pick one of the removal methods, and [`close`](Self::close) wakes every blocked consumer.
/// Closing never discards queued items, removals keep draining them in order and only report
/// the queue as empty once nothing is left.
///
/// # Examples
/// ```
/// use closable_queue::ClosableQueue;
/// use std::thread;
///
/// let queue = ClosableQueue::new();
/// let consumer = {
///     let queue = queue.clone();
///     thread::spawn(move || queue.iter().sum::<i32>())
/// };
///
/// for i in 1..=4 {
///     queue.insert(i);
/// }
/// queue.close();
///
/// assert_eq!(consumer.join().unwrap(), 10);
/// ```
pub struct ClosableQueue<ItemType> {
    shared: Arc<Shared<ItemType>>,
}

impl<ItemType> ClosableQueue<ItemType> {
    /// Creates an empty, open queue
    pub fn new() -> Self {
        Self::from_buffer(VecDeque::new())
    }

    /// Creates an empty, open queue with room for at least `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(VecDeque::with_capacity(capacity))
    }

    fn from_buffer(buffer: VecDeque<ItemType>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::with_buffer(buffer)),
                available: Condvar::new(),
            }),
        }
    }
}

impl<ItemType> ClosableQueue<ItemType> {
    /// Appends `value` to the back of the queue and wakes one waiting consumer
    ///
    /// Inserting into a closed queue is allowed, the item can still be removed.
    pub fn insert(&self, value: ItemType) {
        let mut lock = self.shared.state.lock();
        lock.buffer.push_back(value);
        if lock.waiting() == 0 {
            return;
        }
        let waker = self.shared.wake_one(&mut lock);
        drop(lock);
        if let Some(waker) = waker {
            waker.wake();
        }
    }

    /// Number of items currently queued
    pub fn size(&self) -> usize {
        self.shared.state.lock().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().buffer.is_empty()
    }

    /// Number of consumers currently blocked inside a removal
    ///
    /// A consumer is counted before it suspends, so once this reports a waiter that waiter
    /// is guaranteed to see the next insert or close.
    pub fn num_waiting(&self) -> usize {
        self.shared.state.lock().waiting()
    }

    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().is_closed()
    }

    /// Closes the queue and wakes every blocked consumer
    ///
    /// Closing an already closed queue does nothing.
    pub fn close(&self) {
        let mut lock = self.shared.state.lock();
        if !lock.close() {
            return;
        }
        let wakers = lock.take_all_wakers();
        log::trace!(
            "closing queue with {} waiter(s) and {} item(s) left",
            lock.waiting(),
            lock.buffer.len()
        );
        self.shared.available.notify_all();
        drop(lock);
        wakers.into_iter().for_each(|waker| waker.wake());
    }

    /// Drops every queued item without closing the queue
    pub fn clear(&self) {
        self.shared.state.lock().buffer.clear();
    }
}

impl<ItemType> ClosableQueue<ItemType> {
    /// Removes the head of the queue, waiting for an item if there is none
    ///
    /// Returns `None` once the queue is closed and drained.
    pub fn remove(&self) -> Option<ItemType> {
        self.wait_for_item(None)
    }

    /// Removes the head of the queue without waiting
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if no item is queued, even if the queue is closed.
    ///
    /// # Examples
    /// ```
    /// use closable_queue::{ClosableQueue, QueueError};
    ///
    /// let queue = ClosableQueue::from(vec!["a"]);
    /// assert_eq!(queue.try_remove(), Ok("a"));
    /// assert_eq!(queue.try_remove(), Err(QueueError::Empty));
    /// ```
    pub fn try_remove(&self) -> Result<ItemType, QueueError> {
        self.shared
            .state
            .lock()
            .buffer
            .pop_front()
            .ok_or(QueueError::Empty)
    }

    /// Removes the head of the queue, waiting at most `timeout` for an item
    ///
    /// A zero timeout never waits. Returns `None` if the queue is closed and drained or the
    /// timeout elapsed first.
    pub fn remove_timeout(&self, timeout: Duration) -> Option<ItemType> {
        if timeout.is_zero() {
            return self.shared.state.lock().buffer.pop_front();
        }
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.wait_for_item(Some(deadline)),
            None => self.wait_for_item(None),
        }
    }

    /// Removes the head of the queue according to `mode`
    ///
    /// `Ok(None)` means nothing was available: the queue was closed and drained, or the timeout elapsed.
    ///
    /// # Errors
    ///
    /// Only [`RemoveMode::NonBlocking`] fails, with [`QueueError::Empty`].
    pub fn remove_with(&self, mode: RemoveMode) -> Result<Option<ItemType>, QueueError> {
        match mode {
            RemoveMode::Blocking => Ok(self.remove()),
            RemoveMode::NonBlocking => self.try_remove().map(Some),
            RemoveMode::Timeout(timeout) => Ok(self.remove_timeout(timeout)),
        }
    }

    /// Removes the head of the queue using loosely typed arguments
    ///
    /// Any truthy `non_block` selects non-blocking mode, `timeout` is a number of seconds.
    /// See [`RemoveMode::from_args`] for how the arguments are checked.
    ///
    /// # Errors
    ///
    /// Argument errors are returned before the queue is touched, see [`RemoveMode::from_args`].
    ///
    /// # Examples
    /// ```
    /// use closable_queue::{Arg, ClosableQueue, QueueError};
    ///
    /// let queue = ClosableQueue::from(vec![1, 2]);
    /// assert_eq!(queue.remove_args(Some(&Arg::Bool(false)), None), Ok(Some(1)));
    /// assert_eq!(queue.remove_args(Some(&Arg::Nil), None), Ok(Some(2)));
    /// assert_eq!(queue.remove_args(Some(&Arg::Integer(1)), None), Err(QueueError::Empty));
    /// assert_eq!(queue.remove_args(None, Some(&Arg::Integer(0))), Ok(None));
    /// ```
    pub fn remove_args(
        &self,
        non_block: Option<&Arg>,
        timeout: Option<&Arg>,
    ) -> Result<Option<ItemType>, QueueError> {
        let mode = RemoveMode::from_args(non_block, timeout)?;
        self.remove_with(mode)
    }

    /// Blocking iterator which ends once the queue is closed and drained
    pub fn iter(&self) -> Iter<'_, ItemType> {
        Iter::new(self)
    }

    /// Future resolving like [`remove`](Self::remove) without blocking the thread
    pub fn remove_async(&self) -> Remove<ItemType> {
        Remove::new(self.shared.clone())
    }

    /// Stream of items which ends once the queue is closed and drained
    pub fn stream(&self) -> RemoveStream<ItemType> {
        RemoveStream::new(self.shared.clone())
    }

    fn wait_for_item(&self, deadline: Option<Instant>) -> Option<ItemType> {
        let mut lock = self.shared.state.lock();
        if let Some(value) = lock.buffer.pop_front() {
            return Some(value);
        }
        if lock.is_closed() {
            return None;
        }
        lock.increment_waiting();
        log::trace!("waiting for an item, {} waiter(s)", lock.waiting());
        let value = self.suspend(&mut lock, deadline);
        lock.decrement_waiting();
        value
    }

    fn suspend(
        &self,
        lock: &mut StateGuard<'_, ItemType>,
        deadline: Option<Instant>,
    ) -> Option<ItemType> {
        loop {
            match deadline {
                None => self.shared.available.wait(lock),
                Some(deadline) => {
                    if self.shared.available.wait_until(lock, deadline).timed_out() {
                        // an item which raced the deadline is still ours to take
                        let value = lock.buffer.pop_front();
                        if value.is_none() {
                            log::trace!("timed out waiting for an item");
                        }
                        return value;
                    }
                }
            }
            if let Some(value) = lock.buffer.pop_front() {
                return Some(value);
            }
            if lock.is_closed() {
                return None;
            }
        }
    }
}

impl<ItemType> Clone for ClosableQueue<ItemType> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<ItemType> Default for ClosableQueue<ItemType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<ItemType> fmt::Debug for ClosableQueue<ItemType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lock = self.shared.state.lock();
        f.debug_struct("ClosableQueue")
            .field("size", &lock.buffer.len())
            .field("waiting", &lock.waiting())
            .field("closed", &lock.is_closed())
            .finish()
    }
}

impl<ItemType> From<Vec<ItemType>> for ClosableQueue<ItemType> {
    fn from(value: Vec<ItemType>) -> Self {
        Self::from_buffer(value.into())
    }
}

impl<ItemType> FromIterator<ItemType> for ClosableQueue<ItemType> {
    fn from_iter<Items: IntoIterator<Item = ItemType>>(iter: Items) -> Self {
        Self::from_buffer(iter.into_iter().collect())
    }
}

impl<ItemType> Extend<ItemType> for ClosableQueue<ItemType> {
    fn extend<Items: IntoIterator<Item = ItemType>>(&mut self, iter: Items) {
        iter.into_iter().for_each(|value| self.insert(value));
    }
}

impl<'a, ItemType> IntoIterator for &'a ClosableQueue<ItemType> {
    type Item = ItemType;
    type IntoIter = Iter<'a, ItemType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
