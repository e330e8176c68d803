use std::{
    collections::{BTreeMap, VecDeque},
    task::Waker,
};

pub(crate) type WaiterKey = u64;

pub(crate) struct State<ItemType> {
    pub(crate) buffer: VecDeque<ItemType>,
    closed: bool,
    waiting: usize,
    // keys grow monotonically, so the first entry is the longest registered waiter
    wakers: BTreeMap<WaiterKey, Waker>,
    next_key: WaiterKey,
}

impl<ItemType> State<ItemType> {
    pub(crate) fn with_buffer(buffer: VecDeque<ItemType>) -> Self {
        Self {
            buffer,
            closed: false,
            waiting: 0,
            wakers: BTreeMap::new(),
            next_key: 0,
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns false if the queue was already closed
    pub(crate) fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }

    pub(crate) fn waiting(&self) -> usize {
        self.waiting
    }

    pub(crate) fn increment_waiting(&mut self) {
        self.waiting += 1;
    }

    pub(crate) fn decrement_waiting(&mut self) {
        debug_assert!(self.waiting > 0, "waiter count underflow");
        self.waiting = self.waiting.saturating_sub(1);
    }
}

// async waiter bookkeeping
impl<ItemType> State<ItemType> {
    pub(crate) fn next_waiter_key(&mut self) -> WaiterKey {
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        key
    }

    /// Stores or refreshes the waker for `key`
    pub(crate) fn register_waker(&mut self, key: WaiterKey, waker: &Waker) {
        self.wakers
            .entry(key)
            .and_modify(|stored| stored.clone_from(waker))
            .or_insert_with(|| waker.clone());
    }

    /// Returns true if the waker for `key` was still registered, i.e. it had not been woken yet
    pub(crate) fn remove_waker(&mut self, key: WaiterKey) -> bool {
        self.wakers.remove(&key).is_some()
    }

    pub(crate) fn take_waker(&mut self) -> Option<Waker> {
        self.wakers.pop_first().map(|(_, waker)| waker)
    }

    pub(crate) fn take_all_wakers(&mut self) -> Vec<Waker> {
        std::mem::take(&mut self.wakers).into_values().collect()
    }

    #[cfg(test)]
    pub(crate) fn registered_wakers(&self) -> usize {
        self.wakers.len()
    }
}
