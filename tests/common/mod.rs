#![allow(dead_code)]

use std::{thread, time::Duration};

use closable_queue::ClosableQueue;

pub const TIME_TOLERANCE: Duration = Duration::from_secs(20);

pub fn init_logger() {
    _ = env_logger::builder().is_test(true).try_init();
}

/// Spins until exactly `count` consumers are parked inside a removal
pub fn wait_for_waiters<ItemType>(queue: &ClosableQueue<ItemType>, count: usize) {
    while queue.num_waiting() != count {
        thread::yield_now();
    }
}
