mod common;

use std::{
    thread,
    time::{Duration, Instant},
};

use closable_queue::{Arg, ClosableQueue, ConversionError, QueueError, RemoveMode};
use common::{init_logger, wait_for_waiters, TIME_TOLERANCE};

#[test]
fn returns_an_item_if_one_is_available_in_time() {
    init_logger();
    let queue = ClosableQueue::new();
    let handle = {
        let queue = queue.clone();
        thread::spawn(move || queue.remove_timeout(TIME_TOLERANCE))
    };

    wait_for_waiters(&queue, 1);
    queue.insert(1);
    assert_eq!(handle.join().unwrap(), Some(1));
    assert_eq!(queue.num_waiting(), 0);
}

#[test]
fn returns_none_if_no_item_is_available_in_time() {
    let queue = ClosableQueue::<u8>::new();
    let handle = {
        let queue = queue.clone();
        thread::spawn(move || queue.remove_args(None, Some(&Arg::Float(0.001))))
    };
    assert_eq!(handle.join().unwrap(), Ok(None));
    assert_eq!(queue.num_waiting(), 0);
}

#[test]
fn waits_at_least_the_timeout() {
    let queue = ClosableQueue::<u8>::new();
    let timeout = Duration::from_millis(50);
    let started = Instant::now();
    assert_eq!(queue.remove_timeout(timeout), None);
    assert!(started.elapsed() >= timeout);
}

#[test]
fn does_nothing_if_the_timeout_is_nil() {
    let queue = ClosableQueue::new();
    let handle = {
        let queue = queue.clone();
        thread::spawn(move || queue.remove_args(None, Some(&Arg::Nil)))
    };

    wait_for_waiters(&queue, 1);
    queue.insert(1);
    assert_eq!(handle.join().unwrap(), Ok(Some(1)));
}

#[test]
fn zero_timeout_never_waits() {
    let queue = ClosableQueue::new();
    queue.insert(1);
    assert_eq!(queue.remove_args(None, Some(&Arg::Integer(0))), Ok(Some(1)));
    assert_eq!(queue.remove_args(None, Some(&Arg::Integer(0))), Ok(None));
    assert_eq!(queue.remove_timeout(Duration::ZERO), None);
    assert_eq!(queue.num_waiting(), 0);
}

#[test]
fn rejects_timeouts_that_are_not_numeric() {
    let queue = ClosableQueue::<u8>::new();

    let err = queue.remove_args(None, Some(&Arg::from("1"))).unwrap_err();
    assert_eq!(err.to_string(), "no implicit conversion to float from string");

    let err = queue.remove_args(None, Some(&Arg::Bool(false))).unwrap_err();
    assert_eq!(err.to_string(), "no implicit conversion to float from false");

    assert_eq!(
        queue.remove_args(None, Some(&Arg::Float(-0.5))),
        Err(QueueError::TypeConversion(ConversionError::Negative {
            type_name: "float",
            value: -0.5,
        }))
    );
}

#[test]
fn rejects_a_timeout_with_non_block() {
    let queue = ClosableQueue::from(vec![1]);
    assert_eq!(
        queue.remove_args(Some(&Arg::Bool(true)), Some(&Arg::Integer(1))),
        Err(QueueError::InvalidArgument(
            "can't set a timeout if non_block is enabled"
        ))
    );
    // the item is still there
    assert_eq!(queue.size(), 1);
}

#[test]
fn false_timeout_with_non_block_removes_without_waiting() {
    let queue = ClosableQueue::from(vec![1]);
    let non_block = Arg::Bool(true);
    let non_block = Some(&non_block);
    assert_eq!(queue.remove_args(non_block, Some(&Arg::Bool(false))), Ok(Some(1)));
    assert_eq!(
        queue.remove_args(non_block, Some(&Arg::Bool(false))),
        Err(QueueError::Empty)
    );
}

#[test]
fn returns_none_for_a_closed_empty_queue() {
    let queue = ClosableQueue::<u8>::new();
    queue.close();
    assert_eq!(queue.remove_with(RemoveMode::Timeout(Duration::ZERO)), Ok(None));
    assert_eq!(queue.remove_timeout(TIME_TOLERANCE), None);
}

#[test]
fn close_wakes_a_timed_waiter() {
    let queue = ClosableQueue::<u8>::new();
    let handle = {
        let queue = queue.clone();
        thread::spawn(move || queue.remove_timeout(TIME_TOLERANCE))
    };

    wait_for_waiters(&queue, 1);
    let started = Instant::now();
    queue.close();
    assert_eq!(handle.join().unwrap(), None);
    assert!(started.elapsed() < TIME_TOLERANCE);
}

#[test]
fn expired_waiter_leaves_later_items_alone() {
    let queue = ClosableQueue::new();
    assert_eq!(queue.remove_timeout(Duration::from_millis(1)), None);
    queue.insert(5);
    assert_eq!(queue.num_waiting(), 0);
    assert_eq!(queue.try_remove(), Ok(5));
}

#[test]
fn infinite_timeout_blocks() {
    let queue = ClosableQueue::new();
    let handle = {
        let queue = queue.clone();
        thread::spawn(move || queue.remove_args(None, Some(&Arg::Float(f64::INFINITY))))
    };

    wait_for_waiters(&queue, 1);
    queue.insert("x");
    assert_eq!(handle.join().unwrap(), Ok(Some("x")));
}
