mod closable_queue;
mod iter;
mod mode;
mod state;

pub(crate) use closable_queue::Shared;
pub(crate) use state::{State, WaiterKey};

pub use closable_queue::ClosableQueue;
pub use iter::Iter;
pub use mode::RemoveMode;
