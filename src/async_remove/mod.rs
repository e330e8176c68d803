mod remove;
mod stream;
mod waiter;

pub use remove::Remove;
pub use stream::RemoveStream;
