mod arg;
mod coerce;

pub use arg::Arg;
