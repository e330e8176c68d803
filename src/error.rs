use thiserror::Error;

/// Errors returned by [`ClosableQueue`](crate::ClosableQueue) removals
///
/// Running dry in blocking or timed mode is not an error, those removals return `None` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueueError {
    /// A non-blocking removal found no item, whether the queue is open or closed
    #[error("queue empty")]
    Empty,

    /// The timeout argument could not be read as a non-negative number of seconds
    #[error(transparent)]
    TypeConversion(#[from] ConversionError),

    /// Mutually exclusive arguments were passed together
    #[error("{0}")]
    InvalidArgument(&'static str),
}

impl QueueError {
    pub(crate) const TIMEOUT_WITH_NON_BLOCK: &'static str =
        "can't set a timeout if non_block is enabled";

    /// Returns true if this is [`QueueError::Empty`]
    pub fn is_empty(&self) -> bool {
        matches!(self, QueueError::Empty)
    }
}

/// Failure to turn a timeout argument into a [`Duration`](std::time::Duration)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("no implicit conversion to float from {type_name}")]
    NotNumeric {
        type_name: &'static str,
        value: String,
    },

    #[error("time interval must not be negative ({type_name} {value})")]
    Negative { type_name: &'static str, value: f64 },

    #[error("time interval must be a number (float NaN)")]
    NotANumber,
}
