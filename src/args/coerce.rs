use std::time::Duration;

use crate::{
    error::{ConversionError, QueueError},
    queue::RemoveMode,
};

use super::Arg;

impl RemoveMode {
    /// Picks a removal mode from loosely typed `non_block` and `timeout` arguments
    ///
    /// * a truthy `non_block` together with a truthy `timeout` is rejected
    /// * a truthy `non_block` selects [`RemoveMode::NonBlocking`], a falsy `timeout` is then ignored
    /// * a missing or nil `timeout` selects [`RemoveMode::Blocking`]
    /// * otherwise `timeout` is read as seconds, an infinite timeout blocks
    ///
    /// # Errors
    ///
    /// [`QueueError::InvalidArgument`] for the first rule, [`QueueError::TypeConversion`] if
    /// `timeout` is not a non-negative number.
    ///
    /// # Examples
    /// ```
    /// use closable_queue::{Arg, QueueError, RemoveMode};
    /// use std::time::Duration;
    ///
    /// assert_eq!(RemoveMode::from_args(Some(&Arg::Str(String::new())), None), Ok(RemoveMode::NonBlocking));
    /// assert_eq!(RemoveMode::from_args(None, Some(&Arg::Nil)), Ok(RemoveMode::Blocking));
    /// assert_eq!(
    ///     RemoveMode::from_args(None, Some(&Arg::Float(0.5))),
    ///     Ok(RemoveMode::Timeout(Duration::from_millis(500)))
    /// );
    /// assert!(matches!(
    ///     RemoveMode::from_args(Some(&Arg::Bool(true)), Some(&Arg::Integer(1))),
    ///     Err(QueueError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn from_args(non_block: Option<&Arg>, timeout: Option<&Arg>) -> Result<Self, QueueError> {
        let non_block = non_block.is_some_and(Arg::is_truthy);
        if non_block && timeout.is_some_and(Arg::is_truthy) {
            return Err(QueueError::InvalidArgument(
                QueueError::TIMEOUT_WITH_NON_BLOCK,
            ));
        }
        let timeout = timeout.filter(|timeout| !timeout.is_nil());

        match (non_block, timeout) {
            (true, _) => Ok(RemoveMode::NonBlocking),
            (false, None) => Ok(RemoveMode::Blocking),
            (false, Some(timeout)) => Ok(to_duration(timeout)?
                .map_or(RemoveMode::Blocking, RemoveMode::Timeout)),
        }
    }
}

/// Reads `timeout` as seconds, `None` meaning no deadline at all
fn to_duration(timeout: &Arg) -> Result<Option<Duration>, ConversionError> {
    let seconds = match timeout {
        Arg::Integer(value) => *value as f64,
        Arg::Float(value) => *value,
        other => {
            return Err(ConversionError::NotNumeric {
                type_name: other.type_name(),
                value: other.to_string(),
            })
        }
    };
    if seconds.is_nan() {
        return Err(ConversionError::NotANumber);
    }
    if seconds < 0.0 {
        return Err(ConversionError::Negative {
            type_name: timeout.type_name(),
            value: seconds,
        });
    }
    // infinite or too large to represent
    Ok(Duration::try_from_secs_f64(seconds).ok())
}
