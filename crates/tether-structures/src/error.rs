use std::error::Error;
use std::fmt::{Display, Formatter};

/// Common error type for Tether data operations.
///
/// Provides structured error handling for stream decoding, encoding, and
/// validation across the Tether serialization pipeline.
///
/// # Examples
/// ```
/// use tether_structures::TetherDataError;
///
/// fn validate_capacity(capacity: usize) -> Result<(), TetherDataError> {
///     if capacity == 0 {
///         return Err(TetherDataError::BadParameters("Capacity must be > 0".into()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_capacity(0).is_err());
/// assert!(validate_capacity(64).is_ok());
/// ```
#[derive(Debug)]
pub enum TetherDataError {
    /// A read required more bytes than remain between the cursor and the end of the buffer
    OutOfRange(String),
    /// Decoded bytes do not form a valid value of the requested type
    InvalidEncoding(String),
    /// Invalid parameters provided to a function
    BadParameters(String),
    /// Internal error indicating a bug (please report)
    InternalError(String),
}

impl Display for TetherDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TetherDataError::OutOfRange(msg) => write!(f, "Read Out Of Range: {}", msg),
            TetherDataError::InvalidEncoding(msg) => write!(f, "Invalid Encoding: {}", msg),
            TetherDataError::BadParameters(msg) => write!(f, "Bad Parameters: {}", msg),
            TetherDataError::InternalError(msg) => write!(
                f,
                "Internal Error, please raise an issue on Github: {}",
                msg
            ),
        }
    }
}
impl Error for TetherDataError {}
