//! Error types for helpdesk-rs.
//!
//! Every crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] and
//! [`fail!`] macros give early-return shorthands for precondition checks.

use thiserror::Error;

/// The top-level error type used throughout helpdesk-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by [`fail!`]).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by [`ensure!`]).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, e.g. a year outside the supported range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two holiday rules resolved to the same date and the active collision
    /// policy forbids merging them.
    #[error("holiday rules collide on {date}: '{existing}' and '{incoming}'")]
    AmbiguousRuleCollision {
        /// ISO-8601 date both rules resolved to.
        date: String,
        /// Label already present on that date.
        existing: String,
        /// Label that tried to claim the same date.
        incoming: String,
    },

    /// A record payload failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record matched the requested key.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record with the same key already exists.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// The backing store could not complete the operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// Settings could not be parsed or are inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// Shorthand `Result` type used throughout helpdesk-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> hd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use hd_core::fail;
/// fn always_err() -> hd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
