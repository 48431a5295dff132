//! Error type for counter operations.

/// Errors returned by [`CounterPool`](crate::CounterPool) operations.
///
/// Neither variant is transient; both are reported at the point of
/// occurrence and leave the pool unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterError {
    /// No storage was available for a new counter.
    ///
    /// Every slot in the pool is occupied. The tick source was not read.
    AllocationFailure,

    /// A required handle or output slot was absent.
    ///
    /// Also returned for a handle that does not refer to a live counter
    /// in the pool it was passed to.
    InvalidArgument,
}

impl CounterError {
    /// Returns the error as a short snake_case string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_elapsed::CounterError;
    ///
    /// assert_eq!(CounterError::AllocationFailure.as_str(), "allocation_failure");
    /// assert_eq!(CounterError::InvalidArgument.as_str(), "invalid_argument");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CounterError::AllocationFailure => "allocation_failure",
            CounterError::InvalidArgument => "invalid_argument",
        }
    }
}

impl core::fmt::Display for CounterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CounterError::AllocationFailure => write!(f, "failed creating tick counter"),
            CounterError::InvalidArgument => write!(f, "tick counter: invalid arguments"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CounterError {}
