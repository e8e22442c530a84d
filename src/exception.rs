use alloc::borrow::Cow;
use core::fmt;
use std::backtrace::Backtrace;

/// The name given to exceptions constructed without one.
pub const DEFAULT_NAME: &str = "Exception";

/// An exception recognized by [`try_block`](crate::try_block).
///
/// Exceptions are raised with [`Exception::raise`] or the [`raise!`](crate::raise) macro and travel
/// up the stack by unwinding until the closest boundary catches them. Any boundary that doesn't
/// recognize them lets them through.
///
/// Each exception carries a short `name` classifying it, a human-readable `reason`, and a
/// backtrace captured when the exception was constructed. Capturing follows the usual
/// `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` rules, so it's free when disabled.
///
/// # Example
///
/// ```rust
/// use bulwark::{Exception, try_block};
///
/// let ex = try_block(|| Exception::with_name("ConfigError", "missing key").raise()).unwrap();
/// assert_eq!(ex.name(), "ConfigError");
/// assert_eq!(ex.reason(), "missing key");
/// assert_eq!(ex.to_string(), "ConfigError: missing key");
/// ```
#[derive(Debug)]
pub struct Exception {
    name: Cow<'static, str>,
    reason: Cow<'static, str>,
    backtrace: Backtrace,
}

impl Exception {
    /// Create an exception named [`DEFAULT_NAME`].
    #[inline]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::with_name(DEFAULT_NAME, reason)
    }

    /// Create an exception with a custom name.
    #[inline]
    pub fn with_name(
        name: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// The short name classifying the exception.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Why the exception was raised.
    #[must_use]
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The stack at the point the exception was created.
    #[inline]
    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Raise the exception.
    ///
    /// This unwinds to the closest boundary that recognizes [`Exception`], such as
    /// [`try_block`](crate::try_block). The panic hook is not invoked.
    ///
    /// If nothing catches the exception, it ends the thread like any other unwinding payload. A
    /// spawned thread's [`JoinHandle::join`](std::thread::JoinHandle::join) then returns it as the
    /// error payload.
    #[inline]
    pub fn raise(self) -> ! {
        crate::throw(self)
    }

    /// Log the exception as a `tracing` error event.
    ///
    /// Boundaries never log on their own; this is for callers that decide a caught exception is
    /// worth recording.
    #[cfg(feature = "tracing")]
    #[inline]
    pub fn report(&self) {
        use std::backtrace::BacktraceStatus;

        if self.backtrace.status() == BacktraceStatus::Captured {
            tracing::error!(
                name = %self.name,
                reason = %self.reason,
                backtrace = %self.backtrace,
                "exception caught"
            );
        } else {
            tracing::error!(name = %self.name, reason = %self.reason, "exception caught");
        }
    }
}

impl fmt::Display for Exception {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

impl core::error::Error for Exception {}
