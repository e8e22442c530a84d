use super::{
    backend::{ActiveBackend, Backend},
    exception::Exception,
};
use core::any::Any;

/// Throw a typed payload.
///
/// The payload unwinds to the closest [`catch`] of type `E`. Boundaries for other types, including
/// [`try_block`], let it pass. If uncaught, it ends the thread like a panic would, except that the
/// panic hook is not invoked.
///
/// Prefer [`Exception::raise`] unless you need a dedicated payload type.
///
/// # Example
///
/// ```rust
/// use bulwark::*;
///
/// let res = catch::<(), u32>(|| throw(404u32));
/// assert_eq!(res, Err(404));
/// ```
#[inline]
pub fn throw<E: Any + Send>(cause: E) -> ! {
    ActiveBackend::throw(Box::new(cause));
}

/// Catch a payload of type `E`.
///
/// If `func` returns a value, this function wraps it in [`Ok`].
///
/// If `func` throws a payload of type `E`, this function returns it, wrapped in [`Err`]. The
/// payload is moved out as-is, so it's the very value that was thrown.
///
/// Payloads of any other type, Rust panics included, are propagated as-is and not caught.
///
/// # Errors
///
/// Returns the caught payload when `func` throws one of type `E`.
///
/// # Example
///
/// ```rust
/// use bulwark::*;
///
/// fn parse(input: &str) -> u8 {
///     input.parse().unwrap_or_else(|_| raise!(name = "ParseError"; "not a byte: {input:?}"))
/// }
///
/// assert_eq!(catch::<_, Exception>(|| parse("42")).unwrap(), 42);
///
/// let ex = catch::<_, Exception>(|| parse("forty-two")).unwrap_err();
/// assert_eq!(ex.to_string(), r#"ParseError: not a byte: "forty-two""#);
/// ```
#[inline]
pub fn catch<R, E: Any + Send>(func: impl FnOnce() -> R) -> Result<R, E> {
    ActiveBackend::intercept::<_, R, E>(func).map_err(|cause| *cause)
}

/// Run a unit of work, turning a raised [`Exception`] into a return value.
///
/// Returns [`None`] if `work` completes normally, or the exception it raised otherwise. `work` is
/// invoked exactly once, and whatever it did before raising stays done.
///
/// Only [`Exception`] is recognized. Panics and payloads thrown with [`throw`] keep unwinding past
/// this call unchanged.
///
/// # Example
///
/// ```rust
/// use bulwark::*;
///
/// assert!(try_block(|| {}).is_none());
///
/// let ex = try_block(|| raise!("boom")).unwrap();
/// assert_eq!(ex.reason(), "boom");
/// ```
///
/// Foreign panics pass through:
///
/// ```rust
/// use bulwark::try_block;
///
/// let res = std::panic::catch_unwind(|| {
///     let _ = try_block(|| std::panic::resume_unwind(Box::new("not an exception")));
/// });
/// assert_eq!(*res.unwrap_err().downcast::<&str>().unwrap(), "not an exception");
/// ```
#[must_use]
#[inline]
pub fn try_block(work: impl FnOnce()) -> Option<Exception> {
    catch::<(), Exception>(work).err()
}

/// Raise an [`Exception`] with a formatted reason.
///
/// `raise!(fmt, args...)` creates an exception with the default name. `raise!(name = expr; fmt,
/// args...)` sets the name too.
///
/// # Example
///
/// ```rust
/// use bulwark::*;
///
/// let ex = try_block(|| raise!(name = "Timeout"; "gave up after {}s", 30)).unwrap();
/// assert_eq!(ex.name(), "Timeout");
/// assert_eq!(ex.reason(), "gave up after 30s");
/// ```
#[macro_export]
macro_rules! raise {
    (name = $name:expr; $($arg:tt)+) => {
        $crate::Exception::with_name($name, ::std::format!($($arg)+)).raise()
    };
    ($($arg:tt)+) => {
        $crate::Exception::new(::std::format!($($arg)+)).raise()
    };
}
