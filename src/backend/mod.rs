use core::any::Any;

/// An unwinding backend.
///
/// Unwinding is a mechanism of forcefully "returning" through multiple call frames, called
/// *throwing*, up until a special call frame, called *interceptor*. This roughly corresponds to the
/// `resume_unwind`/`catch_unwind` pair on Rust and `throw`/`catch` pair on C++.
///
/// It's crucial that unwinding doesn't require (source-level) cooperation from the intermediate
/// call frames.
///
/// Payloads are typed only at the interceptor: `intercept` names the one payload type it
/// recognizes, and everything else is foreign to it.
///
/// Implementations must ensure that a thrown payload unwinds to the closest (most nested)
/// `intercept` frame. If the payload has the recognized type, `intercept` returns this exact box.
/// Otherwise it resumes unwinding with the box untouched, so that outer frames observe the
/// payload as if the interceptor wasn't there.
///
/// During unwinding, all destructors of locals must be run, as if `return` was called.
///
/// Several payloads can be in flight at once, even in a single thread, if a destructor that uses
/// exceptions (without letting them escape past `drop`) is invoked during unwinding. Catching
/// happens in the reverse order of throwing.
pub(crate) trait Backend {
    /// Throw a payload.
    fn throw(payload: Box<dyn Any + Send>) -> !;

    /// Catch a payload of type `E`.
    ///
    /// This function returns `Ok` if the function returns normally, or `Err` if it throws a
    /// payload of type `E` that is not caught by a nested interceptor. Payloads of other types
    /// keep unwinding.
    fn intercept<Func: FnOnce() -> R, R, E: Any + Send>(func: Func) -> Result<R, Box<E>>;
}

#[path = "panic.rs"]
mod imp;

pub(crate) use imp::ActiveBackend;
