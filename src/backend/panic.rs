use super::Backend;
use core::any::Any;
use core::panic::AssertUnwindSafe;
use std::panic::{catch_unwind, resume_unwind};

pub(crate) struct ActiveBackend;

impl Backend for ActiveBackend {
    #[inline]
    fn throw(payload: Box<dyn Any + Send>) -> ! {
        // Unlike `panic_any`, this skips the panic hook: caught exceptions shouldn't print.
        resume_unwind(payload);
    }

    #[inline]
    fn intercept<Func: FnOnce() -> R, R, E: Any + Send>(func: Func) -> Result<R, Box<E>> {
        catch_unwind(AssertUnwindSafe(func)).map_err(|payload| match payload.downcast::<E>() {
            Ok(cause) => cause,
            Err(foreign) => resume_unwind(foreign),
        })
    }
}
