use std::error::Error;

pub(crate) trait Throw: Error + Sized {
    /// Panics with the message of the error itself. Used for the misuse cases that are contract
    /// violations rather than something a caller could handle.
    ///
    /// # Panics
    /// Always.
    #[track_caller]
    fn throw(self) -> ! {
        panic!("{}", self)
    }
}

impl<E: Error> Throw for E {}
