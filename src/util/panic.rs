#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

/// Runs a block that is expected to panic and evaluates to the panic message, or an empty
/// [`String`] if it didn't panic.
#[allow(unused_macros)]
macro_rules! panic_message {
    ($run:block) => {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run))
            .err()
            .and_then(|payload| {
                payload
                    .downcast_ref::<String>()
                    .cloned()
                    .or_else(|| payload.downcast_ref::<&str>().map(|msg| msg.to_string()))
            })
            .unwrap_or_default()
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
#[allow(unused_imports)]
pub(crate) use panic_message;
