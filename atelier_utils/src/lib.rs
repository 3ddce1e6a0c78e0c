pub use atelier_utils_derive::trace_instrument;

/// Returns the version of the atelier workspace.
pub fn atelier_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_matches_guard() {
        assert_matches!(Some(4), Some(x) if *x % 2 == 0);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_panics() {
        assert_matches!(None::<i32>, Some(_));
    }

    #[trace_instrument(skip(value))]
    async fn double(value: u32) -> u32 {
        value * 2
    }

    #[tokio::test]
    async fn trace_instrument_keeps_body() {
        assert_eq!(double(21).await, 42);
    }
}
