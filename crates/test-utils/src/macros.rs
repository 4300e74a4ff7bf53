/// A macro to generate a new async test case.
///
/// Runs the body on a current-thread tokio runtime with paused time, after initializing tracing.
///
/// # Example
///
/// ```
/// use maybe_test_utils::*;
///
/// asynctest!(resolves, async {
///     assert_eq!(resolved(1).await, Ok(1));
/// });
/// ```
#[macro_export]
macro_rules! asynctest {
    ($(#[$attr:meta])* $test:ident, $e:expr) => {
        #[$crate::tokio::test(start_paused = true, crate = "maybe_test_utils::tokio")]
        $(#[$attr])*
        async fn $test() {
            $crate::init_tracing();
            $e.await
        }
    };
}
