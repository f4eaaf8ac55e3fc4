//! Fatal test assertions which report the caller's `file:line`.
//!
//! ```
//! use caller_asserts::{assert_that, equals, ok, Fatal};
//!
//! let tb = Fatal::default();
//! assert_that!(&tb, 1 + 1 == 2, "math is broken: {}", 1 + 1);
//! let n: i32 = ok(&tb, "42".parse::<i32>());
//! equals(&tb, vec![n], vec![42]);
//! ```

pub mod assert;
pub mod config;
pub mod context;
pub mod location;
pub mod logging;
pub mod report;
pub mod utils;

pub use assert::{assert, equals, not_equals, ok, Fallible};
pub use context::{capture_failure, Fatal, TestContext};
pub use location::{here, here_info, write_here, CallSite};

/// Fail the test when the condition is false. The message supports the same
/// placeholders as `format!`.
#[macro_export]
macro_rules! assert_that {
    ($tb:expr, $condition:expr, $($arg:tt)+) => {
        $crate::assert::assert($tb, $condition, ::core::format_args!($($arg)+))
    };
}
