//! The running test, as seen by the assertion helpers.

use std::panic::{self, AssertUnwindSafe};

use crate::{config::Config, report::Style};

/// Capability to fail the currently running test and stop it.
pub trait TestContext {
    /// Report the message and halt the test. Never returns.
    #[track_caller]
    fn fatal(&self, message: String) -> !;

    /// Output settings for failure messages.
    fn style(&self) -> Style {
        Style::default()
    }
}

/// Context for plain `#[test]` functions. Failing panics, which the test
/// harness reports as a failed test.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fatal {
    style: Style,
}

impl Fatal {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn with_config(config: &Config) -> Self {
        Self::new(config.style())
    }
}

impl TestContext for Fatal {
    #[track_caller]
    fn fatal(&self, message: String) -> ! {
        panic!("{}", message)
    }

    fn style(&self) -> Style {
        self.style
    }
}

impl<T: TestContext + ?Sized> TestContext for &T {
    #[track_caller]
    fn fatal(&self, message: String) -> ! {
        (**self).fatal(message)
    }

    fn style(&self) -> Style {
        (**self).style()
    }
}

/// Run `f` and return the failure message if it halted. Returns `None` if
/// `f` completed.
pub fn capture_failure<F: FnOnce()>(f: F) -> Option<String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => None,
        Err(payload) => {
            let message = if let Some(text) = payload.downcast_ref::<String>() {
                text.clone()
            } else if let Some(text) = payload.downcast_ref::<&'static str>() {
                (*text).to_string()
            } else {
                String::from("non-string panic payload")
            };
            Some(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_halts_with_message() {
        let message = capture_failure(|| Fatal::default().fatal("stop here".to_string()));
        assert_eq!(message.as_deref(), Some("stop here"));
    }

    #[test]
    fn completed_closure_is_not_a_failure() {
        assert_eq!(capture_failure(|| ()), None);
    }

    #[test]
    fn static_str_payload() {
        let message = capture_failure(|| panic!("plain"));
        assert_eq!(message.as_deref(), Some("plain"));
    }

    #[test]
    fn reference_delegates_style() {
        let style = Style {
            color: false,
            path: crate::report::PathStyle::Full,
        };
        let tb = Fatal::new(style);
        let by_ref: &dyn TestContext = &tb;
        assert_eq!((&by_ref).style(), style);
    }
}
