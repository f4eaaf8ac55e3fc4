//! Rendering of assertion failure messages.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::location::CallSite;

pub const RED: &str = "\x1b[31m";
pub const DEFAULT_FOREGROUND: &str = "\x1b[39m";

/// How the source file of a call site is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// Only the file name, `assert.rs`.
    #[default]
    BaseName,
    /// Path as the compiler reports it, `tests/assert.rs`.
    Full,
}

/// Resolved output settings for failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub path: PathStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: true,
            path: PathStyle::BaseName,
        }
    }
}

impl Style {
    fn file<'a>(&self, site: &'a CallSite) -> &'a str {
        match self.path {
            PathStyle::BaseName => site.base_name(),
            PathStyle::Full => site.file(),
        }
    }

    fn wrap(&self, body: fmt::Arguments<'_>) -> String {
        if self.color {
            format!("{}{}{}\n\n", RED, body, DEFAULT_FOREGROUND)
        } else {
            format!("{}\n\n", body)
        }
    }

    /// `<file>:<line>: <message>`
    pub fn message(&self, site: &CallSite, message: impl Display) -> String {
        self.wrap(format_args!(
            "{}:{}: {}",
            self.file(site),
            site.line(),
            message
        ))
    }

    /// `<file>:<line>: unexpected error: <error>`
    pub fn unexpected_error(&self, site: &CallSite, error: impl Display) -> String {
        self.message(site, format_args!("unexpected error: {}", error))
    }

    /// Expected and actual values on their own indented lines.
    pub fn mismatch(&self, site: &CallSite, expected: impl Debug, actual: impl Debug) -> String {
        self.wrap(format_args!(
            "{}:{}:\n\n\texp: {:?}\n\n\tgot: {:?}",
            self.file(site),
            site.line(),
            expected,
            actual
        ))
    }

    /// Like [Style::mismatch] but for values which should have differed.
    pub fn unexpected_match(
        &self,
        site: &CallSite,
        expected: impl Debug,
        actual: impl Debug,
    ) -> String {
        self.wrap(format_args!(
            "{}:{}:\n\n\texp: NOT {:?}\n\n\tgot: {:?}",
            self.file(site),
            site.line(),
            expected,
            actual
        ))
    }
}
