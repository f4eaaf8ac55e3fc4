use std::{
    fmt,
    io::{self, Write},
    panic::Location,
    path::Path,
};

use tracing::debug;

/// Source location of an expression which called into this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the code calling the current `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// File path as reported by the compiler.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// File name without directories. Falls back to the full path if the
    /// path has no file name component.
    pub fn base_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Location of the expression calling this function.
#[track_caller]
pub fn here() -> CallSite {
    CallSite::caller()
}

/// Write the caller's `file:line` and a newline to `out`.
#[track_caller]
pub fn write_here<W: Write>(out: &mut W) -> io::Result<()> {
    let site = CallSite::caller();
    debug!(file = site.file(), line = site.line(), "here");
    writeln!(out, "{}", site)
}

/// Print the caller's `file:line` to standard output. Debugging aid.
#[track_caller]
pub fn here_info() {
    let mut text = Vec::new();
    if write_here(&mut text).is_ok() {
        print!("{}", String::from_utf8_lossy(&text));
    }
}
