use std::path::Path;

use error_stack::{Context, IntoReport, Result, ResultExt};

/// Convert std and toml errors from config file handling into reports with
/// this crate's error contexts.
pub trait IntoReportExt: IntoReport {
    #[track_caller]
    fn into_error<C: Context>(self, context: C) -> Result<<Self as IntoReport>::Ok, C> {
        self.into_report().change_context(context)
    }

    /// Attaches `Path: <path>` so that the failing file shows up in the report.
    #[track_caller]
    fn into_error_with_path<C: Context>(
        self,
        context: C,
        path: &Path,
    ) -> Result<<Self as IntoReport>::Ok, C> {
        self.into_report()
            .change_context(context)
            .attach_printable(format!("Path: {}", path.display()))
    }
}

impl<T: IntoReport> IntoReportExt for T {}
