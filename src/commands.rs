use colored::Colorize;

use crate::error::AnnotateError;

pub mod annotate;
pub mod ticket;

/// Report an aborted command to the user.
///
/// Every abort becomes a message and `Ok(false)`; only failing to write the
/// message itself is returned as an error.
pub(crate) fn report_abort(
    err: AnnotateError,
    stdout: &mut impl std::io::Write,
    stderr: &mut impl std::io::Write,
) -> anyhow::Result<bool> {
    match err {
        AnnotateError::Other(e) => {
            writeln!(stderr, "{} {:#}", "error:".red().bold(), e)?;
            Ok(false)
        }
        err if err.is_error() => {
            writeln!(stderr, "{} {}", "error:".red().bold(), err)?;
            Ok(false)
        }
        err => {
            writeln!(stdout, "{}", err)?;
            Ok(false)
        }
    }
}
