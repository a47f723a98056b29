//! Integration layers for the systems `jtime` talks to.
//!
//! - [`git`]: Repository discovery, HEAD lookup and the commit message box
//! - [`prompt`]: Asking the user for the work time
//!
//! Each submodule provides trait-based abstractions with real and mock implementations
//! to support both production use and testing.

pub mod git;
pub mod prompt;
