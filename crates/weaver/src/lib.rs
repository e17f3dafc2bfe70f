//! # The Weaver: virtual-thread rewriting for Java test mains
//!
//! **Role**: rewrites one Java test source file so that its `main` method
//! runs on a virtual-thread worker, and annotates `@run main
//! ClassFileInstaller` directive blocks with the test's anonymous-inner-class
//! name.
//!
//! **Pipeline**: skip decision (path only, file never opened) → scoped
//! read-only map → single-pass line rewriter with one line of lookahead
//! state. Output is buffered, so a mid-file abort produces nothing.
//!
//! **Design**:
//! - All fixed tables (skip sets, match phrases, wrapper templates) live in
//!   [`profile`] as declarative constants.
//! - The installer-block lookahead is an explicit two-state scanner, not a
//!   pair of loose flags.
//! - The historical harness variants collapse into one switch:
//!   [`Profile::abort_on_fail_ref`](profile::Profile::abort_on_fail_ref).

pub mod classify;
pub mod path_util;
pub mod pipeline;
pub mod profile;
pub mod rewrite;
pub mod skip;

pub use pipeline::Verdict;
pub use profile::Profile;
pub use rewrite::RewriteOutcome;
pub use skip::SkipReason;

/// Errors produced by the weaver crate.
#[derive(Debug, thiserror::Error)]
pub enum WeaverError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source file is not valid UTF-8.
    #[error("not valid UTF-8: {0}")]
    NonUtf8(String),
}
