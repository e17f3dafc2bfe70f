//! File-level entry point: skip decision, scoped read, rewrite.
//!
//! The skip decision runs before the file is opened, so listed files are
//! passed over even when absent or unreadable. The file handle and its
//! read-only map live only for the duration of [`run`].

use crate::profile::Profile;
use crate::rewrite::{self, RewriteOutcome};
use crate::skip::{self, SkipReason};
use crate::{path_util, WeaverError};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Three-way outcome of processing one file.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The transformed text; the caller may emit it.
    Rewritten(String),
    /// The file must be left untouched.
    Skipped(SkipReason),
    /// A compiler-failure test was discovered mid-file; no output.
    FailMarker,
}

/// Processes one Java source file with the given profile.
pub fn run(path: &Path, profile: &Profile) -> Result<Verdict, WeaverError> {
    let normalized = path_util::normalize(&path.to_string_lossy());
    let class_name = path_util::class_name(&normalized).to_string();

    if let Some(reason) = skip::should_skip(&normalized, &class_name, profile) {
        tracing::debug!(path = %normalized, ?reason, "leaving file untouched");
        return Ok(Verdict::Skipped(reason));
    }

    let file = File::open(path)?;
    let outcome = if file.metadata()?.len() == 0 {
        // mmap rejects zero-length files; an empty source is a no-op anyway.
        rewrite::rewrite_source("", &class_name, profile)
    } else {
        // SAFETY: the map is read-only and dropped before the file handle.
        let mmap = unsafe { Mmap::map(&file)? };
        let source =
            std::str::from_utf8(&mmap).map_err(|_| WeaverError::NonUtf8(normalized.clone()))?;
        rewrite::rewrite_source(source, &class_name, profile)
    };

    Ok(match outcome {
        RewriteOutcome::Rewritten(text) => {
            tracing::debug!(path = %normalized, bytes = text.len(), "rewritten");
            Verdict::Rewritten(text)
        }
        RewriteOutcome::FailMarker => {
            tracing::debug!(path = %normalized, "compiler-failure test");
            Verdict::FailMarker
        }
    })
}
