//! Whole-file skip decision, evaluated once per invocation.
//!
//! The decision is a pure function of the (normalized) path string and the
//! profile tables. It never opens the file, so a listed file is skipped even
//! when unreadable or absent. Rules are checked in order; first match wins.

use crate::path_util;
use crate::profile::Profile;

/// Marker shared by every source that is already virtual-thread aware.
const VIRTUAL_THREAD_MARKER: &str = "VirtualThread";

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The derived class name is in the always-skip class table.
    SkipListedClass,
    /// The path mentions `VirtualThread`; the test already targets fibers.
    VirtualThreadPath,
    /// The canonical test-relative path is in the skip-file table.
    SkipListedFile,
}

/// Decides whether `path` must be passed over entirely.
///
/// `class_name` is derived by the caller (it is also needed later by the
/// rewriter, so it is computed once in the pipeline).
pub fn should_skip(path: &str, class_name: &str, profile: &Profile) -> Option<SkipReason> {
    if profile.skip_classes.contains(&class_name) {
        return Some(SkipReason::SkipListedClass);
    }
    if path.contains(VIRTUAL_THREAD_MARKER) {
        return Some(SkipReason::VirtualThreadPath);
    }

    // Chop the path at each recognized test root and compare the suffix
    // against the skip-file table. Root order is not significant: the
    // tables never contain entries that collide across roots.
    for root in profile.test_roots {
        if let Some(suffix) = path_util::canonical_suffix(path, root) {
            if profile.skip_files.contains(&suffix) {
                return Some(SkipReason::SkipListedFile);
            }
        }
    }

    None
}
