//! Declarative rewrite profile: skip tables, match patterns, wrapper templates.
//!
//! Every fixed-membership set and every piece of boilerplate text lives here,
//! so the classification and rewriting logic stays independent of the exact
//! table contents. [`Profile::new`] compiles the match patterns once per
//! invocation; the rest of the crate only reads from the finished profile.

use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;

// --- Skip tables ---

/// Class names whose files are never rewritten, regardless of location.
///
/// These are shared test utilities, not tests; wrapping their `main` would
/// change behaviour for every test that shells out to them.
static SKIP_CLASSES: &[&str] = &["SubclassAcrossPackage", "CipherTestUtils", "CipherTest"];

/// Canonical test-relative paths of tests known to fail under the rewrite.
static SKIP_FILES: &[&str] = &[
    "hotspot/test/runtime/7194254/Test7194254.java",
    "jdk/test/jdk/jfr/api/consumer/TestHiddenMethod.java",
];

/// Test-root markers that anchor canonical-suffix matching for [`SKIP_FILES`].
static TEST_ROOTS: &[&str] = &["jdk/test", "hotspot/test", "langtools/test", "nashorn/test"];

// --- Main-declaration patterns ---

/// Literal phrasings of a `main` declaration accepted by the classifier.
static MAIN_PHRASES: &[&str] = &[
    "public static void main",
    "static public void main",
    "public static final void main",
];

/// Positional shape a real declaration must satisfy: whitespace before the
/// `main` token, then an opening parenthesis (optionally separated by
/// whitespace). Case-sensitive.
const MAIN_SHAPE: &str = r"[\t ]+main[\t ]*\(";

// --- Wrapper templates ---

/// Replacement entry point for `main(String[] args)` declarations.
///
/// Runs the renamed `_main` on a virtual thread named like a ForkJoinPool
/// worker. A `Throwable` escaping the task exits 121; a `Throwable` from
/// `join()` exits 122.
pub const ARRAY_MAIN_WRAPPER: &str = r#"
  public static void main(final String[] args) {
    Runnable _target = new Runnable() {
      public void run() {
          try {
              _main(args);
          } catch (Throwable t) {
             System.out.println(t);
             System.exit(121);
          }
      }
    };
    Thread vt = Thread.builder().virtual().task(_target).name("ForkJoinPool-1-worker-1").build();
    vt.start();
    try {
      vt.join();
    } catch (Throwable t) {
      System.out.println(t);
      System.exit(122);
    }
  }
"#;

/// Replacement entry point for variable-arity `main(String... args)`
/// declarations. The signature declares `throws Exception`, so `join()`
/// failures propagate instead of being caught.
pub const VARARGS_MAIN_WRAPPER: &str = r#"
  public static void main(final String... args) throws Exception {
    Runnable _target = new Runnable() {
      public void run() {
          try {
              _main(args);
          } catch (Throwable t) {
             System.out.println(t);
             System.exit(121);
          }
      }
    };
    Thread vt = Thread.builder().virtual().task(_target).name("ForkJoinPool-1-worker-1").build();
    vt.start();
    vt.join();
  }
"#;

// ---------------------------------------------------------------------------

/// One pipeline run's configuration: the skip tables plus the compiled match
/// patterns.
///
/// The two historical harness variants differ only in whether a
/// `@compile/fail/ref=` line rejects the whole file; that difference is the
/// single [`abort_on_fail_ref`](Profile::abort_on_fail_ref) switch here.
pub struct Profile {
    /// Always-skip class names.
    pub skip_classes: &'static [&'static str],
    /// Always-skip canonical test-relative paths.
    pub skip_files: &'static [&'static str],
    /// Recognized test-root prefixes.
    pub test_roots: &'static [&'static str],
    /// When `true`, a `@compile/fail/ref=` line aborts the whole file.
    pub abort_on_fail_ref: bool,
    pub(crate) main_phrases: AhoCorasick,
    pub(crate) main_shape: Regex,
}

impl Profile {
    /// Builds a profile with the standard tables, compiling the `main`
    /// detection patterns.
    ///
    /// # Errors
    /// Returns an `anyhow::Error` only if pattern compilation fails
    /// (malformed pattern tables).
    pub fn new(abort_on_fail_ref: bool) -> anyhow::Result<Self> {
        let main_phrases = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(MAIN_PHRASES)
            .map_err(|e| anyhow::anyhow!("AhoCorasick build failed: {}", e))?;
        let main_shape = Regex::new(MAIN_SHAPE)?;

        Ok(Self {
            skip_classes: SKIP_CLASSES,
            skip_files: SKIP_FILES,
            test_roots: TEST_ROOTS,
            abort_on_fail_ref,
            main_phrases,
            main_shape,
        })
    }
}
