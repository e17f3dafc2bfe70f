//! Per-line classification for the rewriter.
//!
//! One Aho-Corasick pass answers "could this be a `main` declaration",
//! a handful of literal checks rule out the usual impostors (log calls,
//! string literals, comments), and the remaining jtreg directives are plain
//! substring tests. Checks run in a fixed order; the first hit decides.

use crate::profile::Profile;

/// Substrings that disqualify a line from being a `main` declaration.
///
/// A quote means the token sits inside a string literal; `println` and
/// `PKCS11Test` are the two recurring sources of textual `main` mentions in
/// the corpus this tool is pointed at.
static MAIN_EXCLUSIONS: &[&str] = &["println", "\"", "PKCS11Test"];

/// jtreg directive marking a compiler-failure test.
const FAIL_REF_MARKER: &str = "@compile/fail/ref=";

/// jtreg directive opening a class-file installer block.
const INSTALLER_HEADER: &str = "@run main ClassFileInstaller";

/// What the rewriter should do with a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A real `main` declaration to wrap; `varargs` selects the template.
    MainDecl { varargs: bool },
    /// Mentions a `main` phrase but is not a declaration; pass through.
    MainFalsePositive,
    /// The whole file is a compiler-failure test and must be rejected.
    FailMarker,
    /// Opens an installer directive block.
    InstallerHeader,
    /// Everything else.
    Plain,
}

/// Classifies one raw source line (terminator included).
pub fn classify(line: &str, profile: &Profile) -> LineKind {
    if profile.main_phrases.is_match(line)
        && !MAIN_EXCLUSIONS.iter().any(|m| line.contains(m))
    {
        // Candidate. A declaration needs `main` as its own whitespace-led
        // token followed by `(`, and must not carry a line comment.
        if !profile.main_shape.is_match(line) || line.contains("//") {
            return LineKind::MainFalsePositive;
        }
        return LineKind::MainDecl {
            varargs: line.contains("String..."),
        };
    }

    if profile.abort_on_fail_ref && line.contains(FAIL_REF_MARKER) {
        return LineKind::FailMarker;
    }

    if line.contains(INSTALLER_HEADER) {
        return LineKind::InstallerHeader;
    }

    LineKind::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_with(line: &str, abort_on_fail_ref: bool) -> LineKind {
        let profile = Profile::new(abort_on_fail_ref).unwrap();
        classify(line, &profile)
    }

    fn kind(line: &str) -> LineKind {
        classify_with(line, true)
    }

    #[test]
    fn test_array_main_declaration() {
        assert_eq!(
            kind("  public static void main(String[] args) {\n"),
            LineKind::MainDecl { varargs: false }
        );
        assert_eq!(
            kind("    static public void main(String[] args) throws Exception {\n"),
            LineKind::MainDecl { varargs: false }
        );
        assert_eq!(
            kind("  public static final void main(String[] args) {\n"),
            LineKind::MainDecl { varargs: false }
        );
    }

    #[test]
    fn test_varargs_main_declaration() {
        assert_eq!(
            kind("  public static void main(String... args) throws Exception {\n"),
            LineKind::MainDecl { varargs: true }
        );
    }

    #[test]
    fn test_space_before_paren_still_declares() {
        assert_eq!(
            kind("  public static void main (String[] args) {\n"),
            LineKind::MainDecl { varargs: false }
        );
    }

    #[test]
    fn test_println_is_not_a_declaration() {
        assert_eq!(
            kind("  System.out.println(\"public static void main\");\n"),
            LineKind::Plain
        );
    }

    #[test]
    fn test_string_literal_is_not_a_declaration() {
        assert_eq!(
            kind("  String sig = \"public static void main\";\n"),
            LineKind::Plain
        );
    }

    #[test]
    fn test_pkcs11_harness_excluded() {
        assert_eq!(
            kind("  public static void main(String[] args) throws PKCS11Test {\n"),
            LineKind::Plain
        );
    }

    #[test]
    fn test_line_comment_is_false_positive() {
        assert_eq!(
            kind("  // public static void main(String[] args)\n"),
            LineKind::MainFalsePositive
        );
    }

    #[test]
    fn test_glued_identifier_is_false_positive() {
        // Phrase matches inside `mainly`, but the token shape does not.
        assert_eq!(
            kind("public static void mainly(int x) {\n"),
            LineKind::MainFalsePositive
        );
    }

    #[test]
    fn test_fail_marker() {
        let line = " * @compile/fail/ref=Bad.out -XDrawDiagnostics Bad.java\n";
        assert_eq!(kind(line), LineKind::FailMarker);
        // Second harness variant: the marker stage is off, the line is plain.
        assert_eq!(classify_with(line, false), LineKind::Plain);
    }

    #[test]
    fn test_installer_header() {
        assert_eq!(
            kind(" * @run main ClassFileInstaller sun.hotspot.WhiteBox\n"),
            LineKind::InstallerHeader
        );
    }

    #[test]
    fn test_fail_marker_beats_installer_header() {
        // Mirrors the if/else-if cascade: the marker is checked first.
        let line = " * @compile/fail/ref=x @run main ClassFileInstaller Foo\n";
        assert_eq!(kind(line), LineKind::FailMarker);
        assert_eq!(classify_with(line, false), LineKind::InstallerHeader);
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(kind("import java.util.Map;\n"), LineKind::Plain);
        assert_eq!(kind("\n"), LineKind::Plain);
    }
}
