//! Directive line classification.
//!
//! Each directive occupies its own comment line; classification is a pure
//! pattern match on the line text. Comment syntax that matches no directive
//! falls through to ordinary source, so nothing here can fail.

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `// <compiler>:<flags>` — switches compiler and options.
    Config { compiler: &'a str, options: &'a str },
    /// `// hide` (true) or `// unhide` (false).
    Hide(bool),
    /// `// setup` at column zero; opens a compile-only region.
    SetupMarker,
    /// Ordinary source text.
    Source(&'a str),
}

/// Classify a single line of a snippet block.
pub(crate) fn classify(line: &str) -> Line<'_> {
    // Exact match only: an indented `// setup` is ordinary source.
    if line == "// setup" {
        return Line::SetupMarker;
    }

    if let Some(comment) = line.trim_start().strip_prefix("//") {
        let comment = comment.trim_start();
        match comment {
            "hide" => return Line::Hide(true),
            "unhide" => return Line::Hide(false),
            _ => {}
        }
        // The key may not contain a colon; the value is unrestricted and
        // keeps its spacing.
        if let Some((compiler, options)) = comment.split_once(':') {
            let compiler = compiler.trim();
            if !compiler.is_empty() {
                return Line::Config { compiler, options };
            }
        }
    }

    Line::Source(line)
}
