//! Single-pass snippet splitting.
//!
//! A [`ParserState`] is folded over the block's lines: directive lines
//! mutate the state and vanish, everything else is emitted to the compile
//! source and, visibility permitting, to the display source.

use crate::consts::{ALWAYS_ON_OPTIONS, DEFAULT_COMPILER, DEFAULT_OPTIONS, MAX_LINE_WIDTH};
use crate::directive::{Line, classify};

/// The two derived texts plus the compiler configuration for one block.
///
/// `compile_source` holds every non-directive line in original order;
/// `display_source` is an order-preserving subset of it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedSnippet {
    /// Full reconstructed source for the compiler service.
    pub compile_source: String,
    /// The subset of lines shown on the slide.
    pub display_source: String,
    /// Compiler id selected by the last config directive, or the default.
    pub compiler: String,
    /// Compiler flags, with the always-on warning flags appended.
    pub options: String,
}

/// A parsed snippet together with any advisory warnings.
///
/// Warnings never block processing; over-wide lines are reported here so
/// the host can surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    /// The parsed snippet.
    pub snippet: ParsedSnippet,
    /// Advisory warnings collected during the scan.
    pub warnings: Vec<String>,
}

/// Visibility and configuration state, scoped to one block.
struct ParserState {
    compiler: String,
    options: String,
    /// True inside a `// setup` region.
    skip_display: bool,
    /// True between `// hide` and `// unhide`.
    hide: bool,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_owned(),
            options: DEFAULT_OPTIONS.to_owned(),
            skip_display: false,
            hide: false,
        }
    }
}

/// Split one annotated block into compile and display sources.
///
/// The scan is a pure function of the input: directive lines update the
/// block-local state and are emitted to neither output, every other line
/// lands in the compile source and, unless a setup region or hide span is
/// active, in the display source. Both outputs are trimmed of leading
/// blank lines and end in exactly one newline (or are empty).
#[must_use]
pub fn split(block: &str) -> SplitResult {
    let mut state = ParserState::default();
    let mut compile = String::with_capacity(block.len());
    let mut display = String::with_capacity(block.len());
    let mut warnings = Vec::new();

    for (idx, line) in block.split('\n').enumerate() {
        match classify(line) {
            Line::Config { compiler, options } => {
                state.compiler = compiler.to_owned();
                state.options = options.to_owned();
            }
            Line::Hide(hide) => state.hide = hide,
            Line::SetupMarker => {
                // The toggle is ordered before the emission check, so the
                // marker itself reaches the compile source only.
                state.skip_display = true;
                emit(line, &state, &mut compile, &mut display, &mut warnings, idx + 1);
            }
            Line::Source(text) => {
                // Any line not starting with a space (empty lines included)
                // closes an open setup region.
                if !text.starts_with(' ') {
                    state.skip_display = false;
                }
                emit(text, &state, &mut compile, &mut display, &mut warnings, idx + 1);
            }
        }
    }

    let snippet = ParsedSnippet {
        compile_source: trim_blank_edges(&compile).to_owned(),
        display_source: trim_blank_edges(&display).to_owned(),
        compiler: state.compiler,
        options: format!("{}{ALWAYS_ON_OPTIONS}", state.options),
    };

    SplitResult { snippet, warnings }
}

/// Append one emitted line to the outputs and run the width check.
fn emit(
    line: &str,
    state: &ParserState,
    compile: &mut String,
    display: &mut String,
    warnings: &mut Vec<String>,
    line_num: usize,
) {
    compile.push_str(line);
    compile.push('\n');
    if !state.skip_display && !state.hide {
        display.push_str(line);
        display.push('\n');
    }
    if line.chars().count() > MAX_LINE_WIDTH {
        warnings.push(format!(
            "line {line_num}: wider than {MAX_LINE_WIDTH} columns: {line:?}"
        ));
    }
}

/// Drop leading blank lines and collapse the trailing newline run to one.
///
/// Idempotent: trimming an already-trimmed string returns it unchanged.
#[must_use]
pub fn trim_blank_edges(mut source: &str) -> &str {
    while let Some(rest) = source.strip_prefix('\n') {
        source = rest;
    }
    while source.ends_with("\n\n") {
        source = &source[..source.len() - 1];
    }
    source
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_directives_outputs_match_input() {
        let input = "int square(int x) {\n  return x * x;\n}\n";
        let result = split(input);

        assert_eq!(result.snippet.compile_source, input);
        assert_eq!(result.snippet.display_source, input);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_defaults_without_config_directive() {
        let result = split("int x;\n");

        assert_eq!(result.snippet.compiler, "g8");
        assert_eq!(
            result.snippet.options,
            "-Og -march=native -std=c++17 -Wall -Wextra -pedantic"
        );
    }

    #[test]
    fn test_config_directive_sets_compiler_and_options() {
        let result = split("// g8:-O2\nint x;\n");

        assert_eq!(result.snippet.compiler, "g8");
        assert_eq!(result.snippet.options, "-O2 -Wall -Wextra -pedantic");
        // The directive line reaches neither output.
        assert_eq!(result.snippet.compile_source, "int x;\n");
        assert_eq!(result.snippet.display_source, "int x;\n");
    }

    #[test]
    fn test_config_directive_last_write_wins() {
        let result = split("// g8:-O1\nint a;\n// clang1600:-O3\nint b;\n");

        assert_eq!(result.snippet.compiler, "clang1600");
        assert_eq!(result.snippet.options, "-O3 -Wall -Wextra -pedantic");
        assert_eq!(result.snippet.compile_source, "int a;\nint b;\n");
    }

    #[test]
    fn test_hide_removes_lines_from_display_only() {
        let input = "int a;\n// hide\nint b;\nint c;\n// unhide\nint d;\n";
        let result = split(input);

        assert_eq!(
            result.snippet.compile_source,
            "int a;\nint b;\nint c;\nint d;\n"
        );
        assert_eq!(result.snippet.display_source, "int a;\nint d;\n");
    }

    #[test]
    fn test_hide_runs_to_end_of_block_without_unhide() {
        let result = split("int a;\n// hide\nint b;\n");

        assert_eq!(result.snippet.display_source, "int a;\n");
        assert_eq!(result.snippet.compile_source, "int a;\nint b;\n");
    }

    #[test]
    fn test_setup_region_is_compile_only() {
        let input = "// setup\n  #include <vector>\n  int helper();\nint main() {}\n";
        let result = split(input);

        // The marker and the indented region reach the compile source.
        assert_eq!(
            result.snippet.compile_source,
            "// setup\n  #include <vector>\n  int helper();\nint main() {}\n"
        );
        // The first unindented line becomes visible again.
        assert_eq!(result.snippet.display_source, "int main() {}\n");
    }

    #[test]
    fn test_empty_line_closes_setup_region() {
        let result = split("// setup\n  int helper();\n\nint x;\n");

        assert_eq!(result.snippet.display_source, "int x;\n");
    }

    #[test]
    fn test_hide_applies_inside_and_after_setup() {
        let input = "// hide\n// setup\n  int helper();\nint hidden;\n// unhide\nint shown;\n";
        let result = split(input);

        assert_eq!(
            result.snippet.compile_source,
            "// setup\n  int helper();\nint hidden;\nint shown;\n"
        );
        assert_eq!(result.snippet.display_source, "int shown;\n");
    }

    #[test]
    fn test_blank_only_input_yields_empty_outputs() {
        let result = split("\n\n\n");

        assert_eq!(result.snippet.compile_source, "");
        assert_eq!(result.snippet.display_source, "");
        assert_eq!(result.snippet.compiler, "g8");
        assert_eq!(
            result.snippet.options,
            "-Og -march=native -std=c++17 -Wall -Wextra -pedantic"
        );
    }

    #[test]
    fn test_leading_and_trailing_blank_lines_are_trimmed() {
        let result = split("\n\nint x;\n\n\n");

        assert_eq!(result.snippet.compile_source, "int x;\n");
        assert_eq!(result.snippet.display_source, "int x;\n");
    }

    #[test]
    fn test_width_warning_over_limit() {
        let wide = "x".repeat(MAX_LINE_WIDTH + 1);
        let result = split(&wide);

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("line 1"));
        assert!(result.warnings[0].contains(&wide));
    }

    #[test]
    fn test_no_width_warning_at_limit() {
        let result = split(&"x".repeat(MAX_LINE_WIDTH));

        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_width_warning_does_not_alter_output() {
        let wide = "y".repeat(MAX_LINE_WIDTH + 4);
        let result = split(&format!("{wide}\n"));

        assert_eq!(result.snippet.compile_source, format!("{wide}\n"));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_malformed_directive_is_ordinary_source() {
        // Empty key: not a config directive, passes through.
        let result = split("//:-O2\n");

        assert_eq!(result.snippet.compile_source, "//:-O2\n");
        assert_eq!(result.snippet.compiler, "g8");
    }

    #[test]
    fn test_comment_with_colon_is_config() {
        // Any comment with a colon matches the key:value grammar.
        let result = split("// note:this is a comment\nint x;\n");

        assert_eq!(result.snippet.compiler, "note");
        assert_eq!(
            result.snippet.options,
            "this is a comment -Wall -Wextra -pedantic"
        );
        assert_eq!(result.snippet.compile_source, "int x;\n");
    }

    #[test]
    fn test_trim_blank_edges_idempotent() {
        let trimmed = trim_blank_edges("\n\nint x;\n\n\n");

        assert_eq!(trimmed, "int x;\n");
        assert_eq!(trim_blank_edges(trimmed), trimmed);
    }

    #[test]
    fn test_trim_blank_edges_empty_and_all_newlines() {
        assert_eq!(trim_blank_edges(""), "");
        assert_eq!(trim_blank_edges("\n"), "");
        assert_eq!(trim_blank_edges("\n\n\n"), "");
    }

    #[test]
    fn test_split_is_deterministic() {
        let input = "// g8:-O2\n// hide\nint a;\n// unhide\nint b;\n";

        assert_eq!(split(input), split(input));
    }
}
