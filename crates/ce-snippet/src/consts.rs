//! Shared constants for snippet splitting.

/// Compiler id used when no config directive appears in a block.
pub(crate) const DEFAULT_COMPILER: &str = "g8";

/// Compiler flags used when no config directive appears in a block.
pub(crate) const DEFAULT_OPTIONS: &str = "-Og -march=native -std=c++17";

/// Flags appended to the options string after parsing, whatever the
/// config directive supplied.
pub(crate) const ALWAYS_ON_OPTIONS: &str = " -Wall -Wextra -pedantic";

/// Widest line that still fits a slide; longer lines get an advisory
/// warning.
pub const MAX_LINE_WIDTH: usize = 36;
