//! Splitting of directive-annotated source snippets.
//!
//! Deck snippets carry inline directive comments that steer how each block
//! is compiled and shown. A single pass over the lines produces two texts
//! from one block:
//!
//! - the *compile source*: every non-directive line, sent to the compiler
//!   service as-is
//! - the *display source*: the lines actually shown on the slide, with
//!   setup regions and hidden spans removed
//!
//! along with the compiler id and flag string the directives selected.
//!
//! # Directives
//!
//! - `// <compiler>:<flags>` switches the compiler configuration for the
//!   rest of the block (last write wins)
//! - `// hide` / `// unhide` suppress lines from the display source only
//! - `// setup` at column zero opens a compile-only region; the region ends
//!   at the first line that does not start with a space
//!
//! # Example
//!
//! ```
//! let result = ce_snippet::split("// setup\n  #include <cstdio>\nint x = 1;\n");
//!
//! assert_eq!(result.snippet.display_source, "int x = 1;\n");
//! assert!(result.snippet.compile_source.contains("#include <cstdio>"));
//! assert_eq!(result.snippet.compiler, "g8");
//! ```

mod consts;
mod directive;
mod splitter;

pub use consts::MAX_LINE_WIDTH;
pub use splitter::{ParsedSnippet, SplitResult, split, trim_blank_edges};
