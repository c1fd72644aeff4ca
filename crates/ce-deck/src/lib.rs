//! Compiler Explorer integration for rendered decks.
//!
//! Rewrites already-rendered presentation HTML: each annotated code
//! block has its visible text replaced by the display
//! source and gains a `data-ce-url` attribute holding the Compiler
//! Explorer URL for the full compile source. What a click does with the
//! URL (navigate on shift, new tab on ctrl/cmd) stays in the host's
//! event wiring.
//!
//! # Example
//!
//! ```
//! use ce_deck::SnippetRewriter;
//!
//! let html = r#"<pre><code class="language-cpp">// hide
//! int secret;
//! // unhide
//! int shown;
//! </code></pre>"#;
//!
//! let mut rewriter = SnippetRewriter::new();
//! let out = rewriter.process(html);
//!
//! assert!(out.contains("int shown;"));
//! assert!(!out.contains("int secret;"));
//! assert!(out.contains("data-ce-url=\"https://godbolt.org/#"));
//! ```

mod escape;
mod rewriter;

pub use escape::{escape_html, unescape_html};
pub use rewriter::SnippetRewriter;
