//! Rewriting of annotated code blocks inside rendered deck HTML.

use regex::{Captures, Regex};

use ce_snippet::split;
use ce_state::{ClientState, Endpoint};

use crate::escape::{escape_html, unescape_html};

/// Fence language whose code blocks are rewritten by default.
const DEFAULT_LANGUAGE: &str = "cpp";

/// Rewrites annotated code blocks in rendered HTML.
///
/// Scans for `<code class="language-cpp">` elements, splits their text
/// into compile and display sources, swaps the visible text for the
/// display source and attaches the Compiler Explorer URL as a
/// `data-ce-url` attribute. Blocks of other languages pass through
/// untouched.
///
/// Each block is processed independently; directive state never leaks
/// between blocks.
pub struct SnippetRewriter {
    endpoint: Endpoint,
    block_re: Regex,
    warnings: Vec<String>,
}

impl SnippetRewriter {
    /// Create a rewriter for `language-cpp` blocks on the production
    /// instance.
    #[must_use]
    pub fn new() -> Self {
        Self::for_language(DEFAULT_LANGUAGE)
    }

    /// Create a rewriter matching blocks fenced with a different language
    /// tag.
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        let pattern = format!(
            r#"(?s)<code([^>]*\bclass="[^"]*\blanguage-{}\b[^"]*"[^>]*)>(.*?)</code>"#,
            regex::escape(language)
        );
        Self {
            endpoint: Endpoint::default(),
            block_re: Regex::new(&pattern).unwrap(),
            warnings: Vec::new(),
        }
    }

    /// Set the Compiler Explorer instance URLs point at.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Rewrite all annotated code blocks in the given HTML.
    ///
    /// Splitter warnings are collected (prefixed with the block's index in
    /// document order) and retrievable with [`warnings`](Self::warnings).
    #[must_use]
    pub fn process(&mut self, html: &str) -> String {
        let endpoint = self.endpoint;
        let mut warnings = Vec::new();
        let mut index = 0usize;

        let out = self.block_re.replace_all(html, |caps: &Captures| {
            let rewritten = rewrite_block(endpoint, &caps[1], &caps[2], index, &mut warnings)
                .unwrap_or_else(|| caps[0].to_owned());
            index += 1;
            rewritten
        });

        self.warnings.append(&mut warnings);
        out.into_owned()
    }

    /// Warnings collected across all processed blocks.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Default for SnippetRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite one matched block, or `None` to leave it as it was.
fn rewrite_block(
    endpoint: Endpoint,
    attrs: &str,
    body: &str,
    index: usize,
    warnings: &mut Vec<String>,
) -> Option<String> {
    let result = split(&unescape_html(body));
    for warning in &result.warnings {
        tracing::warn!(snippet = index, "{warning}");
        warnings.push(format!("snippet {index}: {warning}"));
    }

    let state = ClientState::for_snippet(&result.snippet);
    match endpoint.url_for(&state) {
        Ok(url) => Some(format!(
            r#"<code{attrs} data-ce-url="{}">{}</code>"#,
            escape_html(&url),
            escape_html(&result.snippet.display_source)
        )),
        Err(error) => {
            tracing::warn!(snippet = index, "{error}");
            warnings.push(format!("snippet {index}: {error}"));
            None
        }
    }
}
