//! Client-state layout types.
//!
//! Field names and nesting follow the schema the Compiler Explorer web app
//! accepts: a top-level version, one row, and three ordered components
//! (`codeEditor`, `compiler`, `output`) cross-referenced by integer ids.
//! The serde renames keep the wire names camelCase while the structs stay
//! idiomatic.

use serde::Serialize;

use ce_snippet::ParsedSnippet;

use crate::encode::encode_fragment;

/// Schema version accepted by the service.
const CLIENT_STATE_VERSION: u32 = 4;

/// Editor pane id referenced by the compiler and output panes.
const EDITOR_ID: u32 = 1;

/// Failure while turning a client state into a URL fragment.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("serialize client state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The full document carried in the URL fragment.
#[derive(Debug, Serialize)]
pub struct ClientState {
    version: u32,
    content: Vec<Row>,
}

#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "type")]
    kind: &'static str,
    content: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "componentName")]
    name: &'static str,
    #[serde(rename = "componentState")]
    state: ComponentState,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ComponentState {
    Editor(EditorState),
    Compiler(CompilerState),
    Output(OutputState),
}

#[derive(Debug, Serialize)]
struct EditorState {
    id: u32,
    source: String,
    options: EditorOptions,
    #[serde(rename = "fontScale")]
    font_scale: u32,
}

#[derive(Debug, Serialize)]
struct EditorOptions {
    #[serde(rename = "compileOnChange")]
    compile_on_change: bool,
    #[serde(rename = "colouriseAsm")]
    colourise_asm: bool,
}

#[derive(Debug, Serialize)]
struct CompilerState {
    source: u32,
    filters: Filters,
    options: String,
    compiler: String,
    #[serde(rename = "fontScale")]
    font_scale: u32,
}

#[derive(Debug, Serialize)]
struct Filters {
    #[serde(rename = "commentOnly")]
    comment_only: bool,
    directives: bool,
    intel: bool,
    labels: bool,
    trim: bool,
    execute: bool,
}

#[derive(Debug, Serialize)]
struct OutputState {
    source: u32,
    compiler: u32,
}

impl ClientState {
    /// Build the single-row editor/compiler/output layout for one snippet.
    #[must_use]
    pub fn for_snippet(snippet: &ParsedSnippet) -> Self {
        Self::new(&snippet.compile_source, &snippet.compiler, &snippet.options)
    }

    /// Build the layout from raw parts.
    #[must_use]
    pub fn new(source: &str, compiler: &str, options: &str) -> Self {
        let content = vec![
            Component {
                kind: "component",
                name: "codeEditor",
                state: ComponentState::Editor(EditorState {
                    id: EDITOR_ID,
                    source: source.to_owned(),
                    options: EditorOptions {
                        compile_on_change: true,
                        colourise_asm: true,
                    },
                    font_scale: 1,
                }),
            },
            Component {
                kind: "component",
                name: "compiler",
                state: ComponentState::Compiler(CompilerState {
                    source: EDITOR_ID,
                    filters: Filters {
                        comment_only: true,
                        directives: true,
                        intel: true,
                        labels: true,
                        trim: true,
                        execute: true,
                    },
                    options: options.to_owned(),
                    compiler: compiler.to_owned(),
                    font_scale: 1,
                }),
            },
            Component {
                kind: "component",
                name: "output",
                state: ComponentState::Output(OutputState {
                    source: EDITOR_ID,
                    compiler: EDITOR_ID,
                }),
            },
        ];

        Self {
            version: CLIENT_STATE_VERSION,
            content: vec![Row {
                kind: "row",
                content,
            }],
        }
    }

    /// Serialize and percent-encode into the URL fragment form.
    pub fn fragment(&self) -> Result<String, StateError> {
        let json = serde_json::to_string(self)?;
        Ok(encode_fragment(&json))
    }
}
