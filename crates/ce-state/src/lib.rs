//! Compiler Explorer client-state payloads.
//!
//! Builds the versioned `{version: 4, content: [...]}` document the
//! Compiler Explorer web app reads from its URL fragment, and encodes it
//! the way the browser's `encodeURIComponent` would. The layout is a
//! single row holding an editor, a compiler and an output pane,
//! cross-referenced by small integer ids.
//!
//! # Example
//!
//! ```
//! use ce_state::{ClientState, Endpoint};
//!
//! let state = ClientState::new("int main() {}\n", "g8", "-O2");
//! let url = Endpoint::Production.url_for(&state)?;
//!
//! assert!(url.starts_with("https://godbolt.org/#"));
//! # Ok::<(), ce_state::StateError>(())
//! ```

mod encode;
mod endpoint;
mod layout;

pub use encode::encode_fragment;
pub use endpoint::Endpoint;
pub use layout::{ClientState, StateError};
