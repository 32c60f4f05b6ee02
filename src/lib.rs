pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod scope;
pub mod source;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, Settings};
pub use error::{Result, ScopeError};
pub use render::{
    DocumentRenderer, Renderer, burp::BurpRenderer, raw::RawRenderer, zap::ZapRenderer,
};
pub use scope::{Markers, Merged, ScopeDocument, ScopeEntry, TargetKind, merge, parse};
pub use source::{FileSource, ScopeSource};
