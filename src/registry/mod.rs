//! Process-server registries
//!
//! One generic store, [`ServerRegistry`], instantiated twice:
//! - [`LspManager`] for language-tooling servers, tagged with a [`Language`]
//!   and searchable with `get_by_language`;
//! - [`McpManager`] for protocol adapters, with no extra attributes.
//!
//! Lifecycle per descriptor: registered stopped, then start/stop as often as
//! needed. Starting a running server is an error; stopping a stopped one is not.
//! There is no unregister.

mod descriptor;
mod error;
mod store;

pub use descriptor::{Language, ServerAttributes, ServerDescriptor};
pub use error::RegistryError;
pub use store::ServerRegistry;

/// Language-tooling server registry
pub type LspManager = ServerRegistry<Language>;

/// Protocol-adapter server registry
pub type McpManager = ServerRegistry<()>;
