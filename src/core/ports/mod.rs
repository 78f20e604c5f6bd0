//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the extraction logic and the
//! host: the editor holding the cursor, the storage holding documents, and
//! the surface that shows notices to the user.
//!
//! Implementations live in the `adapters` module; tests use in-memory fakes.

mod document_store;
mod editor;
mod notifier;

pub use document_store::{DocumentStore, StoreError};
pub use editor::Editor;
pub use notifier::{Notice, NoticeLevel, Notifier};
