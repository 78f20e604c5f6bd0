//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Documents stored as files on disk
//! - `editor/` - A file opened at a cursor line, standing in for an editor
//! - `console/` - Notices printed to the terminal

pub mod console;
pub mod editor;
pub mod file;

pub use console::ConsoleNotifier;
pub use editor::FileEditor;
pub use file::FsDocumentStore;
