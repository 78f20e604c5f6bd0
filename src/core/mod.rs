//! Core domain logic for mdsplit
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Document, Heading, Section, EmbedMarker)
//! - `services/` - Section scanning, level shifting and the split transaction
//! - `ports/` - Trait definitions for the editor, document storage and notices
//! - `error` - Errors surfaced to the user for a failed extraction

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{ExtractError, InvalidHeadingReason};
