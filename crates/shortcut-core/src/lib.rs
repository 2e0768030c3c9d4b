//! Core types and traits for the shortcut URL shortener.
//!
//! This crate provides the shared vocabulary used by the generator,
//! storage, service, and gateway crates: the [`ShortCode`] type, the
//! URL validator, and the [`Repository`] and [`Shortener`] traits.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;
pub mod validate;

pub use error::{ShortenerError, StorageError};
pub use repository::Repository;
pub use shortcode::ShortCode;
pub use shortener::Shortener;
