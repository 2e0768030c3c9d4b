//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], the concrete
//! [`Shortener`](shortcut_core::Shortener) implementation composing a
//! repository and a code generator.

pub mod service;

pub use service::ShortenerService;
