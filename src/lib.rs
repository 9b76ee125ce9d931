//! Language server for the Nadesiko language.
//!
//! Provides semantic highlighting and particle-aware document highlights
//! over a token stream that is fully re-scanned on every change.

pub mod analysis;
pub mod config;
pub mod error;
pub mod handlers;
pub mod lexer;
pub mod server;

pub use server::NakoLanguageServer;
