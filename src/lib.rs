//! Client-side core of a small blog reader.
//!
//! - [`api`] - article data types and the API client contract
//! - [`store`] - MVI store holding good counts and the current selection
//! - [`hooks`] - optimistic good-count updates and article loaders
//! - [`config`] - TOML configuration
//! - [`logging`] - tracing subscriber setup

pub mod api;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod store;
