//! Emoji Importer Core Library
//!
//! This library provides the core functionality for the emoji importer,
//! which migrates a batch of named custom emojis described by a JSON
//! manifest into a Mattermost server.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`sanitize`] - Unicode emoji names to the platform identifier alphabet
//! - [`manifest`] - Manifest loading and source classification
//! - [`http`] - Shared HTTP client construction
//! - [`fetch`] - Image retrieval from source URLs
//! - [`platform`] - Identity resolution and emoji creation against the platform API
//! - [`import`] - Sequential, paced import of every manifest entry
//! - [`config`] - Explicit run configuration

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod fetch;
pub mod http;
pub mod import;
pub mod manifest;
pub mod platform;
pub mod sanitize;
mod user_agent;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{ConfigError, DEFAULT_DELAY_MS, DEFAULT_TIMEOUT_SECS, ImportConfig};
pub use fetch::{FetchError, FetchedAsset, ImageFetcher, ImageSource};
pub use http::HttpClient;
pub use import::{
    EntryOutcome, ImportError, ImportOrchestrator, ImportReport, OutcomeRecord, Pacer, run_import,
};
pub use manifest::{Manifest, ManifestError, Source};
pub use platform::{
    AccessToken, EmojiSink, IdentityError, InvalidServerUrl, PlatformClient, Principal, ServerUrl,
    UploadError,
};
pub use sanitize::{MAX_EMOJI_NAME_LEN, sanitize_emoji_name};
