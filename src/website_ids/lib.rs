//! # website-ids
//!
//! Derives a short, stable identifier for every website in an nginxpulse
//! configuration and reports the name → identifier mapping.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  config → report                                            │
//! │  - Resolve configuration from the first present source      │
//! │  - Map non-blank names to identifiers, in order             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ident                                                      │
//! │  - name → 4 hex chars (truncated MD5)                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Library code takes plain Rust values and returns `Result`s. It never prints
//! and never exits; [`config::ConfigSources::from_env`] is the single place
//! that reads the process environment.
//!
//! ## Module Overview
//!
//! - [`config`]: Config resolution (`CONFIG_JSON`, `WEBSITES`, fallback file)
//! - [`ident`]: Identifier derivation
//! - [`report`]: Name → identifier mappings
//! - [`model`]: `Configuration` and `WebsiteEntry`
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod ident;
pub mod model;
pub mod report;
