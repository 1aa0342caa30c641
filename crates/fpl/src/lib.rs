//! Fantasy Premier League REST adapter for the Scout gateway.
//!
//! This crate implements the [`FantasyApi`] port from `scout-core`,
//! translating the two upstream REST endpoints into domain models:
//!
//! - `GET {base}/bootstrap-static/` - the full player and team roster
//! - `GET {base}/element-summary/{id}/` - one player's match history and
//!   upcoming fixtures
//!
//! # Features
//!
//! - Pooled `reqwest` client shared across requests
//! - Pure field mappers from upstream JSON shapes to domain models,
//!   including tenths-to-decimal price conversion
//! - Typed upstream errors (transport / status / decode) on both endpoints
//!
//! # Usage
//!
//! ```ignore
//! use scout_fpl::{FplClient, FplClientConfig};
//!
//! let client = FplClient::new(FplClientConfig::default())?;
//! let roster = client.bootstrap().await?;
//! let summary = client.element_summary(roster.players[0].id).await?;
//! ```
//!
//! [`FantasyApi`]: scout_core::ports::FantasyApi

mod client;
mod payload;

pub use client::{FplClient, FplClientConfig};
