//! Core domain layer for the Scout gateway.
//!
//! This crate contains the domain models, the upstream port trait, and the
//! error types for the fantasy-league GraphQL gateway. It follows hexagonal
//! architecture principles - this is the innermost layer with no
//! dependencies on infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               scout (binary)                │
//! ├─────────────────────────────────────────────┤
//! │   scout-graphql        │     scout-fpl      │
//! │   (API + server)       │   (REST adapter)   │
//! ├────────────────────────┴────────────────────┤
//! │          scout-core  ← YOU ARE HERE         │
//! │          (models, ports, errors)            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`models`] - Domain models (Player, Team, Game, Fixture)
//! - [`ports`] - Interface traits for adapters to implement
//! - [`error`] - Domain error types
//! - [`metrics`] - Prometheus metrics definitions
//!
//! # Key Concepts
//!
//! ## Ports
//!
//! [`ports::FantasyApi`] is the single port of this system: the interface
//! to the upstream fantasy-league REST service. The `scout-fpl` crate
//! provides the HTTP implementation; tests substitute in-memory stubs.
//!
//! ## Request Lifecycle
//!
//! Entities exist only for the duration of one GraphQL field-resolution
//! tree. There is no persistent storage and no cross-request cache: every
//! operation rebuilds its view of the upstream data from fresh fetches,
//! deduplicated within the operation by the gateway's request-scoped
//! loader (which lives in `scout-graphql`).

pub mod error;
pub mod metrics;
pub mod models;
pub mod ports;
