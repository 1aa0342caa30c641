//! GraphQL API for the Scout gateway.
//!
//! Exposes the fantasy-league entity graph (Player, Team, Game, Fixture)
//! over a single query root, translating nested selection sets into
//! upstream REST fetches through the [`FantasyApi`] port.
//!
//! # Request-Scoped Loading
//!
//! Resolvers never call the upstream port directly for roster data.
//! The HTTP handler seeds every request with a [`BootstrapLoader`] so the
//! first resolver needing the roster fetches it once and every sibling in
//! the same response tree shares the result. Nothing is cached across
//! requests. Per-player element-summary fetches are not deduplicated:
//! each `history`/`fixtures` field issues its own upstream call, as many
//! times as the selection set asks.
//!
//! [`FantasyApi`]: scout_core::ports::FantasyApi

mod loader;
mod schema;
mod server;
mod types;

#[cfg(test)]
mod test_api;

pub use loader::BootstrapLoader;
pub use schema::{
    build_schema, QueryRoot, ScoutSchema, MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH,
};
pub use server::{serve, serve_with_shutdown, ServerConfig};
pub use types::{Fixture, Game, Player, Team};
