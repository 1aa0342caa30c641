//! GraphQL schema definition.
//!
//! One query root over the four entity types. Every root resolver reads
//! the roster through the request's [`BootstrapLoader`], so a single
//! operation costs one bootstrap fetch no matter how many roster-backed
//! fields it touches.

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema, ID};

use scout_core::ports::FantasyApi;

use crate::loader::BootstrapLoader;
use crate::types::{resolve_team, Player, Team};

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth (DoS protection). The Player⇄Team cycle makes the
/// schema infinitely recursive; introspection needs depth ~13, so 15
/// allows it while bounding hostile nesting.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
/// Each field has a default complexity of 1, nested objects multiply.
pub const MAX_QUERY_COMPLEXITY: usize = 500;

/// The compiled gateway schema type.
pub type ScoutSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the gateway schema around an upstream port handle.
///
/// The port is schema data (stateless, shared across requests); the
/// per-request [`BootstrapLoader`] is injected by the HTTP handler.
pub fn build_schema(api: Arc<dyn FantasyApi>) -> ScoutSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(api)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

// -----------------------------------------------------------------------------
// Query Root
// -----------------------------------------------------------------------------

/// Query root for the fantasy-league entity graph.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a player by id. Unknown ids resolve to null.
    async fn player(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Player>> {
        let Ok(id) = id.parse::<i32>() else {
            return Ok(None);
        };
        let boot = ctx.data::<BootstrapLoader>()?.get().await?;
        Ok(boot.player(id).cloned().map(Player::from))
    }

    /// List every player in the upstream roster.
    async fn players(&self, ctx: &Context<'_>) -> Result<Option<Vec<Player>>> {
        let boot = ctx.data::<BootstrapLoader>()?.get().await?;
        Ok(Some(
            boot.players.iter().cloned().map(Player::from).collect(),
        ))
    }

    /// Get a team by id. Unknown ids fail the field, not a silent null.
    async fn team(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Team>> {
        let id = id
            .parse::<i32>()
            .map_err(|_| async_graphql::Error::new(format!("Invalid team id: {}", *id)))?;
        resolve_team(ctx, id).await.map(Some)
    }

    /// List every team in the upstream roster.
    async fn teams(&self, ctx: &Context<'_>) -> Result<Option<Vec<Team>>> {
        let boot = ctx.data::<BootstrapLoader>()?.get().await?;
        Ok(Some(boot.teams.iter().cloned().map(Team::from).collect()))
    }
}
