//! Port trait for the upstream fantasy-league REST API.
//!
//! This trait defines the interface for fetching roster and per-player
//! match data from the upstream service. The HTTP implementation lives in
//! the infrastructure layer (`scout-fpl`); tests provide in-memory stubs.

use async_trait::async_trait;

use crate::error::UpstreamResult;
use crate::models::{Bootstrap, ElementSummary};

/// Read access to the upstream fantasy-league REST API.
///
/// Implementations are stateless and shared across requests as
/// `Arc<dyn FantasyApi>`; every call issues an independent upstream fetch.
/// Callers that need the bootstrap payload more than once within a single
/// response tree are expected to memoize it themselves.
#[async_trait]
pub trait FantasyApi: Send + Sync {
    /// Fetch the full roster (all players and teams) in one response.
    async fn bootstrap(&self) -> UpstreamResult<Bootstrap>;

    /// Fetch match history and upcoming fixtures for one player.
    async fn element_summary(&self, player_id: i32) -> UpstreamResult<ElementSummary>;
}
