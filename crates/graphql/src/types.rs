//! GraphQL entity types and their field resolvers.
//!
//! Scalar fields come straight off the domain models; relation fields
//! (`team`, `players`, `opp_team`, `history`, `fixtures`) are resolved
//! lazily, only when the selection set asks for them. Roster lookups go
//! through the request's [`BootstrapLoader`]; per-player match data is
//! fetched from the [`FantasyApi`] port directly.
//!
//! Field naming follows the upstream wire shape: camelCase on `Player`
//! (`firstName`, `teamID`), snake_case on the pass-through `Game` and
//! `Fixture` stat blocks.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use chrono::SecondsFormat;

use scout_core::error::DomainError;
use scout_core::models;
use scout_core::ports::FantasyApi;

use crate::loader::BootstrapLoader;

// -----------------------------------------------------------------------------
// Player
// -----------------------------------------------------------------------------

/// A player from the upstream roster.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Player {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub assists: i32,
    pub goals_scored: i32,
    pub total_points: i32,
    /// Price in millions (upstream tenths / 10).
    pub cost: f64,
    #[graphql(name = "teamID")]
    pub team_id: i32,
}

#[ComplexObject]
impl Player {
    /// The team this player belongs to.
    ///
    /// A roster that names a team id it does not contain is inconsistent
    /// upstream data and surfaces as a field error.
    async fn team(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        resolve_team(ctx, self.team_id).await.map(Some)
    }

    /// Matches already played this season, in upstream order.
    async fn history(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let api = ctx.data::<Arc<dyn FantasyApi>>()?;
        let summary = api.element_summary(self.id).await?;
        Ok(summary.history.into_iter().map(Game::from).collect())
    }

    /// Upcoming fixtures, in upstream order.
    async fn fixtures(&self, ctx: &Context<'_>) -> Result<Vec<Fixture>> {
        let api = ctx.data::<Arc<dyn FantasyApi>>()?;
        let summary = api.element_summary(self.id).await?;
        Ok(summary.fixtures.into_iter().map(Fixture::from).collect())
    }
}

impl From<models::Player> for Player {
    fn from(p: models::Player) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            assists: p.assists,
            goals_scored: p.goals_scored,
            total_points: p.total_points,
            cost: p.cost,
            team_id: p.team_id,
        }
    }
}

// -----------------------------------------------------------------------------
// Team
// -----------------------------------------------------------------------------

/// A team from the upstream roster.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Team {
    /// Every player belonging to this team, in upstream roster order.
    ///
    /// Derived by filtering the full player list on team id; upstream has
    /// no per-team index.
    async fn players(&self, ctx: &Context<'_>) -> Result<Option<Vec<Player>>> {
        let boot = ctx.data::<BootstrapLoader>()?.get().await?;
        Ok(Some(
            boot.players
                .iter()
                .filter(|p| p.team_id == self.id)
                .cloned()
                .map(Player::from)
                .collect(),
        ))
    }
}

impl From<models::Team> for Team {
    fn from(t: models::Team) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

// -----------------------------------------------------------------------------
// Game (one historical match entry)
// -----------------------------------------------------------------------------

/// One historical match entry for a player, stats verbatim from upstream.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Game {
    pub element: i32,
    pub fixture: i32,
    pub opponent_team: i32,
    pub total_points: i32,
    pub was_home: bool,
    pub kickoff_time: String,
    pub team_h_score: Option<i32>,
    pub team_a_score: Option<i32>,
    pub round: i32,
    pub minutes: i32,
    pub goals_scored: i32,
    pub assists: i32,
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub own_goals: i32,
    pub penalties_saved: i32,
    pub penalties_missed: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub saves: i32,
    pub bonus: i32,
    pub bps: i32,
    pub influence: String,
    pub creativity: String,
    pub threat: String,
    pub ict_index: String,
    /// Player price at kickoff, in millions (upstream tenths / 10).
    pub value: f64,
    pub transfers_balance: i32,
    pub selected: i32,
    pub transfers_in: i32,
    pub transfers_out: i32,
}

#[ComplexObject]
impl Game {
    /// The opposing team in this match.
    #[graphql(name = "opp_team")]
    async fn opp_team(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        resolve_team(ctx, self.opponent_team).await.map(Some)
    }
}

impl From<models::Game> for Game {
    fn from(g: models::Game) -> Self {
        Self {
            element: g.element,
            fixture: g.fixture,
            opponent_team: g.opponent_team,
            total_points: g.total_points,
            was_home: g.was_home,
            kickoff_time: g.kickoff_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            team_h_score: g.team_h_score,
            team_a_score: g.team_a_score,
            round: g.round,
            minutes: g.minutes,
            goals_scored: g.goals_scored,
            assists: g.assists,
            clean_sheets: g.clean_sheets,
            goals_conceded: g.goals_conceded,
            own_goals: g.own_goals,
            penalties_saved: g.penalties_saved,
            penalties_missed: g.penalties_missed,
            yellow_cards: g.yellow_cards,
            red_cards: g.red_cards,
            saves: g.saves,
            bonus: g.bonus,
            bps: g.bps,
            influence: g.influence,
            creativity: g.creativity,
            threat: g.threat,
            ict_index: g.ict_index,
            value: g.value,
            transfers_balance: g.transfers_balance,
            selected: g.selected,
            transfers_in: g.transfers_in,
            transfers_out: g.transfers_out,
        }
    }
}

// -----------------------------------------------------------------------------
// Fixture
// -----------------------------------------------------------------------------

/// An upcoming fixture for a player, passed through from upstream.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Fixture {
    pub id: i32,
    pub code: i32,
    pub team_h: i32,
    pub team_a: i32,
    pub event: Option<i32>,
    pub event_name: Option<String>,
    pub finished: bool,
    pub minutes: i32,
    pub provisional_start_time: bool,
    pub kickoff_time: Option<String>,
    pub team_h_score: Option<i32>,
    pub team_a_score: Option<i32>,
    pub is_home: bool,
    pub difficulty: i32,
}

#[ComplexObject]
impl Fixture {
    /// The opposing team, viewed from the player's side: the away team
    /// when the player's team is at home, the home team otherwise.
    #[graphql(name = "opp_team")]
    async fn opp_team(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        let opponent_id = if self.is_home { self.team_a } else { self.team_h };
        resolve_team(ctx, opponent_id).await.map(Some)
    }
}

impl From<models::Fixture> for Fixture {
    fn from(f: models::Fixture) -> Self {
        Self {
            id: f.id,
            code: f.code,
            team_h: f.team_h,
            team_a: f.team_a,
            event: f.event,
            event_name: f.event_name,
            finished: f.finished,
            minutes: f.minutes,
            provisional_start_time: f.provisional_start_time,
            kickoff_time: f
                .kickoff_time
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            team_h_score: f.team_h_score,
            team_a_score: f.team_a_score,
            is_home: f.is_home,
            difficulty: f.difficulty,
        }
    }
}

// -----------------------------------------------------------------------------
// Shared lookups
// -----------------------------------------------------------------------------

/// Look up a team in the request's roster snapshot.
///
/// A missing id fails the field (typed error), never a silent null.
pub(crate) async fn resolve_team(ctx: &Context<'_>, team_id: i32) -> Result<Team> {
    let boot = ctx.data::<BootstrapLoader>()?.get().await?;
    let team = boot
        .team(team_id)
        .cloned()
        .ok_or(DomainError::TeamNotFound(team_id))?;
    Ok(Team::from(team))
}
