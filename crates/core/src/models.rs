//! Domain models for the fantasy-league entity graph.
//!
//! These models are transport-agnostic and represent the canonical form of
//! upstream data within the gateway. They carry the upstream numeric ids as
//! their only identity; instances are rebuilt from fresh fetches on every
//! request.

use chrono::{DateTime, Utc};

// =============================================================================
// Roster Entities
// =============================================================================

/// A player from the upstream roster.
///
/// `cost` is the upstream `now_cost` converted from integer tenths to the
/// decimal price shown to users (75 -> 7.5).
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Upstream element id.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub goals_scored: i32,
    pub assists: i32,
    pub total_points: i32,
    /// Price in millions (upstream tenths / 10).
    pub cost: f64,
    /// Id of the team this player belongs to.
    pub team_id: i32,
}

/// A team from the upstream roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

// =============================================================================
// Per-Player Match Data
// =============================================================================

/// One historical match entry for a player.
///
/// Stat fields are carried verbatim from upstream; `value` is converted
/// from integer tenths to decimal (float division).
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Player (element) id this entry belongs to.
    pub element: i32,
    /// Upstream fixture id.
    pub fixture: i32,
    /// Id of the opposing team.
    pub opponent_team: i32,
    pub total_points: i32,
    pub was_home: bool,
    pub kickoff_time: DateTime<Utc>,
    pub team_h_score: Option<i32>,
    pub team_a_score: Option<i32>,
    /// Gameweek number.
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

/// An upcoming fixture for a player.
///
/// Scheduling fields are absent upstream until the gameweek is scheduled,
/// score fields until the match is played.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Upstream fixture id.
    pub id: i32,
    /// Stable upstream match code.
    pub code: i32,
    /// Home team id.
    pub team_h: i32,
    /// Away team id.
    pub team_a: i32,
    /// Gameweek number.
    pub event: Option<i32>,
    pub event_name: Option<String>,
    pub finished: bool,
    pub minutes: i32,
    pub provisional_start_time: bool,
    pub kickoff_time: Option<DateTime<Utc>>,
    pub team_h_score: Option<i32>,
    pub team_a_score: Option<i32>,
    /// Whether the player's own team plays at home.
    pub is_home: bool,
    pub difficulty: i32,
}

// =============================================================================
// Upstream Responses
// =============================================================================

/// The full roster returned by the upstream bootstrap endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bootstrap {
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
}

impl Bootstrap {
    /// Look up a team by id.
    pub fn team(&self, id: i32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Look up a player by id.
    pub fn player(&self, id: i32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// Per-player match data returned by the upstream element-summary endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementSummary {
    /// Matches already played, in upstream order.
    pub history: Vec<Game>,
    /// Upcoming fixtures, in upstream order.
    pub fixtures: Vec<Fixture>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_lookups() {
        let boot = Bootstrap {
            players: vec![],
            teams: vec![
                Team { id: 1, name: "A".into() },
                Team { id: 2, name: "B".into() },
            ],
        };
        assert_eq!(boot.team(2).map(|t| t.name.as_str()), Some("B"));
        assert!(boot.team(999).is_none());
    }
}
