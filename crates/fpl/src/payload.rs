//! Upstream JSON payload types and field mappers.
//!
//! The structs here mirror the wire shape of the two upstream endpoints;
//! the `From` impls are the pure mappers into domain models. Unknown
//! upstream fields are ignored on decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use scout_core::models::{Bootstrap, ElementSummary, Fixture, Game, Player, Team};

// =============================================================================
// bootstrap-static/
// =============================================================================

/// `bootstrap-static/` response body (the roster subset the gateway uses).
#[derive(Debug, Deserialize)]
pub struct BootstrapPayload {
    pub elements: Vec<ElementPayload>,
    pub teams: Vec<TeamPayload>,
}

/// One entry of the upstream `elements` array.
#[derive(Debug, Deserialize)]
pub struct ElementPayload {
    pub id: i32,
    pub first_name: String,
    pub second_name: String,
    pub goals_scored: i32,
    pub assists: i32,
    pub total_points: i32,
    /// Price in integer tenths of a million.
    pub now_cost: i32,
    /// Owning team id.
    pub team: i32,
}

/// One entry of the upstream `teams` array.
#[derive(Debug, Deserialize)]
pub struct TeamPayload {
    pub id: i32,
    pub name: String,
}

impl From<BootstrapPayload> for Bootstrap {
    fn from(payload: BootstrapPayload) -> Self {
        Self {
            players: payload.elements.into_iter().map(Player::from).collect(),
            teams: payload.teams.into_iter().map(Team::from).collect(),
        }
    }
}

impl From<ElementPayload> for Player {
    fn from(e: ElementPayload) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.second_name,
            goals_scored: e.goals_scored,
            assists: e.assists,
            total_points: e.total_points,
            cost: f64::from(e.now_cost) / 10.0,
            team_id: e.team,
        }
    }
}

impl From<TeamPayload> for Team {
    fn from(t: TeamPayload) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

// =============================================================================
// element-summary/{id}/
// =============================================================================

/// `element-summary/{id}/` response body.
#[derive(Debug, Deserialize)]
pub struct ElementSummaryPayload {
    pub history: Vec<HistoryPayload>,
    pub fixtures: Vec<FixturePayload>,
}

/// One entry of the upstream `history` array.
#[derive(Debug, Deserialize)]
pub struct HistoryPayload {
    pub element: i32,
    pub fixture: i32,
    pub opponent_team: i32,
    pub total_points: i32,
    pub was_home: bool,
    pub kickoff_time: DateTime<Utc>,
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
    /// Price at kickoff in integer tenths; upstream reports a number or a
    /// numeric string depending on season.
    #[serde(deserialize_with = "tenths")]
    pub value: f64,
    pub transfers_balance: i32,
    pub selected: i32,
    pub transfers_in: i32,
    pub transfers_out: i32,
}

/// One entry of the upstream `fixtures` array.
#[derive(Debug, Deserialize)]
pub struct FixturePayload {
    pub id: i32,
    pub code: i32,
    pub team_h: i32,
    pub team_a: i32,
    pub event: Option<i32>,
    pub event_name: Option<String>,
    pub finished: bool,
    pub minutes: i32,
    pub provisional_start_time: bool,
    pub kickoff_time: Option<DateTime<Utc>>,
    pub team_h_score: Option<i32>,
    pub team_a_score: Option<i32>,
    pub is_home: bool,
    pub difficulty: i32,
}

impl From<ElementSummaryPayload> for ElementSummary {
    fn from(payload: ElementSummaryPayload) -> Self {
        Self {
            history: payload.history.into_iter().map(Game::from).collect(),
            fixtures: payload.fixtures.into_iter().map(Fixture::from).collect(),
        }
    }
}

impl From<HistoryPayload> for Game {
    fn from(h: HistoryPayload) -> Self {
        Self {
            element: h.element,
            fixture: h.fixture,
            opponent_team: h.opponent_team,
            total_points: h.total_points,
            was_home: h.was_home,
            kickoff_time: h.kickoff_time,
            team_h_score: h.team_h_score,
            team_a_score: h.team_a_score,
            round: h.round,
            minutes: h.minutes,
            goals_scored: h.goals_scored,
            assists: h.assists,
            clean_sheets: h.clean_sheets,
            goals_conceded: h.goals_conceded,
            own_goals: h.own_goals,
            penalties_saved: h.penalties_saved,
            penalties_missed: h.penalties_missed,
            yellow_cards: h.yellow_cards,
            red_cards: h.red_cards,
            saves: h.saves,
            bonus: h.bonus,
            bps: h.bps,
            influence: h.influence,
            creativity: h.creativity,
            threat: h.threat,
            ict_index: h.ict_index,
            value: h.value,
            transfers_balance: h.transfers_balance,
            selected: h.selected,
            transfers_in: h.transfers_in,
            transfers_out: h.transfers_out,
        }
    }
}

impl From<FixturePayload> for Fixture {
    fn from(f: FixturePayload) -> Self {
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
            kickoff_time: f.kickoff_time,
            team_h_score: f.team_h_score,
            team_a_score: f.team_a_score,
            is_home: f.is_home,
            difficulty: f.difficulty,
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Deserialize a price in integer tenths - reported by upstream as either
/// a JSON number or a numeric string - into decimal millions.
fn tenths<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    let tenths = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom)?,
    };

    // Float division: 45 tenths is 4.5, not 4.
    Ok(tenths as f64 / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn history_json(value: serde_json::Value) -> serde_json::Value {
        json!({
            "element": 10,
            "fixture": 3,
            "opponent_team": 2,
            "total_points": 9,
            "was_home": true,
            "kickoff_time": "2019-08-10T11:30:00Z",
            "team_h_score": 2,
            "team_a_score": 1,
            "round": 1,
            "minutes": 90,
            "goals_scored": 1,
            "assists": 1,
            "clean_sheets": 0,
            "goals_conceded": 1,
            "own_goals": 0,
            "penalties_saved": 0,
            "penalties_missed": 0,
            "yellow_cards": 0,
            "red_cards": 0,
            "saves": 0,
            "bonus": 3,
            "bps": 54,
            "influence": "60.2",
            "creativity": "24.3",
            "threat": "38.0",
            "ict_index": "12.3",
            "value": value,
            "transfers_balance": 0,
            "selected": 1200543,
            "transfers_in": 0,
            "transfers_out": 0
        })
    }

    #[test]
    fn test_player_cost_is_tenths_of_now_cost() {
        let element: ElementPayload = serde_json::from_value(json!({
            "id": 10,
            "first_name": "Mohamed",
            "second_name": "Salah",
            "goals_scored": 19,
            "assists": 12,
            "total_points": 233,
            "now_cost": 75,
            "team": 1,
            "web_name": "Salah"
        }))
        .unwrap();

        let player = Player::from(element);
        assert_eq!(player.cost, 7.5);
        assert_eq!(player.last_name, "Salah");
        assert_eq!(player.team_id, 1);
    }

    #[test]
    fn test_game_value_from_numeric_string() {
        let history: HistoryPayload = serde_json::from_value(history_json(json!("45"))).unwrap();
        let game = Game::from(history);
        assert_eq!(game.value, 4.5);
    }

    #[test]
    fn test_game_value_from_integer() {
        let history: HistoryPayload = serde_json::from_value(history_json(json!(45))).unwrap();
        assert_eq!(history.value, 4.5);
    }

    #[test]
    fn test_game_value_rejects_non_numeric_string() {
        assert!(serde_json::from_value::<HistoryPayload>(history_json(json!("n/a"))).is_err());
    }

    #[test]
    fn test_bootstrap_mapping() {
        let payload: BootstrapPayload = serde_json::from_value(json!({
            "elements": [{
                "id": 10,
                "first_name": "Mohamed",
                "second_name": "Salah",
                "goals_scored": 19,
                "assists": 12,
                "total_points": 233,
                "now_cost": 126,
                "team": 1
            }],
            "teams": [
                {"id": 1, "name": "Liverpool", "short_name": "LIV"},
                {"id": 2, "name": "Arsenal", "short_name": "ARS"}
            ],
            "events": []
        }))
        .unwrap();

        let boot = Bootstrap::from(payload);
        assert_eq!(boot.players.len(), 1);
        assert_eq!(boot.players[0].cost, 12.6);
        assert_eq!(boot.teams[1].name, "Arsenal");
    }

    #[test]
    fn test_element_summary_mapping_preserves_order() {
        let payload: ElementSummaryPayload = serde_json::from_value(json!({
            "history": [history_json(json!(45)), history_json(json!(46))],
            "fixtures": []
        }))
        .unwrap();

        let summary = ElementSummary::from(payload);
        assert_eq!(summary.history.len(), 2);
        assert_eq!(summary.history[0].value, 4.5);
        assert_eq!(summary.history[1].value, 4.6);
        assert!(summary.fixtures.is_empty());
    }

    // Future fixtures carry null scheduling and score fields.
    #[test]
    fn test_fixture_with_unscheduled_gameweek() {
        let fixture: FixturePayload = serde_json::from_value(json!({
            "id": 7,
            "code": 2210000,
            "team_h": 1,
            "team_a": 2,
            "event": null,
            "event_name": null,
            "finished": false,
            "minutes": 0,
            "provisional_start_time": false,
            "kickoff_time": null,
            "team_h_score": null,
            "team_a_score": null,
            "is_home": true,
            "difficulty": 2
        }))
        .unwrap();

        let fixture = Fixture::from(fixture);
        assert_eq!(fixture.event, None);
        assert_eq!(fixture.kickoff_time, None);
        assert!(fixture.is_home);
    }
}
