//! StatsBomb open-data JSON documents.
//!
//! Only the fields the shot map reads are modelled; everything else in the
//! files is ignored. Fields that only some event types carry are optional
//! here and checked once an event is known to be a shot.

use std::collections::HashMap;

use serde::Deserialize;

/// `{"id": .., "name": ..}` pair used throughout the event feed.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Named {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Player {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ShotDetail {
    pub statsbomb_xg: Option<f64>,
    pub outcome: Option<Named>,
}

/// One entry of an events file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Event {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub index: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Named,
    #[serde(default)]
    pub minute: Option<u32>,
    #[serde(default)]
    pub possession_team: Option<Named>,
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub location: Option<Vec<f64>>,
    #[serde(default)]
    pub shot: Option<ShotDetail>,
}

impl Event {
    pub fn is_shot(&self) -> bool {
        self.kind.name == "Shot"
    }

    /// Identifier used in error messages.
    pub fn describe(&self) -> String {
        match (&self.id, self.index) {
            (Some(id), _) => format!("event {id}"),
            (None, Some(index)) => format!("event #{index}"),
            (None, None) => "unidentified event".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LineupPlayer {
    pub player_id: u64,
    #[serde(default)]
    pub player_nickname: Option<String>,
}

/// One team of a lineups file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TeamLineup {
    #[serde(default)]
    pub lineup: Vec<LineupPlayer>,
}

pub(crate) fn parse_events(src: &str) -> Result<Vec<Event>, serde_json::Error> {
    serde_json::from_str(src)
}

pub(crate) fn parse_lineups(src: &str) -> Result<Vec<TeamLineup>, serde_json::Error> {
    serde_json::from_str(src)
}

/// Every lineup player's id, mapped to their nickname if they have one.
pub(crate) fn nicknames(teams: &[TeamLineup]) -> HashMap<u64, Option<String>> {
    teams
        .iter()
        .flat_map(|team| &team.lineup)
        .map(|player| {
            let nickname = player
                .player_nickname
                .as_ref()
                .filter(|nickname| !nickname.trim().is_empty())
                .cloned();
            (player.player_id, nickname)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shot_event() {
        let src = r#"[{
            "id": "a1",
            "index": 7,
            "type": {"id": 16, "name": "Shot"},
            "minute": 23,
            "possession_team": {"id": 1, "name": "Arsenal"},
            "player": {"id": 15, "name": "Bukayo Saka"},
            "location": [104.2, 33.1],
            "shot": {"statsbomb_xg": 0.12, "outcome": {"id": 97, "name": "Goal"}},
            "under_pressure": true
        }]"#;

        let events = parse_events(src).unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_shot());
        assert_eq!(events[0].minute, Some(23));
        assert_eq!(events[0].describe(), "event a1");
    }

    #[test]
    fn test_parse_non_shot_without_optional_fields() {
        let src = r#"[{"index": 1, "type": {"id": 35, "name": "Starting XI"}}]"#;
        let events = parse_events(src).unwrap();
        assert!(!events[0].is_shot());
        assert_eq!(events[0].describe(), "event #1");
    }

    #[test]
    fn test_parse_events_rejects_missing_type() {
        assert!(parse_events(r#"[{"id": "x"}]"#).is_err());
    }

    #[test]
    fn test_nicknames() {
        let src = r#"[
            {"team_id": 1, "team_name": "A", "lineup": [
                {"player_id": 10, "player_name": "Ronaldo de Assis Moreira", "player_nickname": "Ronaldinho"},
                {"player_id": 11, "player_name": "Carles Puyol Saforcada", "player_nickname": null}
            ]},
            {"team_id": 2, "team_name": "B", "lineup": [
                {"player_id": 20, "player_name": "Some Player", "player_nickname": ""}
            ]}
        ]"#;

        let names = nicknames(&parse_lineups(src).unwrap());
        assert_eq!(names.len(), 3);
        assert_eq!(names[&10].as_deref(), Some("Ronaldinho"));
        assert_eq!(names[&11], None);
        assert_eq!(names[&20], None);
    }
}
