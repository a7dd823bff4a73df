//! Shot records and their preparation from match files.
//!
//! [`prepare_shots`] turns a StatsBomb events document (plus an optional
//! lineups document) into [`Shot`]s in the plot frame.

mod statsbomb;

use std::collections::HashMap;

use indexmap::IndexSet;
use log::{debug, warn};

use shotmap_core::geometry::Point;

use crate::{
    error::ShotMapError,
    pitch::{Orientation, PitchDimensions},
};

/// Outcome name that marks a shot as scored.
const GOAL_OUTCOME: &str = "Goal";

/// One shot, ready to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    position: Point,
    xg: f64,
    team: String,
    is_goal: bool,
    info: String,
}

impl Shot {
    /// Creates a shot at a plot-frame position.
    pub fn new(
        position: Point,
        xg: f64,
        team: impl Into<String>,
        is_goal: bool,
        info: impl Into<String>,
    ) -> Self {
        Self {
            position,
            xg,
            team: team.into(),
            is_goal,
            info: info.into(),
        }
    }

    /// Position in the plot frame, metres.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn xg(&self) -> f64 {
        self.xg
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn is_goal(&self) -> bool {
        self.is_goal
    }

    /// Label text, e.g. `"Messi 34'"`.
    pub fn info(&self) -> &str {
        &self.info
    }
}

/// Builds the label text for a shot: the last word of the player's name and
/// the minute.
pub fn shot_label(player_name: &str, minute: u32) -> String {
    let surname = player_name
        .split_whitespace()
        .next_back()
        .unwrap_or(player_name);
    format!("{surname} {minute}'")
}

/// Moves plot-frame shots to the opposite end of the pitch.
///
/// Used to put a second data set on the free half of a comparison map.
pub fn mirror_shots(
    shots: &[Shot],
    dimensions: &PitchDimensions,
    orientation: Orientation,
) -> Vec<Shot> {
    shots
        .iter()
        .map(|shot| {
            let pitch_point = orientation.unproject(shot.position, dimensions);
            Shot {
                position: orientation.project(dimensions.mirror(pitch_point), dimensions),
                ..shot.clone()
            }
        })
        .collect()
}

/// Teams in order of first appearance.
pub fn team_order(shots: &[Shot]) -> IndexSet<&str> {
    shots.iter().map(Shot::team).collect()
}

/// Extracts the shots from a StatsBomb events document.
///
/// When `lineups_src` is given, player nicknames from it replace the
/// player names from the events feed.
///
/// # Errors
///
/// - [`ShotMapError::Data`] when either document is not valid JSON of the
///   expected shape.
/// - [`ShotMapError::InvalidData`] when a shot event lacks a field the shot
///   map needs, or carries a non-finite location or xG.
pub fn prepare_shots(
    events_src: &str,
    lineups_src: Option<&str>,
    dimensions: &PitchDimensions,
    orientation: Orientation,
) -> Result<Vec<Shot>, ShotMapError> {
    let events = statsbomb::parse_events(events_src)
        .map_err(|err| ShotMapError::new_data_error("events", err, events_src))?;

    let nicknames = match lineups_src {
        Some(src) => {
            let lineups = statsbomb::parse_lineups(src)
                .map_err(|err| ShotMapError::new_data_error("lineups", err, src))?;
            Some(statsbomb::nicknames(&lineups))
        }
        None => None,
    };

    let shots = events
        .iter()
        .filter(|event| event.is_shot())
        .map(|event| {
            let shot = build_shot(event, nicknames.as_ref(), dimensions)?;
            Ok(Shot {
                position: orientation.project(shot.position, dimensions),
                ..shot
            })
        })
        .collect::<Result<Vec<_>, ShotMapError>>()?;

    debug!(
        event_count = events.len(),
        shot_count = shots.len(),
        orientation:?;
        "Prepared shots"
    );

    Ok(shots)
}

/// Builds a pitch-frame shot from one shot event.
fn build_shot(
    event: &statsbomb::Event,
    nicknames: Option<&HashMap<u64, Option<String>>>,
    dimensions: &PitchDimensions,
) -> Result<Shot, ShotMapError> {
    let missing =
        |field: &str| ShotMapError::InvalidData(format!("{} has no {field}", event.describe()));

    let location = event.location.as_deref().ok_or_else(|| missing("location"))?;
    let [x, y, ..] = location else {
        return Err(missing("location"));
    };
    let detail = event.shot.as_ref().ok_or_else(|| missing("shot"))?;
    let xg = detail
        .statsbomb_xg
        .ok_or_else(|| missing("shot.statsbomb_xg"))?;
    let outcome = detail
        .outcome
        .as_ref()
        .ok_or_else(|| missing("shot.outcome"))?;
    let team = event
        .possession_team
        .as_ref()
        .ok_or_else(|| missing("possession_team"))?;
    let minute = event.minute.ok_or_else(|| missing("minute"))?;
    let player = event.player.as_ref().ok_or_else(|| missing("player"))?;

    if !(x.is_finite() && y.is_finite()) {
        return Err(ShotMapError::InvalidData(format!(
            "{} has a non-finite location",
            event.describe()
        )));
    }
    if !(xg.is_finite() && xg >= 0.0) {
        return Err(ShotMapError::InvalidData(format!(
            "{} has an invalid xG of {xg}",
            event.describe()
        )));
    }

    let name = match nicknames {
        Some(nicknames) => match nicknames.get(&player.id) {
            Some(nickname) => nickname.as_deref().unwrap_or(&player.name),
            None => {
                warn!(player_id = player.id, player_name = player.name; "Player missing from lineups");
                player.name.as_str()
            }
        },
        None => player.name.as_str(),
    };

    Ok(Shot {
        position: dimensions.from_statsbomb(*x, *y),
        xg,
        team: team.name.clone(),
        is_goal: outcome.name == GOAL_OUTCOME,
        info: shot_label(name, minute),
    })
}
