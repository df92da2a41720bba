//! Wire types for the snake protocol
//! These round-trip through the client in full on every request

use serde::{Deserialize, Serialize};

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Snake head position and current velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snake {
    /// Horizontal position
    pub x: i32,
    /// Vertical position
    pub y: i32,
    /// X velocity (-1 left, 0, 1 right)
    pub vel_x: i32,
    /// Y velocity (-1 up, 0, 1 down)
    pub vel_y: i32,
}

impl Snake {
    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

/// One historical velocity sample, newest-first in a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub vel_x: i32,
    pub vel_y: i32,
}

/// Full game state as declared by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game_id: String,
    pub width: i32,
    pub height: i32,
    pub score: i32,
    pub fruit: Position,
    pub snake: Snake,
}

impl GameState {
    /// Whether a cell lies on the board
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}

/// A client submission: the declared current state plus the movement ticks
/// that led up to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub recv_state: GameState,
    pub ticks: Vec<Tick>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        let submission = Submission {
            recv_state: GameState {
                game_id: "g-1".to_string(),
                width: 10,
                height: 10,
                score: 0,
                fruit: Position { x: 3, y: 4 },
                snake: Snake {
                    x: 0,
                    y: 0,
                    vel_x: 1,
                    vel_y: 0,
                },
            },
            ticks: vec![Tick { vel_x: 1, vel_y: 0 }],
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["recvState"]["gameId"], "g-1");
        assert_eq!(json["recvState"]["snake"]["velX"], 1);
        assert_eq!(json["recvState"]["snake"]["velY"], 0);
        assert_eq!(json["ticks"][0]["velX"], 1);
    }

    #[test]
    fn submission_round_trips() {
        let raw = r#"{
            "recvState": {
                "gameId": "abc",
                "width": 160,
                "height": 160,
                "score": 2,
                "fruit": {"x": 5, "y": 6},
                "snake": {"x": 32, "y": 0, "velX": 1, "velY": 0}
            },
            "ticks": [{"velX": 1, "velY": 0}, {"velX": 0, "velY": 1}]
        }"#;

        let submission: Submission = serde_json::from_str(raw).unwrap();
        assert_eq!(submission.recv_state.score, 2);
        assert_eq!(submission.ticks.len(), 2);
        assert_eq!(submission.ticks[1].vel_y, 1);
    }

    #[test]
    fn contains_checks_both_axes() {
        let state = GameState {
            game_id: "g".to_string(),
            width: 20,
            height: 5,
            score: 0,
            fruit: Position { x: 0, y: 0 },
            snake: Snake {
                x: 0,
                y: 0,
                vel_x: 1,
                vel_y: 0,
            },
        };
        assert!(state.contains(19, 4));
        assert!(!state.contains(20, 4));
        // y bounded by height, not width
        assert!(!state.contains(10, 10));
        assert!(!state.contains(-1, 0));
    }
}
