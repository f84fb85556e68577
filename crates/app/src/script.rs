//! Scripted pointer/key input for replaying a selection session

use anyhow::{Context, Result};
use capture::Point;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl From<Pos> for Point {
    fn from(p: Pos) -> Self {
        Point::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Down(Pos),
    Move {
        x: i32,
        y: i32,
        #[serde(default)]
        locked: bool,
    },
    Up,
    Escape,
    Cancel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid input script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        Self::parse(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_step_kinds() {
        let script = Script::parse(
            r#"{ "steps": [
                { "down": { "x": 500, "y": -20 } },
                { "move": { "x": 700, "y": 650 } },
                { "move": { "x": 710, "y": 660, "locked": true } },
                "up", "escape", "cancel"
            ] }"#,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                Step::Down(Pos { x: 500, y: -20 }),
                Step::Move { x: 700, y: 650, locked: false },
                Step::Move { x: 710, y: 660, locked: true },
                Step::Up,
                Step::Escape,
                Step::Cancel,
            ]
        );
    }

    #[test]
    fn unknown_step_is_an_error() {
        assert!(Script::parse(r#"{ "steps": ["jump"] }"#).is_err());
    }
}
