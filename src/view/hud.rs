//! Roster overlay layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::model::ScoreRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// How a single line of text is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub fill: String,
    pub align: TextAlign,
    /// Screen-space when true, world-space otherwise.
    pub fixed_to_camera: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudStyle {
    pub font: String,
    pub align: TextAlign,
    pub margin_x: f32,
    pub line_height: f32,
}

impl Default for HudStyle {
    fn default() -> Self {
        Self {
            font: "24px Arial".to_string(),
            align: TextAlign::Left,
            margin_x: 10.0,
            line_height: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub at: Vec2,
    pub text: String,
    pub style: TextStyle,
}

/// One camera-fixed line per roster entry, top to bottom in roster order,
/// each drawn in the entry's own color.
pub fn roster_lines(registry: &ScoreRegistry, hud: &HudStyle) -> Vec<HudLine> {
    registry
        .iter()
        .enumerate()
        .map(|(i, entry)| HudLine {
            at: Vec2::new(hud.margin_x, i as f32 * hud.line_height),
            text: entry.name.clone(),
            style: TextStyle {
                font: hud.font.clone(),
                fill: entry.color.clone(),
                align: hud.align,
                fixed_to_camera: true,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_stack_downward_in_roster_order() {
        let mut reg = ScoreRegistry::new();
        reg.add_user("test", "#123").unwrap();
        reg.add_user("test2", "#321").unwrap();
        let lines = roster_lines(&reg, &HudStyle::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].at, Vec2::new(10.0, 0.0));
        assert_eq!(lines[1].at, Vec2::new(10.0, 30.0));
        assert_eq!(lines[1].text, "test2");
        assert_eq!(lines[1].style.fill, "#321");
        assert!(lines.iter().all(|l| l.style.fixed_to_camera && l.style.font == "24px Arial"));
    }
}
