use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::math::polygon_2d::{bounds, signed_area};
use crate::math::TOLERANCE;
use crate::plan::{FloorPlan, UnitNormalizer};

/// Severity of a layout suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Success,
    Warning,
    Info,
}

/// A human-readable remark about one room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub room_id: String,
    pub message: String,
}

impl fmt::Display for LayoutSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Thresholds for [`AnalyzeLayout`], in square meters and a plain ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutThresholds {
    /// Rooms below this area are flagged as small.
    pub small_area: f64,
    /// Rooms above this area are flagged as spacious.
    pub spacious_area: f64,
    /// Bounding rectangles more elongated than this are flagged.
    pub max_aspect_ratio: f64,
}

impl Default for LayoutThresholds {
    fn default() -> Self {
        Self {
            small_area: 10.0,
            spacious_area: 50.0,
            max_aspect_ratio: 3.0,
        }
    }
}

/// Rule-based size and proportion review of every room in a plan.
pub struct AnalyzeLayout<'a> {
    plan: &'a FloorPlan,
    thresholds: LayoutThresholds,
}

impl<'a> AnalyzeLayout<'a> {
    /// Creates a new `AnalyzeLayout` query with default thresholds.
    #[must_use]
    pub fn new(plan: &'a FloorPlan) -> Self {
        Self {
            plan,
            thresholds: LayoutThresholds::default(),
        }
    }

    /// Overrides the thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: LayoutThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Executes the analysis, returning suggestions in room order.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan fails validation.
    pub fn execute(&self) -> Result<Vec<LayoutSuggestion>> {
        self.plan.validate()?;
        let normalizer = UnitNormalizer::new(self.plan.units);
        let t = &self.thresholds;

        let mut suggestions = Vec::with_capacity(self.plan.rooms.len());
        for room in &self.plan.rooms {
            let polygon = normalizer.polygon(&room.polygon);
            let area = signed_area(&polygon).abs();
            let name = &room.name;

            let (kind, message) = if area < t.small_area {
                (
                    SuggestionKind::Warning,
                    format!("{name} is quite small ({area:.1}m²). Consider space-saving furniture."),
                )
            } else if area > t.spacious_area {
                (
                    SuggestionKind::Info,
                    format!("{name} is spacious ({area:.1}m²). Consider creating distinct zones."),
                )
            } else {
                (
                    SuggestionKind::Success,
                    format!("{name} has optimal size ({area:.1}m²) for comfortable living."),
                )
            };
            suggestions.push(LayoutSuggestion {
                kind,
                room_id: room.id.clone(),
                message,
            });

            if let Some((min, max)) = bounds(&polygon) {
                let width = max.x - min.x;
                let depth = max.y - min.y;
                let short = width.min(depth);
                if short > TOLERANCE && width.max(depth) / short > t.max_aspect_ratio {
                    suggestions.push(LayoutSuggestion {
                        kind: SuggestionKind::Warning,
                        room_id: room.id.clone(),
                        message: format!(
                            "{name} has an unusual aspect ratio. Consider furniture placement along the longer wall."
                        ),
                    });
                }
            }
        }

        Ok(suggestions)
    }
}
