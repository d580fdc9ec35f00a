mod derive_walls;
mod floor_extent;
mod layout_analysis;

pub use derive_walls::{DegenerateEdgePolicy, DeriveWalls, WallParams, WallSegment};
pub use floor_extent::{ComputeFloorExtent, FloorExtent};
pub use layout_analysis::{AnalyzeLayout, LayoutSuggestion, LayoutThresholds, SuggestionKind};
