//! # BoxKit Panels
//!
//! Panel outline generation and box layout planning:
//!
//! - **Profile**: walks a panel's four edges emitting castled
//!   (finger-joint) or straight-notch tab geometry.
//! - **Planner**: sorts the box dimensions, picks a sheet grouping from
//!   the bed-fitting decision table (or the single-sheet strip layout),
//!   and places all six panels.
//! - **Render**: turns a plan into DXF sheet files via `boxkit-core`.

pub mod planner;
pub mod profile;
pub mod render;

pub use planner::{
    plan, BoxParameters, LayoutPlan, LayoutStrategy, LidType, Placement, SheetPlan, BED_BOUND,
};
pub use profile::{Panel, TabStyle};
pub use render::render_plan;
