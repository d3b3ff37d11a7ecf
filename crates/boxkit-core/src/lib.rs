//! # BoxKit Core
//!
//! Core types for BoxKit: error types, the 2D point primitive, and the
//! DXF sheet writer that the panel layout planner renders into.

pub mod dxf;
pub mod error;
pub mod geometry;

pub use dxf::{DxfTemplate, SheetWriter, TEMPLATE_PATH};
pub use error::{LayoutError, LayoutResult, ParameterError, ParameterResult};
pub use geometry::Point;
