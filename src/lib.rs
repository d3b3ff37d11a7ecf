//! # BoxKit
//!
//! Laser-cut box generator: plans the six panels of a rectangular box on
//! one or more cutting-bed sheets and writes each sheet as a DXF file,
//! with finger-joint ("castled") or straight-notch edge geometry.
//!
//! ## Architecture
//!
//! BoxKit is organized as a workspace:
//!
//! 1. **boxkit-core** - error types, geometry primitives, DXF sheet writer
//! 2. **boxkit-panels** - edge profiles, layout planner, plan renderer
//! 3. **boxkit** - the command-line binary

pub use boxkit_core::{DxfTemplate, LayoutError, LayoutResult, Point, SheetWriter, TEMPLATE_PATH};
pub use boxkit_panels::{
    plan, render_plan, BoxParameters, LayoutPlan, LayoutStrategy, LidType, Panel, SheetPlan,
    TabStyle, BED_BOUND,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
