//! Rendering a layout plan to DXF sheet files.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use boxkit_core::geometry::bounding_box;
use boxkit_core::{DxfTemplate, LayoutResult, SheetWriter};

use crate::planner::LayoutPlan;

/// Write one DXF file per planned sheet into `out_dir`, returning the
/// paths written. Each sheet is finalized (footer written, stream flushed)
/// before the next one is opened; a rendering failure leaves earlier
/// sheets complete on disk.
pub fn render_plan(
    plan: &LayoutPlan,
    template: &DxfTemplate,
    out_dir: &Path,
) -> LayoutResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(plan.sheets.len());

    for sheet in &plan.sheets {
        let path = out_dir.join(&sheet.file_name);
        let file = File::create(&path)?;
        let mut writer = SheetWriter::new(BufWriter::new(file), template)?;

        let mut extent = Vec::new();
        for placement in &sheet.panels {
            let outline = if placement.plain {
                placement.panel.plain_outline()
            } else {
                placement.panel.outline(plan.style)
            };
            if let Some((min, max)) = bounding_box(&outline) {
                extent.push(min);
                extent.push(max);
            }
            writer.polyline(&outline)?;
        }

        writer.finish()?;
        if let Some((min, max)) = bounding_box(&extent) {
            tracing::debug!(
                file = %path.display(),
                panels = sheet.panels.len(),
                width = max.x - min.x,
                height = max.y - min.y,
                "sheet written"
            );
        }
        written.push(path);
    }

    Ok(written)
}
