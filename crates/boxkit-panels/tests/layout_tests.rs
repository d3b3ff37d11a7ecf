//! End-to-end tests: plan a box and render it to DXF files on disk.

use std::fs;

use boxkit_core::DxfTemplate;
use boxkit_panels::{plan, render_plan, BoxParameters, LayoutStrategy, TabStyle};

const HEADER: &str = "  0\nSECTION\n  2\nENTITIES\n  0\n";

fn small_box(style: TabStyle) -> BoxParameters {
    BoxParameters {
        width: 4.0,
        depth: 4.0,
        height: 4.0,
        thickness: 0.25,
        style,
        ..BoxParameters::default()
    }
}

#[test]
fn single_sheet_box_renders_six_polylines() {
    let dir = tempfile::tempdir().unwrap();
    let template = DxfTemplate::from_header(HEADER);

    let layout = plan(&small_box(TabStyle::Castled)).unwrap();
    let files = render_plan(&layout, &template, dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap(), "box.dxf");

    let text = fs::read_to_string(&files[0]).unwrap();
    assert!(text.starts_with(HEADER));
    assert!(text.ends_with("ENDSEC\n  0\nEOF"));
    assert_eq!(text.matches("POLYLINE\n").count(), 6);
    assert_eq!(text.matches("SEQEND\n").count(), 6);
}

#[test]
fn rendering_is_idempotent() {
    let template = DxfTemplate::from_header(HEADER);
    let layout = plan(&small_box(TabStyle::Straight)).unwrap();

    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let a = render_plan(&layout, &template, dir_a.path()).unwrap();
    let b = render_plan(&layout, &template, dir_b.path()).unwrap();

    assert_eq!(fs::read(&a[0]).unwrap(), fs::read(&b[0]).unwrap());
}

#[test]
fn duplicate_sheets_render_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let template = DxfTemplate::from_header(HEADER);

    let mut params = small_box(TabStyle::Castled);
    params.width = 20.0;
    params.depth = 10.0;
    params.height = 4.0;
    let layout = plan(&params).unwrap();
    let files = render_plan(&layout, &template, dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].file_name().unwrap(), "box1.dxf");
    assert_eq!(files[1].file_name().unwrap(), "box2.dxf");
    assert_eq!(fs::read(&files[0]).unwrap(), fs::read(&files[1]).unwrap());
}

#[test]
fn strip_layout_lid_renders_plain_rectangle() {
    let dir = tempfile::tempdir().unwrap();
    let template = DxfTemplate::from_header(HEADER);

    let mut params = small_box(TabStyle::Castled);
    params.strategy = LayoutStrategy::Strip;
    params.lid = boxkit_panels::LidType::Inside;
    let layout = plan(&params).unwrap();
    let files = render_plan(&layout, &template, dir.path()).unwrap();

    let text = fs::read_to_string(&files[0]).unwrap();
    assert_eq!(text.matches("POLYLINE\n").count(), 6);

    // Five castled outlines at 77 vertices each, one plain lid at 5.
    assert_eq!(text.matches("VERTEX\n").count(), 5 * 77 + 5);
}
