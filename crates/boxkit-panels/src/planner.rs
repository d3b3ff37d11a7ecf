//! Layout planning for the six panels of a box.
//!
//! The planner sorts the inner box dimensions descending once and works
//! positionally from there (`a >= b >= c`; the box footprint is `b x c`
//! and its height is `a`). Two strategies are available:
//!
//! - **Packed**: the bed-fitting decision table. Depending on how the
//!   sorted dimensions compare against the bed bounds, the panels land on
//!   one, two, or three sheets. Where a sheet holds only one panel of a
//!   pair it is cut twice on the bench; duplicate sheets are emitted as
//!   duplicate files.
//! - **Strip**: everything on one sheet in a reading-order strip, with a
//!   configurable gap between panels and optional lid handling.
//!
//! Planning is pure: it produces a [`LayoutPlan`] that the renderer turns
//! into DXF files, so the packing policy is auditable in isolation from
//! geometry emission.

use boxkit_core::{LayoutError, LayoutResult, ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

use crate::profile::{Panel, TabStyle};

/// Primary bed bound: the largest extent the cutter can handle.
pub const BED_BOUND: f64 = 18.0;

/// Depth threshold below which two stacked panels share a sheet.
const BED_BOUND_SHALLOW: f64 = 9.0;

/// Combined-extent threshold for keeping a side panel inline on a
/// duplicate sheet.
const BED_BOUND_LONG: f64 = 32.0;

/// Combined-extent threshold for appending a face to a wide footprint
/// sheet.
const BED_BOUND_WIDE: f64 = 36.0;

/// Which layout strategy plans the sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    /// Bed-fitting decision table, 1-3 sheets.
    Packed,
    /// Single-sheet strip with spacing and lid options.
    Strip,
}

/// Lid handling for the strip layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LidType {
    /// No lid: both panels of every pair carry the tab profile.
    None,
    /// Untabbed lid sized to drop inside the opening.
    Inside,
    /// Untabbed lid grown by twice the thickness to cap over the walls.
    Outside,
}

/// Input parameters for a box layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxParameters {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub thickness: f64,
    pub style: TabStyle,
    pub strategy: LayoutStrategy,
    /// Gap between adjacent panels in the strip layout. `None` means twice
    /// the thickness.
    pub spacing: Option<f64>,
    pub lid: LidType,
    /// Which panel pair carries the lid (1 = face, 2 = long wall,
    /// 3 = short wall). Strip layout only.
    pub lid_side: u8,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            width: 100.0,
            depth: 100.0,
            height: 100.0,
            thickness: 3.0,
            style: TabStyle::Castled,
            strategy: LayoutStrategy::Packed,
            spacing: None,
            lid: LidType::None,
            lid_side: 1,
        }
    }
}

impl BoxParameters {
    /// Reject dimensions and options the planner cannot work with. Tab
    /// geometry itself is not validated; the source of truth for that is
    /// the material on the bench.
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if let Some(spacing) = self.spacing {
            if !spacing.is_finite() || spacing <= 0.0 {
                return Err(ParameterError::InvalidValue {
                    name: "spacing".to_string(),
                    reason: format!("must be a positive number, got {spacing}"),
                });
            }
        }
        if !(1..=3).contains(&self.lid_side) {
            return Err(ParameterError::InvalidValue {
                name: "lid_side".to_string(),
                reason: format!("must be between 1 and 3, got {}", self.lid_side),
            });
        }
        Ok(())
    }
}

/// A panel placement on a sheet. Lid panels are emitted as plain
/// rectangles instead of the box tab style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub panel: Panel,
    pub plain: bool,
}

impl Placement {
    fn tabbed(panel: Panel) -> Self {
        Self {
            panel,
            plain: false,
        }
    }
}

/// One planned output sheet: its file name and the panels placed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPlan {
    pub file_name: String,
    pub panels: Vec<Placement>,
}

/// The full planning result handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub style: TabStyle,
    pub sheets: Vec<SheetPlan>,
}

/// Outcome of the packed decision table. Each case is one enumerated
/// sheet grouping; the table is ordered, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PackedCase {
    /// Everything fits: four walls in a row, both faces above them.
    OneSheetFull,
    /// Walls in a row, faces moved to a second sheet.
    FacesSplit,
    /// Wall row too wide for a second pair; one face appended, sheet cut
    /// twice.
    WideFootprint,
    /// Wall row too wide and the face does not fit inline either.
    WideFootprintSplit,
    /// Tall box: two duplicate sheets, each wall pair plus an inline face.
    DuplicateInline,
    /// Tall box: duplicate wall sheets plus a third sheet of faces.
    DuplicateWithFaces,
    /// Tall and deep box: one panel per sheet, three sheets cut twice.
    SplitSingles,
    /// Tall, shallow box: stacked walls on the second sheet, faces on a
    /// third.
    SplitStackedWithFaces,
    /// Tall, shallow box: stacked walls on the second sheet only.
    SplitStacked,
    /// More than two dimensions exceed the primary bound.
    Overflow,
}

/// The packed strategy's ordered rule list, pure in the sorted dimensions
/// and thickness.
fn classify_packed(a: f64, b: f64, c: f64, t: f64) -> PackedCase {
    if a + 2.0 * t <= BED_BOUND {
        if b + c + 2.0 * t < BED_BOUND {
            if a + c + 3.0 * t < BED_BOUND {
                PackedCase::OneSheetFull
            } else {
                PackedCase::FacesSplit
            }
        } else if b + 2.0 * c + 4.0 * t < BED_BOUND_WIDE {
            PackedCase::WideFootprint
        } else {
            PackedCase::WideFootprintSplit
        }
    } else if b + 3.0 * t + c <= BED_BOUND {
        if a + 3.0 * t + c > BED_BOUND_LONG {
            PackedCase::DuplicateWithFaces
        } else {
            PackedCase::DuplicateInline
        }
    } else if b + 2.0 * t <= BED_BOUND {
        if c + 2.0 * t > BED_BOUND_SHALLOW {
            PackedCase::SplitSingles
        } else if a + 3.0 * t + b > BED_BOUND_LONG {
            PackedCase::SplitStackedWithFaces
        } else {
            PackedCase::SplitStacked
        }
    } else {
        PackedCase::Overflow
    }
}

/// Plan the six panels of a box.
pub fn plan(params: &BoxParameters) -> LayoutResult<LayoutPlan> {
    params.validate()?;

    let mut dims = [params.width, params.depth, params.height];
    dims.sort_by(f64::total_cmp);
    dims.reverse();
    let [a, b, c] = dims;
    let t = params.thickness;

    let sheets = match params.strategy {
        LayoutStrategy::Packed => plan_packed(a, b, c, t)?,
        LayoutStrategy::Strip => vec![plan_strip(a, b, c, t, params)],
    };

    let sheets = name_sheets(sheets);
    tracing::info!(
        strategy = ?params.strategy,
        sheets = sheets.len(),
        panels = sheets.iter().map(|s| s.panels.len()).sum::<usize>(),
        "layout planned"
    );

    Ok(LayoutPlan {
        style: params.style,
        sheets,
    })
}

/// Single-sheet plans are written as `box.dxf`; multi-sheet plans as
/// `box1.dxf`, `box2.dxf`, ...
fn name_sheets(panels: Vec<Vec<Placement>>) -> Vec<SheetPlan> {
    let single = panels.len() == 1;
    panels
        .into_iter()
        .enumerate()
        .map(|(i, panels)| SheetPlan {
            file_name: if single {
                "box.dxf".to_string()
            } else {
                format!("box{}.dxf", i + 1)
            },
            panels,
        })
        .collect()
}

fn plan_packed(a: f64, b: f64, c: f64, t: f64) -> LayoutResult<Vec<Vec<Placement>>> {
    let case = classify_packed(a, b, c, t);
    tracing::debug!(?case, a, b, c, t, "packed layout case");

    // Placement arithmetic per case. Walls are `b x a` / `c x a`, faces
    // are `b x c`; phase flags are chosen so mating edges interlock.
    let wall_row = |x0: f64| {
        vec![
            Placement::tabbed(Panel::new(x0 + t, t, x0 + b + t, a + t, t, 1, 1)),
            Placement::tabbed(Panel::new(
                x0 + b + 2.0 * t,
                t,
                x0 + b + c + 2.0 * t,
                a + t,
                t,
                0,
                1,
            )),
        ]
    };
    let face_pair_sheet = || {
        vec![
            Placement::tabbed(Panel::new(t, t, b + t, c + t, t, 0, 0)),
            Placement::tabbed(Panel::new(b + 2.0 * t, t, 2.0 * (b + t), c + t, t, 0, 0)),
        ]
    };
    let face_column_sheet = || {
        vec![
            Placement::tabbed(Panel::new(t, t, b + t, c + t, t, 0, 0)),
            Placement::tabbed(Panel::new(t, c + 3.0 * t, b + t, 2.0 * c + 3.0 * t, t, 0, 0)),
        ]
    };
    let tall_wall_sheet = || {
        vec![
            Placement::tabbed(Panel::new(t, t, a + t, b + t, t, 1, 1)),
            Placement::tabbed(Panel::new(t, b + 2.0 * t, a + t, b + c + 2.0 * t, t, 1, 0)),
        ]
    };

    let sheets = match case {
        PackedCase::OneSheetFull => {
            let mut sheet = wall_row(0.0);
            sheet.extend(wall_row(b + c + 2.0 * t));
            sheet.push(Placement::tabbed(Panel::new(
                t,
                a + 2.0 * t,
                b + t,
                a + c + 2.0 * t,
                t,
                0,
                0,
            )));
            sheet.push(Placement::tabbed(Panel::new(
                b + c + 3.0 * t,
                a + 2.0 * t,
                2.0 * b + c + 3.0 * t,
                a + c + 2.0 * t,
                t,
                0,
                0,
            )));
            vec![sheet]
        }
        PackedCase::FacesSplit => {
            let mut sheet = wall_row(0.0);
            sheet.extend(wall_row(b + c + 2.0 * t));
            vec![sheet, face_pair_sheet()]
        }
        PackedCase::WideFootprint => {
            let mut sheet = wall_row(0.0);
            sheet.push(Placement::tabbed(Panel::new(
                b + c + 4.0 * t,
                t,
                b + 2.0 * c + 4.0 * t,
                b + t,
                t,
                0,
                0,
            )));
            vec![sheet]
        }
        PackedCase::WideFootprintSplit => vec![wall_row(0.0), face_pair_sheet()],
        PackedCase::DuplicateInline => {
            let mut sheet = tall_wall_sheet();
            sheet.push(Placement::tabbed(Panel::new(
                a + 2.0 * t,
                t,
                a + c + 2.0 * t,
                b + t,
                t,
                0,
                0,
            )));
            vec![sheet.clone(), sheet]
        }
        PackedCase::DuplicateWithFaces => {
            let sheet = tall_wall_sheet();
            vec![sheet.clone(), sheet, face_column_sheet()]
        }
        PackedCase::SplitSingles => vec![
            vec![Placement::tabbed(Panel::new(t, t, a + t, b + t, t, 1, 1))],
            vec![Placement::tabbed(Panel::new(t, t, a + t, c + t, t, 1, 0))],
            vec![Placement::tabbed(Panel::new(t, t, b + t, c + t, t, 0, 0))],
        ],
        PackedCase::SplitStackedWithFaces => vec![
            vec![Placement::tabbed(Panel::new(t, t, a + t, b + t, t, 1, 1))],
            stacked_wall_sheet(a, c, t),
            face_column_sheet(),
        ],
        PackedCase::SplitStacked => vec![
            vec![Placement::tabbed(Panel::new(t, t, a + t, b + t, t, 1, 1))],
            stacked_wall_sheet(a, c, t),
        ],
        PackedCase::Overflow => {
            return Err(LayoutError::BedOverflow {
                large: a,
                middle: b,
                thickness: t,
                bound: BED_BOUND,
            })
        }
    };
    Ok(sheets)
}

/// Two `a x c` walls stacked on one sheet.
fn stacked_wall_sheet(a: f64, c: f64, t: f64) -> Vec<Placement> {
    vec![
        Placement::tabbed(Panel::new(t, t, a + t, c + t, t, 1, 0)),
        Placement::tabbed(Panel::new(t, c + 3.0 * t, a + t, 2.0 * c + 2.0 * t, t, 1, 0)),
    ]
}

/// Strip layout: both faces in a top row, the four walls in a second row,
/// positions accumulated left to right with `spacing` between panels.
///
/// The lid panel is a plain rectangle, kept at the inner dimensions
/// (inside lid) or grown by twice the thickness in both axes (outside
/// lid). Growth is folded into the cursor advance so the spacing gap to
/// the following panels — and the clearance for their tab protrusions —
/// survives. The pair's mate keeps its tabs.
fn plan_strip(a: f64, b: f64, c: f64, t: f64, params: &BoxParameters) -> Vec<Placement> {
    let spacing = params.spacing.unwrap_or(2.0 * t);
    let lid = lid_target(params, t);
    let lid_grow = |index: usize| match lid {
        Some((lid_index, grow)) if lid_index == index => grow,
        _ => 0.0,
    };
    let is_lid = |index: usize| matches!(lid, Some((lid_index, _)) if lid_index == index);

    let mut placements = Vec::with_capacity(6);

    // Face row.
    let mut x = t;
    for index in 0..2 {
        let grow = lid_grow(index);
        placements.push(Placement {
            panel: Panel::new(x, t, x + b + grow, c + t + grow, t, 0, 0),
            plain: is_lid(index),
        });
        x += b + grow + spacing;
    }

    // Wall row, below the faces (and below a grown face lid).
    let y0 = c + t + lid_grow(0) + spacing;
    let mut x = t;
    for (index, (width, lr)) in [(b, 1u8), (c, 0), (b, 1), (c, 0)].into_iter().enumerate() {
        let grow = lid_grow(index + 2);
        placements.push(Placement {
            panel: Panel::new(x, y0, x + width + grow, y0 + a + grow, t, lr, 1),
            plain: is_lid(index + 2),
        });
        x += width + grow + spacing;
    }

    placements
}

/// The placement index the lid applies to and its growth, or `None` when
/// the box has no lid. Strip order: faces at 0/1, long walls at 2/4,
/// short walls at 3/5.
fn lid_target(params: &BoxParameters, t: f64) -> Option<(usize, f64)> {
    let grow = match params.lid {
        LidType::None => return None,
        LidType::Inside => 0.0,
        LidType::Outside => 2.0 * t,
    };
    let index = match params.lid_side {
        2 => 2,
        3 => 3,
        _ => 0,
    };
    Some((index, grow))
}
