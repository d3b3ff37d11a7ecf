//! DXF sheet writing.
//!
//! A sheet is one output drawing: a fixed header template, a run of
//! POLYLINE records (one per panel outline), and an `ENDSEC`/`EOF` footer.
//! The header is not generated; it is read from a template resource shipped
//! with the tool, and its absence is a fatal startup condition.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Point;

/// Fixed relative path of the DXF header template.
pub const TEMPLATE_PATH: &str = "template.dxf";

/// Record opening a closed polyline on layer 0.
const POLYLINE_HEADER: &str =
    "POLYLINE\n  8\n0\n  66\n1\n  10\n0.0\n  20\n0.0\n  30\n0\n  70\n1\n  0\n";

/// Record terminating a polyline's vertex run.
const SEQEND: &str = "SEQEND\n  0\n";

/// Footer closing the ENTITIES section and the file.
const FOOTER: &str = "ENDSEC\n  0\nEOF";

/// The DXF preamble every sheet starts with.
#[derive(Debug, Clone)]
pub struct DxfTemplate {
    header: String,
}

impl DxfTemplate {
    /// Read the template from disk. Missing or unreadable templates are
    /// reported as [`LayoutError::Template`].
    pub fn load(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let header = fs::read_to_string(path).map_err(|source| LayoutError::Template {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = header.len(), "DXF template loaded");
        Ok(Self { header })
    }

    /// Build a template from an in-memory header. Used by tests and callers
    /// that embed the preamble.
    pub fn from_header(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    /// The raw preamble text.
    pub fn header(&self) -> &str {
        &self.header
    }
}

/// An open output sheet.
///
/// Writes the template header at construction, appends polyline records,
/// and writes the footer exactly once when consumed by [`finish`].
///
/// [`finish`]: SheetWriter::finish
pub struct SheetWriter<W: Write> {
    out: W,
}

impl<W: Write> SheetWriter<W> {
    /// Open a sheet over `out`, writing the template header.
    pub fn new(mut out: W, template: &DxfTemplate) -> io::Result<Self> {
        out.write_all(template.header().as_bytes())?;
        Ok(Self { out })
    }

    /// Append one closed polyline record: header, one VERTEX entry per
    /// point, and the SEQEND terminator.
    pub fn polyline(&mut self, points: &[Point]) -> io::Result<()> {
        self.out.write_all(POLYLINE_HEADER.as_bytes())?;
        for p in points {
            write!(self.out, "VERTEX\n  8\n0\n  10\n{}\n  20\n{}\n  0\n", p.x, p.y)?;
        }
        self.out.write_all(SEQEND.as_bytes())
    }

    /// Finalize the sheet: write the footer, flush, and hand back the
    /// underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(FOOTER.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const HEADER: &str = "  0\nSECTION\n  2\nENTITIES\n  0\n";

    fn sheet_text(build: impl FnOnce(&mut SheetWriter<Vec<u8>>)) -> String {
        let template = DxfTemplate::from_header(HEADER);
        let mut sheet = SheetWriter::new(Vec::new(), &template).unwrap();
        build(&mut sheet);
        let out = sheet.finish().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_sheet_is_header_plus_footer() {
        let text = sheet_text(|_| {});
        assert_eq!(text, format!("{}{}", HEADER, "ENDSEC\n  0\nEOF"));
    }

    #[test]
    fn test_polyline_record_format() {
        let text = sheet_text(|sheet| {
            sheet
                .polyline(&[Point::new(0.25, 0.25), Point::new(4.25, 0.25)])
                .unwrap();
        });

        assert!(text.starts_with(HEADER));
        assert!(text.ends_with("ENDSEC\n  0\nEOF"));
        assert!(text.contains(
            "POLYLINE\n  8\n0\n  66\n1\n  10\n0.0\n  20\n0.0\n  30\n0\n  70\n1\n  0\n"
        ));
        assert!(text.contains("VERTEX\n  8\n0\n  10\n0.25\n  20\n0.25\n  0\n"));
        assert!(text.contains("VERTEX\n  8\n0\n  10\n4.25\n  20\n0.25\n  0\n"));
        assert!(text.contains("SEQEND\n  0\n"));
    }

    #[test]
    fn test_template_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.dxf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        drop(file);

        let template = DxfTemplate::load(&path).unwrap();
        assert_eq!(template.header(), HEADER);
    }

    #[test]
    fn test_template_missing_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = DxfTemplate::load(dir.path().join("nope.dxf")).unwrap_err();
        assert!(matches!(err, LayoutError::Template { .. }));
    }
}
