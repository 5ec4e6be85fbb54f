//! IRIDAS/Resolve .cube LUT format support.
//!
//! The .cube format is a simple text-based LUT format produced by DaVinci
//! Resolve, Adobe applications, and most calibration tools. This reader
//! implements the dialect used for display calibration cubes: only the
//! unit domain is accepted, and 1D and 3D files share one entry point with
//! the dimensionality taken from the header.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "Display calibration"
//! LUT_3D_SIZE 17
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! A file is a header followed by a table. The first line holding exactly
//! three tokens whose first token parses as a float ends the header for
//! good; every later line must be a table row. Rows appear in blue-major
//! order (red varies fastest), which is also the in-memory order of
//! [`Lut3D`], so no reordering happens on either side.
//!
//! Comments start with `#` in column one. Reading stops once the declared
//! number of rows has arrived; trailing content is never inspected.
//!
//! # Example
//!
//! ```rust,ignore
//! use qdcm_lut::cube;
//!
//! let lut = cube::read_3d("panel.cube")?;
//! let rgb = lut.apply(Rgb::new(0.5, 0.3, 0.2));
//! ```

use crate::{Lut, Lut1D, Lut3D, LutError, LutResult, Rgb};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Largest 3D edge size the file dialect accepts.
///
/// In-memory tables go up to [`Lut3D::MAX_SIZE`] (257) to hold resampled
/// device grids, but such tables cannot be written back to a .cube file.
pub const MAX_FILE_SIZE_3D: usize = 256;

/// Parses a LUT of either dimension from a reader.
///
/// # Example
///
/// ```rust
/// use qdcm_lut::cube;
///
/// let text = "LUT_1D_SIZE 2\n0.0 0.0 0.0\n1.0 1.0 1.0\n";
/// let lut = cube::parse(text.as_bytes()).unwrap();
/// assert_eq!(lut.dimension(), 1);
/// ```
pub fn parse<R: BufRead>(reader: R) -> LutResult<Lut> {
    CubeParser::new().parse(reader)
}

/// Reads a LUT of either dimension from a .cube file.
pub fn read<P: AsRef<Path>>(path: P) -> LutResult<Lut> {
    let file = File::open(path.as_ref())?;
    parse(BufReader::new(file))
}

/// Reads a 1D LUT from a .cube file.
///
/// Fails with [`LutError::WrongDimension`] if the file declares a 3D
/// table.
pub fn read_1d<P: AsRef<Path>>(path: P) -> LutResult<Lut1D> {
    read(path)?.into_1d()
}

/// Reads a 3D LUT from a .cube file.
///
/// # Example
///
/// ```rust,ignore
/// let lut = cube::read_3d("panel.cube")?;
/// ```
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    read(path)?.into_3d()
}

/// Writes a 1D LUT to a .cube file.
pub fn write_1d<P: AsRef<Path>>(path: P, lut: &Lut1D) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    emit_1d(BufWriter::new(file), lut)
}

/// Writes a 3D LUT to a .cube file.
///
/// Fails with [`LutError::SizeOutOfRange`] before touching the
/// filesystem if the cube is larger than [`MAX_FILE_SIZE_3D`].
///
/// # Example
///
/// ```rust,ignore
/// let lut = Lut3D::identity(33)?;
/// cube::write_3d("identity.cube", &lut)?;
/// ```
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    if lut.size() > MAX_FILE_SIZE_3D {
        return Err(LutError::size_out_of_range(
            lut.size(),
            Lut3D::MIN_SIZE,
            MAX_FILE_SIZE_3D,
        ));
    }
    let file = File::create(path.as_ref())?;
    emit_3d(BufWriter::new(file), lut)
}

/// Writes a LUT of either dimension to a .cube file.
pub fn write<P: AsRef<Path>>(path: P, lut: &Lut) -> LutResult<()> {
    match lut {
        Lut::OneD(lut) => write_1d(path, lut),
        Lut::ThreeD(lut) => write_3d(path, lut),
    }
}

fn emit_1d<W: Write>(mut writer: W, lut: &Lut1D) -> LutResult<()> {
    writeln!(writer, "# Generated by qdcm-lut")?;
    writeln!(writer, "LUT_1D_SIZE {}", lut.size())?;
    writeln!(writer)?;
    for entry in lut.entries() {
        writeln!(writer, "{:.6} {:.6} {:.6}", entry.r, entry.g, entry.b)?;
    }
    Ok(())
}

fn emit_3d<W: Write>(mut writer: W, lut: &Lut3D) -> LutResult<()> {
    writeln!(writer, "# Generated by qdcm-lut")?;
    writeln!(writer, "LUT_3D_SIZE {}", lut.size())?;
    writeln!(writer)?;
    // Flat storage already matches the file's row order.
    for entry in lut.entries() {
        writeln!(writer, "{:.6} {:.6} {:.6}", entry.r, entry.g, entry.b)?;
    }
    Ok(())
}

// Parser internals

/// Reader state. The transition to `Table` happens once and is never
/// reversed.
#[derive(Debug)]
enum Mode {
    Header,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dim {
    One,
    Three,
}

struct CubeParser {
    mode: Mode,
    /// 1-based physical line number, counting blanks and comments.
    line: usize,
    dimension: Option<Dim>,
    size: Option<usize>,
    /// Total rows expected: `size` for 1D, `size^3` for 3D.
    capacity: usize,
    rows: Vec<Rgb>,
}

impl CubeParser {
    fn new() -> Self {
        Self {
            mode: Mode::Header,
            line: 0,
            dimension: None,
            size: None,
            capacity: 0,
            rows: Vec::new(),
        }
    }

    fn parse<R: BufRead>(mut self, reader: R) -> LutResult<Lut> {
        for line in reader.lines() {
            let line = line?;
            self.line += 1;
            // Comments must start in column one.
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            let table_full = match self.mode {
                Mode::Header => self.header_line(&tokens)?,
                Mode::Table => self.table_row(&tokens)?,
            };
            if table_full {
                break;
            }
        }
        self.finish()
    }

    fn header_line(&mut self, tokens: &[&str]) -> LutResult<bool> {
        match tokens[0] {
            "TITLE" => self.title(tokens)?,
            "DOMAIN_MIN" => self.domain(tokens, 0.0)?,
            "DOMAIN_MAX" => self.domain(tokens, 1.0)?,
            "LUT_1D_INPUT_RANGE" => self.input_range(tokens, Dim::One)?,
            "LUT_3D_INPUT_RANGE" => self.input_range(tokens, Dim::Three)?,
            "LUT_1D_SIZE" => self.declare_size(tokens, Dim::One)?,
            "LUT_3D_SIZE" => self.declare_size(tokens, Dim::Three)?,
            _ if tokens.len() == 3 && tokens[0].parse::<f32>().is_ok() => {
                self.mode = Mode::Table;
                return self.table_row(tokens);
            }
            token => return Err(LutError::unrecognized_directive(self.line, token)),
        }
        Ok(false)
    }

    /// The title value must be double-quoted; it is not retained.
    fn title(&self, tokens: &[&str]) -> LutResult<()> {
        if tokens.len() < 2
            || !tokens[1].starts_with('"')
            || !tokens[tokens.len() - 1].ends_with('"')
        {
            return Err(LutError::malformed_directive(self.line, "TITLE"));
        }
        Ok(())
    }

    /// DOMAIN_MIN and DOMAIN_MAX must declare the unit domain exactly.
    /// All three values parse before any is compared, so a line with both
    /// a bad token and a bad value reports the parse failure.
    fn domain(&self, tokens: &[&str], expected: f32) -> LutResult<()> {
        if tokens.len() != 4 {
            return Err(LutError::malformed_directive(self.line, tokens[0]));
        }
        let mut values = [0.0_f32; 3];
        for (slot, token) in values.iter_mut().zip(&tokens[1..]) {
            *slot = token
                .parse()
                .map_err(|_| LutError::malformed_directive(self.line, tokens[0]))?;
        }
        if values.iter().any(|&v| v != expected) {
            return Err(LutError::unsupported_domain(self.line, tokens[0]));
        }
        Ok(())
    }

    /// Input-range directives pin the dimension. The 3D form must declare
    /// the unit range; the 1D form accepts any pair of floats.
    fn input_range(&mut self, tokens: &[&str], dim: Dim) -> LutResult<()> {
        if tokens.len() != 3 {
            return Err(LutError::malformed_directive(self.line, tokens[0]));
        }
        let low: f32 = tokens[1]
            .parse()
            .map_err(|_| LutError::malformed_directive(self.line, tokens[0]))?;
        let high: f32 = tokens[2]
            .parse()
            .map_err(|_| LutError::malformed_directive(self.line, tokens[0]))?;
        if dim == Dim::Three && (low != 0.0 || high != 1.0) {
            return Err(LutError::unsupported_domain(self.line, tokens[0]));
        }
        self.set_dimension(dim)
    }

    fn declare_size(&mut self, tokens: &[&str], dim: Dim) -> LutResult<()> {
        if tokens.len() != 2 {
            return Err(LutError::malformed_directive(self.line, tokens[0]));
        }
        let size: usize = tokens[1]
            .parse()
            .map_err(|_| LutError::malformed_directive(self.line, tokens[0]))?;
        self.set_dimension(dim)?;
        if self.size.is_some() {
            return Err(LutError::duplicate_size(self.line, tokens[0]));
        }
        let (min, max) = match dim {
            Dim::One => (Lut1D::MIN_SIZE, Lut1D::MAX_SIZE),
            Dim::Three => (Lut3D::MIN_SIZE, MAX_FILE_SIZE_3D),
        };
        if size < min || size > max {
            return Err(LutError::UnsupportedSize {
                line: self.line,
                size,
                min,
                max,
            });
        }
        self.capacity = match dim {
            Dim::One => size,
            Dim::Three => size * size * size,
        };
        self.size = Some(size);
        self.rows.reserve(self.capacity);
        Ok(())
    }

    fn set_dimension(&mut self, dim: Dim) -> LutResult<()> {
        match self.dimension {
            Some(existing) if existing != dim => {
                Err(LutError::DimensionMismatch { line: self.line })
            }
            _ => {
                self.dimension = Some(dim);
                Ok(())
            }
        }
    }

    /// Consumes one table row. Returns `true` once the table is full,
    /// which stops reading without inspecting the rest of the stream.
    fn table_row(&mut self, tokens: &[&str]) -> LutResult<bool> {
        if tokens.len() != 3 {
            return Err(LutError::MalformedRow { line: self.line });
        }
        if self.size.is_none() {
            return Err(LutError::RowBeforeSize { line: self.line });
        }
        let mut channels = [0.0_f32; 3];
        for (slot, token) in channels.iter_mut().zip(tokens) {
            *slot = token
                .parse()
                .map_err(|_| LutError::MalformedRow { line: self.line })?;
        }
        self.rows.push(Rgb::new(channels[0], channels[1], channels[2]));
        Ok(self.rows.len() == self.capacity)
    }

    fn finish(self) -> LutResult<Lut> {
        let size = self.size.ok_or(LutError::NoData)?;
        if self.rows.len() != self.capacity {
            return Err(LutError::IncompleteTable {
                expected: self.capacity,
                actual: self.rows.len(),
            });
        }
        match self.dimension {
            Some(Dim::One) => Ok(Lut::OneD(Lut1D::from_entries(self.rows)?)),
            Some(Dim::Three) => Ok(Lut::ThreeD(Lut3D::from_entries(self.rows, size)?)),
            None => Err(LutError::NoData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(text: &str) -> LutResult<Lut> {
        parse(text.as_bytes())
    }

    /// Identity cube text in file row order, full-precision values so the
    /// parse is exact.
    fn identity_cube_text(size: usize) -> String {
        let mut text = format!("LUT_3D_SIZE {size}\n");
        let scale = (size - 1) as f32;
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    text.push_str(&format!(
                        "{} {} {}\n",
                        r as f32 / scale,
                        g as f32 / scale,
                        b as f32 / scale
                    ));
                }
            }
        }
        text
    }

    #[test]
    fn test_parse_minimal_3d() {
        let cube = r#"# Test cube
TITLE "Test Grade"
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
"#;
        let lut = parse_str(cube).expect("parse failed").into_3d().unwrap();
        assert_eq!(lut.size(), 2);
        assert_eq!(lut.get_entry(1, 0, 0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(lut.get_entry(0, 0, 1), Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_parse_identity_grids() {
        for size in 2..=16 {
            let lut = parse_str(&identity_cube_text(size))
                .expect("parse failed")
                .into_3d()
                .unwrap();
            assert_eq!(lut.size(), size);
            let scale = (size - 1) as f32;
            for b in 0..size {
                for g in 0..size {
                    for r in 0..size {
                        let expected = Rgb::new(
                            r as f32 / scale,
                            g as f32 / scale,
                            b as f32 / scale,
                        );
                        assert_eq!(lut.get_entry(r, g, b), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_rows_fill_blue_major() {
        // Rows tagged by file position in the red channel.
        let mut cube = String::from("LUT_3D_SIZE 2\n");
        for i in 0..8 {
            cube.push_str(&format!("0.{i} 0.0 0.0\n"));
        }
        let lut = parse_str(&cube).unwrap().into_3d().unwrap();
        for b in 0..2 {
            for g in 0..2 {
                for r in 0..2 {
                    let i = b * 4 + g * 2 + r;
                    let expected: f32 = format!("0.{i}").parse().unwrap();
                    assert_eq!(lut.get_entry(r, g, b).r, expected);
                }
            }
        }
    }

    #[test]
    fn test_parse_1d() {
        let cube = r#"TITLE "Gamma"
LUT_1D_SIZE 3
0.0 0.5 0.0
0.5 0.75 0.5
1.0 1.0 1.0
"#;
        let lut = parse_str(cube).expect("parse failed");
        assert_eq!(lut.dimension(), 1);
        let lut = lut.into_1d().unwrap();
        assert_eq!(lut.size(), 3);
        // Per-channel addressing: red from index 0, green from index 1.
        assert_eq!(lut.get_entry(0, 1, 2), Rgb::new(0.0, 0.75, 1.0));
    }

    #[test]
    fn test_1d_input_range_values_unchecked() {
        let cube = "LUT_1D_INPUT_RANGE -0.5 2.0\nLUT_1D_SIZE 2\n0 0 0\n1 1 1\n";
        assert!(parse_str(cube).is_ok());
    }

    #[test]
    fn test_3d_input_range_must_be_unit() {
        let cube = "LUT_3D_INPUT_RANGE 0.0 0.9\n";
        let err = parse_str(cube).unwrap_err();
        assert!(matches!(
            err,
            LutError::UnsupportedDomain { line: 1, .. }
        ));
    }

    #[test]
    fn test_input_range_pins_dimension() {
        let cube = "LUT_3D_INPUT_RANGE 0.0 1.0\nLUT_1D_SIZE 2\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::DimensionMismatch { line: 2 })
        ));
        let cube = "LUT_1D_INPUT_RANGE 0.0 1.0\nLUT_3D_SIZE 2\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::DimensionMismatch { line: 2 })
        ));
    }

    #[test]
    fn test_domain_must_be_unit() {
        let err = parse_str("DOMAIN_MIN 0.0 0.0 0.1\n").unwrap_err();
        assert!(matches!(err, LutError::UnsupportedDomain { line: 1, .. }));
        let err = parse_str("DOMAIN_MAX 1.0 0.9 1.0\n").unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn test_domain_arity_checked() {
        let err = parse_str("DOMAIN_MAX 1.0 1.0\n").unwrap_err();
        assert!(matches!(err, LutError::MalformedDirective { line: 1, .. }));
    }

    #[test]
    fn test_domain_unparsable_token_is_malformed() {
        // Parse failures win over value checks on a line carrying both.
        let err = parse_str("DOMAIN_MIN 0.5 zz 0.0\n").unwrap_err();
        assert!(matches!(err, LutError::MalformedDirective { line: 1, .. }));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_title_must_be_quoted() {
        assert!(matches!(
            parse_str("TITLE Untitled\n"),
            Err(LutError::MalformedDirective { line: 1, .. })
        ));
        assert!(matches!(parse_str("TITLE\n"), Err(LutError::MalformedDirective { .. })));
        // Multi-word titles span tokens.
        let cube = "TITLE \"Two words\"\nLUT_1D_SIZE 2\n0 0 0\n1 1 1\n";
        assert!(parse_str(cube).is_ok());
    }

    #[test]
    fn test_duplicate_size_rejected() {
        let cube = "LUT_3D_SIZE 2\nLUT_3D_SIZE 2\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::DuplicateSize { line: 2, .. })
        ));
        let cube = "LUT_1D_SIZE 4\nLUT_1D_SIZE 4\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::DuplicateSize { line: 2, .. })
        ));
    }

    #[test]
    fn test_conflicting_size_dimensions() {
        // Dimension conflict wins over the duplicate check.
        let cube = "LUT_3D_SIZE 2\nLUT_1D_SIZE 2\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::DimensionMismatch { line: 2 })
        ));
        let cube = "LUT_1D_SIZE 2\nLUT_3D_SIZE 2\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::DimensionMismatch { line: 2 })
        ));
    }

    #[test]
    fn test_3d_size_bounds() {
        let err = parse_str("LUT_3D_SIZE 1\n").unwrap_err();
        assert!(matches!(
            err,
            LutError::UnsupportedSize {
                line: 1,
                size: 1,
                min: 2,
                max: 256,
            }
        ));
        assert!(matches!(
            parse_str("LUT_3D_SIZE 257\n"),
            Err(LutError::UnsupportedSize { size: 257, .. })
        ));
        // 256 passes the gate; the failure is the missing rows.
        assert!(matches!(
            parse_str("LUT_3D_SIZE 256\n0 0 0\n"),
            Err(LutError::IncompleteTable {
                expected: 16_777_216,
                actual: 1,
            })
        ));
    }

    #[test]
    fn test_1d_size_bounds() {
        assert!(matches!(
            parse_str("LUT_1D_SIZE 1\n"),
            Err(LutError::UnsupportedSize { size: 1, max: 65536, .. })
        ));
        assert!(matches!(
            parse_str("LUT_1D_SIZE 65537\n"),
            Err(LutError::UnsupportedSize { size: 65537, .. })
        ));
        assert!(matches!(
            parse_str("LUT_1D_SIZE 65536\n"),
            Err(LutError::IncompleteTable { expected: 65536, actual: 0 })
        ));
    }

    #[test]
    fn test_malformed_size_lines() {
        for cube in ["LUT_3D_SIZE abc\n", "LUT_3D_SIZE\n", "LUT_1D_SIZE -3\n", "LUT_3D_SIZE 2 2\n"] {
            let err = parse_str(cube).unwrap_err();
            assert!(err.is_format_error(), "{cube:?} gave {err}");
            assert_eq!(err.line(), Some(1));
        }
    }

    #[test]
    fn test_row_before_size() {
        assert!(matches!(
            parse_str("0.0 0.0 0.0\n"),
            Err(LutError::RowBeforeSize { line: 1 })
        ));
    }

    #[test]
    fn test_unrecognized_directives() {
        let err = parse_str("FOO bar\n").unwrap_err();
        assert!(matches!(
            &err,
            LutError::UnrecognizedDirective { line: 1, token } if token == "FOO"
        ));
        // Numeric lines only start the table when they hold exactly three
        // tokens.
        assert!(matches!(
            parse_str("0.5 0.5\n"),
            Err(LutError::UnrecognizedDirective { .. })
        ));
        assert!(matches!(
            parse_str("0.0 0.0 0.0 0.0\n"),
            Err(LutError::UnrecognizedDirective { .. })
        ));
    }

    #[test]
    fn test_malformed_row_after_transition() {
        let cube = "LUT_3D_SIZE 2\n0.0 0.0 0.0\n0.0 zz 0.0\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::MalformedRow { line: 3 })
        ));
    }

    #[test]
    fn test_header_transition_is_permanent() {
        // A directive after the first row is read as a (bad) table row.
        let cube = "LUT_1D_SIZE 3\n0 0 0\nTITLE \"late\"\n1 1 1\n";
        assert!(matches!(
            parse_str(cube),
            Err(LutError::MalformedRow { line: 3 })
        ));
    }

    #[test]
    fn test_line_numbers_count_blanks_and_comments() {
        let cube = "# one\n\n# three\n\nDOMAIN_MIN 0.5 0.5 0.5\n";
        let err = parse_str(cube).unwrap_err();
        assert_eq!(err.line(), Some(5));
    }

    #[test]
    fn test_reading_stops_at_full_table() {
        let cube = "LUT_3D_SIZE 2\n\
                    0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n\
                    GARBAGE THAT NEVER PARSES\n";
        assert!(parse_str(cube).is_ok());
        let cube = "LUT_1D_SIZE 2\n0 0 0\n1 1 1\nGARBAGE\n";
        assert_eq!(parse_str(cube).unwrap().dimension(), 1);
    }

    #[test]
    fn test_comment_only_in_column_one() {
        let err = parse_str(" # indented\n").unwrap_err();
        assert!(matches!(
            &err,
            LutError::UnrecognizedDirective { token, .. } if token == "#"
        ));
    }

    #[test]
    fn test_crlf_line_endings() {
        let cube = "LUT_1D_SIZE 2\r\n0 0 0\r\n1 1 1\r\n";
        let lut = parse_str(cube).expect("parse failed");
        assert_eq!(lut.size(), 2);
    }

    #[test]
    fn test_no_data() {
        assert!(matches!(parse_str(""), Err(LutError::NoData)));
        assert!(matches!(
            parse_str("TITLE \"Empty\"\n# nothing else\n"),
            Err(LutError::NoData)
        ));
    }

    #[test]
    fn test_incomplete_table() {
        let mut cube = String::from("LUT_3D_SIZE 2\n");
        for _ in 0..7 {
            cube.push_str("0.0 0.0 0.0\n");
        }
        assert!(matches!(
            parse_str(&cube),
            Err(LutError::IncompleteTable {
                expected: 8,
                actual: 7,
            })
        ));
    }

    #[test]
    fn test_emit_1d_format() {
        let lut = Lut1D::identity(2).unwrap();
        let mut out = Vec::new();
        emit_1d(&mut out, &lut).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "# Generated by qdcm-lut\nLUT_1D_SIZE 2\n\n\
             0.000000 0.000000 0.000000\n1.000000 1.000000 1.000000\n"
        );
    }

    #[test]
    fn test_emit_parse_round_trip_3d() {
        // Grid steps of size 5 and 17 are exact in six decimals.
        for size in [5, 17] {
            let lut = Lut3D::identity(size).unwrap();
            let mut out = Vec::new();
            emit_3d(&mut out, &lut).unwrap();
            let parsed = parse(out.as_slice()).unwrap().into_3d().unwrap();
            assert_eq!(parsed, lut);
        }
    }

    #[test]
    fn test_emit_parse_round_trip_1d() {
        let lut = Lut1D::identity(17).unwrap();
        let mut out = Vec::new();
        emit_1d(&mut out, &lut).unwrap();
        let parsed = parse(out.as_slice()).unwrap().into_1d().unwrap();
        assert_eq!(parsed, lut);
    }
}
