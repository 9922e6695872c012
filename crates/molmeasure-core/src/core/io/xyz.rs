use crate::core::io::traits::MolecularFile;
use crate::core::models::molecule::{Molecule, MoleculeError};
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const MAX_PREALLOCATED_ATOMS: usize = 1 << 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XyzMetadata {
    pub comment: String,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Expected {expected} atoms but found {found}")]
    CountMismatch { expected: usize, found: usize },
    #[error("Missing required record: {0}")]
    MissingRecord(&'static str),
    #[error(transparent)]
    Molecule(#[from] MoleculeError),
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidCount { value: String },
    #[error("Invalid {axis} coordinate (value: '{value}')")]
    InvalidFloat { axis: char, value: String },
    #[error("Atom line needs a symbol and three coordinates")]
    MissingField,
}

/// The plain XYZ coordinate format.
///
/// ```text
/// 3
/// water
/// O    0.000000   0.000000   0.117300
/// H    0.000000   0.757200  -0.469200
/// H    0.000000  -0.757200  -0.469200
/// ```
///
/// Only the first frame of a multi-frame file is read. Columns after `z` are ignored.
pub struct XyzFile;

impl MolecularFile for XyzFile {
    type Metadata = XyzMetadata;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Molecule, Self::Metadata), Self::Error> {
        let mut lines = reader.lines().enumerate().map(|(n, l)| (n + 1, l));

        let (line_num, count_line) = lines.next().ok_or(XyzError::MissingRecord("atom count"))?;
        let count_line = count_line?;
        let expected: usize = count_line.trim().parse().map_err(|_| XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::InvalidCount {
                value: count_line.trim().into(),
            },
        })?;

        let comment = match lines.next() {
            Some((_, line)) => line?.trim_end().to_string(),
            None => String::new(),
        };

        // The header count is untrusted input; cap the up-front reservation.
        let capacity = expected.min(MAX_PREALLOCATED_ATOMS);
        let mut symbols = Vec::with_capacity(capacity);
        let mut coordinates = Vec::with_capacity(capacity);

        while coordinates.len() < expected {
            let Some((line_num, line)) = lines.next() else {
                return Err(XyzError::CountMismatch {
                    expected,
                    found: coordinates.len(),
                });
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let (symbol, position) = parse_atom_line(&line, line_num)?;
            symbols.push(symbol);
            coordinates.push(position);
        }

        let molecule = Molecule::new(symbols, coordinates)?;
        Ok((molecule, XyzMetadata { comment }))
    }

    fn write_to(
        molecule: &Molecule,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "{}", molecule.len())?;
        writeln!(writer, "{}", metadata.comment)?;
        for (symbol, p) in molecule.atoms() {
            writeln!(writer, "{:<3}{:>15.6}{:>15.6}{:>15.6}", symbol, p.x, p.y, p.z)?;
        }
        Ok(())
    }
}

fn parse_atom_line(line: &str, line_num: usize) -> Result<(String, Point3<f64>), XyzError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::MissingField,
        });
    }

    let parse_axis = |value: &str, axis: char| -> Result<f64, XyzError> {
        value.parse().map_err(|_| XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::InvalidFloat {
                axis,
                value: value.into(),
            },
        })
    };

    let x = parse_axis(fields[1], 'x')?;
    let y = parse_axis(fields[2], 'y')?;
    let z = parse_axis(fields[3], 'z')?;

    Ok((fields[0].to_string(), Point3::new(x, y, z)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    const WATER_XYZ: &str = "\
3
water molecule
O          0.000000       0.000000       0.117300
H          0.000000       0.757200      -0.469200
H          0.000000      -0.757200      -0.469200
";

    fn read_str(content: &str) -> Result<(Molecule, XyzMetadata), XyzError> {
        XyzFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn reads_water() {
        let (mol, meta) = read_str(WATER_XYZ).unwrap();
        assert_eq!(meta.comment, "water molecule");
        assert_eq!(mol.len(), 3);
        assert_eq!(mol.symbols(), &["O", "H", "H"]);
        assert_eq!(mol.coordinates()[1], Point3::new(0.0, 0.7572, -0.4692));
    }

    #[test]
    fn write_then_read_preserves_atoms() {
        let (mol, meta) = read_str(WATER_XYZ).unwrap();
        let mut buffer = Vec::new();
        XyzFile::write_to(&mol, &meta, &mut buffer).unwrap();

        let written = String::from_utf8(buffer.clone()).unwrap();
        assert!(written.starts_with("3\nwater molecule\nO  "));

        let (reread, reread_meta) = XyzFile::read_from(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(reread, mol);
        assert_eq!(reread_meta, meta);
    }

    #[test]
    fn extra_columns_and_trailing_frames_are_ignored() {
        let content = "\
2
two frames
C 0.0 0.0 0.0 0.12
C 1.5 0.0 0.0 -0.12

2
second frame
C 9.0 9.0 9.0
C 9.0 9.0 9.0
";
        let (mol, _) = read_str(content).unwrap();
        assert_eq!(mol.len(), 2);
        assert_eq!(mol.coordinates()[1], Point3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn invalid_count_reports_first_line() {
        let err = read_str("three\ncomment\n").unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidCount { .. }
            }
        ));
    }

    #[test]
    fn invalid_coordinate_reports_line_and_axis() {
        let err = read_str("1\n\nC 0.0 abc 0.0\n").unwrap_err();
        match err {
            XyzError::Parse {
                line,
                kind: XyzParseErrorKind::InvalidFloat { axis, value },
            } => {
                assert_eq!(line, 3);
                assert_eq!(axis, 'y');
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_atom_line_is_missing_field() {
        let err = read_str("1\n\nC 0.0 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 3,
                kind: XyzParseErrorKind::MissingField
            }
        ));
    }

    #[test]
    fn truncated_file_is_count_mismatch() {
        let err = read_str("3\ncomment\nO 0 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            XyzError::CountMismatch {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn oversized_atom_count_is_count_mismatch() {
        let err = read_str("100000000000000\ncomment\nC 0 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            XyzError::CountMismatch {
                expected: 100_000_000_000_000,
                found: 1
            }
        ));
    }

    #[test]
    fn empty_input_is_missing_record() {
        assert!(matches!(
            read_str("").unwrap_err(),
            XyzError::MissingRecord(_)
        ));
    }

    #[test]
    fn path_helpers_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("water.xyz");

        let (mol, meta) = read_str(WATER_XYZ).unwrap();
        XyzFile::write_to_path(&mol, &meta, &path).unwrap();
        let (reread, _) = XyzFile::read_from_path(&path).unwrap();
        assert_eq!(reread, mol);
    }
}
