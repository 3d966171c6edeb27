use crate::core::io::traits::MolecularFile;
use crate::core::models::builder::MolecularSystemBuilder;
use crate::core::models::residue::NO_INSERTION_CODE;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

/// Records describing the entry, kept verbatim.
const HEADER_RECORDS: [&str; 3] = ["HEADER", "TITLE", "COMPND"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdbMetadata {
    pub header_lines: Vec<String>,
    /// Atoms dropped because they carried an alternate location other than `A`.
    pub skipped_alternate_locations: usize,
    /// True when the file had more models than the one that was read.
    pub has_additional_models: bool,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No ATOM or HETATM records found")]
    EmptyStructure,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: &'static str },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

const MIN_ATOM_RECORD_LENGTH: usize = 54;

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// The record name in columns 1-6, tolerating lines shorter than six columns.
fn record_name(line: &str) -> &str {
    line.get(..6).unwrap_or(line).trim()
}

fn column_char(line: &str, index: usize) -> char {
    line.get(index..index + 1)
        .and_then(|s| s.chars().next())
        .unwrap_or(' ')
}

fn parse_field<T: std::str::FromStr>(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
    line_num: usize,
    invalid: fn(&'static str, String) -> PdbParseErrorKind,
) -> Result<T, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: invalid(columns, value.to_string()),
    })
}

fn invalid_int(columns: &'static str, value: String) -> PdbParseErrorKind {
    PdbParseErrorKind::InvalidInt { columns, value }
}

fn invalid_float(columns: &'static str, value: String) -> PdbParseErrorKind {
    PdbParseErrorKind::InvalidFloat { columns, value }
}

/// One parsed ATOM/HETATM record.
struct AtomRecord<'l> {
    serial: usize,
    raw_name: &'l str,
    residue_name: &'l str,
    chain_id: char,
    residue_number: isize,
    insertion_code: char,
    position: Point3<f64>,
}

impl<'l> AtomRecord<'l> {
    fn parse(line: &'l str, line_num: usize) -> Result<Self, PdbError> {
        if line.len() < MIN_ATOM_RECORD_LENGTH {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::LineTooShort,
            });
        }

        let raw_name = line.get(12..16).unwrap_or("");
        if raw_name.trim().is_empty() {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::MissingRequiredField { columns: "13-16" },
            });
        }

        // Serial numbers overflow five columns in large files; fall back to 0.
        let serial = slice_and_trim(line, 6, 11).parse().unwrap_or(0);

        let x = parse_field(line, 30, 38, "31-38", line_num, invalid_float)?;
        let y = parse_field(line, 38, 46, "39-46", line_num, invalid_float)?;
        let z = parse_field(line, 46, 54, "47-54", line_num, invalid_float)?;

        Ok(Self {
            serial,
            raw_name,
            residue_name: slice_and_trim(line, 17, 21),
            chain_id: column_char(line, 21),
            residue_number: parse_field(line, 22, 26, "23-26", line_num, invalid_int)?,
            insertion_code: column_char(line, 26),
            position: Point3::new(x, y, z),
        })
    }
}

/// Reader for the fixed-column Protein Data Bank format.
///
/// Only ATOM and HETATM records of the first model are read. Of alternate
/// locations, the blank and `A` conformers are kept. The four-column atom name
/// field is preserved as the atom's raw name.
pub struct PdbFile;

impl MolecularFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let mut builder = MolecularSystemBuilder::new();
        let mut metadata = PdbMetadata::default();

        let mut current_chain: Option<char> = None;
        let mut current_residue: Option<(isize, char)> = None;
        let mut models_seen = 0usize;

        let mut lines = reader.lines().enumerate();
        while let Some((line_num, line_res)) = lines.next() {
            let line = line_res?;
            let line_num = line_num + 1;
            let record_type = record_name(&line);

            match record_type {
                "MODEL" => {
                    models_seen += 1;
                    if models_seen > 1 {
                        metadata.has_additional_models = true;
                        break;
                    }
                }
                "ENDMDL" if builder.atom_count() > 0 => {
                    for (_, rest) in lines.by_ref() {
                        if record_name(&rest?) == "MODEL" {
                            metadata.has_additional_models = true;
                            break;
                        }
                    }
                    break;
                }
                "END" => break,
                "ATOM" | "HETATM" => {
                    let alt_loc = column_char(&line, 16);
                    if alt_loc != ' ' && alt_loc != 'A' {
                        metadata.skipped_alternate_locations += 1;
                        continue;
                    }

                    let record = AtomRecord::parse(&line, line_num)?;

                    if current_chain != Some(record.chain_id) {
                        builder.start_chain(record.chain_id);
                        current_chain = Some(record.chain_id);
                        current_residue = None;
                    }
                    let residue_key = (record.residue_number, record.insertion_code);
                    if current_residue != Some(residue_key) {
                        let insertion_code = if record.insertion_code.is_ascii_alphanumeric() {
                            record.insertion_code
                        } else {
                            NO_INSERTION_CODE
                        };
                        builder.start_residue(
                            record.residue_number,
                            insertion_code,
                            record.residue_name,
                        );
                        current_residue = Some(residue_key);
                    }
                    builder.add_atom(record.serial, record.raw_name, record.position);
                }
                _ if HEADER_RECORDS.contains(&record_type) => {
                    metadata.header_lines.push(line.trim_end().to_string());
                }
                _ => {}
            }
        }

        if builder.atom_count() == 0 {
            return Err(PdbError::EmptyStructure);
        }

        Ok((builder.build(), metadata))
    }
}
