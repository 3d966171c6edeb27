use super::ids::ResidueId;
use nalgebra::Point3;

/// Width of the fixed atom-name field in PDB-style records.
pub const RAW_NAME_WIDTH: usize = 4;

/// Represents an atom record of a molecular structure.
///
/// An atom keeps two spellings of its name: the normalized `name` used for every
/// name comparison (e.g. `"OE1"`), and the `raw_name` exactly as it occupies the
/// four-column name field of a PDB record (e.g. `" OE1"`). Some hydrogen-bond
/// heuristics look at individual columns of the raw field, so the column
/// alignment must survive parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The normalized (trimmed) atom name, e.g. "CA", "NZ", "HE21".
    pub name: String,
    /// The atom name as laid out in the 4-column PDB name field.
    pub raw_name: String,
    /// The serial number from the source file, or 0 for atoms built in code.
    pub serial: usize,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` whose raw name is derived from `name`.
    ///
    /// The raw name follows the PDB alignment convention; see [`pdb_raw_name`].
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name. Surrounding whitespace is ignored.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        let name = name.trim();
        Self {
            name: name.to_string(),
            raw_name: pdb_raw_name(name),
            serial: 0,
            residue_id,
            position,
        }
    }

    /// Creates a new `Atom` from the raw, column-aligned name field of a record.
    ///
    /// The normalized name is the raw field with whitespace removed.
    pub fn from_raw_name(raw_name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: raw_name.trim().to_string(),
            raw_name: raw_name.to_string(),
            serial: 0,
            residue_id,
            position,
        }
    }

    /// Sets the serial number, builder style.
    pub fn with_serial(mut self, serial: usize) -> Self {
        self.serial = serial;
        self
    }

    /// Returns the byte at `column` (0-based) of the raw name field, if present.
    #[inline]
    pub fn raw_name_column(&self, column: usize) -> Option<u8> {
        self.raw_name.as_bytes().get(column).copied()
    }

    /// Returns the first character of the normalized name as an ASCII byte.
    #[inline]
    pub fn element_initial(&self) -> Option<u8> {
        self.name.as_bytes().first().copied()
    }
}

/// Lays out an atom name in the 4-column PDB name field.
///
/// Names of four characters fill the field. Shorter names start in the second
/// column and are right-padded with spaces, so `"CA"` becomes `" CA "` and
/// `"OE1"` becomes `" OE1"`.
pub fn pdb_raw_name(name: &str) -> String {
    let name = name.trim();
    if name.len() >= RAW_NAME_WIDTH {
        name.to_string()
    } else {
        format!(" {:<width$}", name, width = RAW_NAME_WIDTH - 1)
    }
}
