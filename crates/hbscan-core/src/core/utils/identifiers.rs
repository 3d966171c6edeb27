use phf::{Set, phf_set};

pub const BACKBONE_NITROGEN: &str = "N";
pub const BACKBONE_HYDROGEN: &str = "H";
pub const BACKBONE_CARBONYL_CARBON: &str = "C";

/// Names a backbone carbonyl/carboxyl oxygen may carry, terminal forms included.
static BACKBONE_OXYGEN_NAMES: Set<&'static str> = phf_set! {
    "O", "OXT", "O1", "O2",
};

pub fn is_backbone_oxygen(atom_name: &str) -> bool {
    BACKBONE_OXYGEN_NAMES.contains(atom_name.trim())
}

pub fn is_backbone_nitrogen(atom_name: &str) -> bool {
    atom_name.trim() == BACKBONE_NITROGEN
}

pub fn is_backbone_hydrogen(atom_name: &str) -> bool {
    atom_name.trim() == BACKBONE_HYDROGEN
}

pub fn is_backbone_carbonyl_carbon(atom_name: &str) -> bool {
    atom_name.trim() == BACKBONE_CARBONYL_CARBON
}

/// Any atom whose name starts with `H`, backbone amide hydrogen included.
pub fn is_hydrogen_name(atom_name: &str) -> bool {
    atom_name.trim_start().starts_with('H')
}

// Residue-name checks compare the first three characters only, so protonation
// or terminal variants such as "PROT" or "LYSN" still match.
pub fn is_proline(residue_name: &str) -> bool {
    residue_name.trim_start().starts_with("PRO")
}

pub fn is_lysine(residue_name: &str) -> bool {
    residue_name.trim_start().starts_with("LYS")
}
