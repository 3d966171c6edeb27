//! Resumable scans over the sidechain donors and acceptors of one residue.
//!
//! Both scanners identify atoms purely by name and by their position in the
//! residue's record order. Each scanner owns its cursor, so any number of scans
//! (over the same residue or different ones) can be live at once.

use crate::core::models::atom::Atom;
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::system::MolecularSystem;
use crate::core::utils::identifiers::{
    is_backbone_hydrogen, is_backbone_nitrogen, is_backbone_oxygen, is_hydrogen_name, is_lysine,
};

/// Raw-name column holding the branch designator (`E` in `" OE1"`).
const BRANCH_COLUMN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidechainAcceptor {
    pub acceptor: AtomId,
    pub antecedent: Option<AtomId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidechainDonor {
    pub donor: AtomId,
    /// `None` when the hydrogen position is not fixed by the donor geometry.
    pub hydrogen: Option<AtomId>,
}

fn is_sidechain_acceptor(atom: &Atom) -> bool {
    match atom.element_initial() {
        Some(b'O') => !is_backbone_oxygen(&atom.name),
        Some(b'N') => !is_backbone_nitrogen(&atom.name),
        _ => false,
    }
}

fn is_sidechain_hydrogen(atom: &Atom) -> bool {
    is_hydrogen_name(&atom.name) && !is_backbone_hydrogen(&atom.name)
}

/// Iterator over the sidechain acceptors of a residue, in record order.
///
/// Any oxygen other than the backbone oxygens and any nitrogen other than the
/// amide `N` counts as an acceptor. The antecedent is the atom just before the
/// acceptor, except when that atom sits on the same branch (same raw-name
/// column 3, as `OE1` before `NE2` in glutamine); the atom before that is used
/// then.
#[derive(Debug, Clone)]
pub struct SidechainAcceptors<'a> {
    system: &'a MolecularSystem,
    atoms: &'a [AtomId],
    position: usize,
    previous: Option<AtomId>,
    previous_previous: Option<AtomId>,
}

impl<'a> SidechainAcceptors<'a> {
    pub fn new(system: &'a MolecularSystem, residue_id: ResidueId) -> Self {
        let atoms = system
            .residue(residue_id)
            .map(|residue| residue.atoms())
            .unwrap_or_default();
        Self {
            system,
            atoms,
            position: 0,
            previous: None,
            previous_previous: None,
        }
    }

    /// Rewinds the scan to the first atom of the residue.
    pub fn reset(&mut self) {
        self.position = 0;
        self.previous = None;
        self.previous_previous = None;
    }

    fn same_branch(&self, first: AtomId, second: &Atom) -> bool {
        self.system
            .atom(first)
            .is_some_and(|first| {
                first.raw_name_column(BRANCH_COLUMN) == second.raw_name_column(BRANCH_COLUMN)
            })
    }
}

impl Iterator for SidechainAcceptors<'_> {
    type Item = SidechainAcceptor;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&atom_id) = self.atoms.get(self.position) {
            self.position += 1;
            let Some(atom) = self.system.atom(atom_id) else {
                continue;
            };

            let previous = self.previous;
            let previous_previous = self.previous_previous;
            self.previous_previous = previous;
            self.previous = Some(atom_id);

            if is_sidechain_acceptor(atom) {
                let antecedent = match previous {
                    Some(prev) if self.same_branch(prev, atom) => previous_previous,
                    other => other,
                };
                return Some(SidechainAcceptor {
                    acceptor: atom_id,
                    antecedent,
                });
            }
        }
        None
    }
}

/// Iterator over the sidechain donors of a residue, in record order.
///
/// Every hydrogen other than the amide `H` marks the atom just before it as a
/// donor. A run of consecutive hydrogens yields its donor once. Hydroxyl and
/// lysine amine hydrogens rotate freely, so those donors come without a hydrogen
/// and are judged on heavy-atom geometry.
#[derive(Debug, Clone)]
pub struct SidechainDonors<'a> {
    system: &'a MolecularSystem,
    atoms: &'a [AtomId],
    is_lysine: bool,
    position: usize,
    previous: Option<AtomId>,
}

impl<'a> SidechainDonors<'a> {
    pub fn new(system: &'a MolecularSystem, residue_id: ResidueId) -> Self {
        let residue = system.residue(residue_id);
        Self {
            system,
            atoms: residue.map(|residue| residue.atoms()).unwrap_or_default(),
            is_lysine: residue.is_some_and(|residue| is_lysine(&residue.name)),
            position: 0,
            previous: None,
        }
    }

    /// Rewinds the scan to the first atom of the residue.
    pub fn reset(&mut self) {
        self.position = 0;
        self.previous = None;
    }

    fn is_hydrogen_at(&self, position: usize) -> Option<AtomId> {
        let &atom_id = self.atoms.get(position)?;
        self.system
            .atom(atom_id)
            .filter(|atom| is_hydrogen_name(&atom.name))
            .map(|_| atom_id)
    }

    fn has_rotatable_hydrogen(&self, donor: &Atom) -> bool {
        match donor.element_initial() {
            Some(b'O') => true,
            Some(b'N') => self.is_lysine,
            _ => false,
        }
    }
}

impl Iterator for SidechainDonors<'_> {
    type Item = SidechainDonor;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&atom_id) = self.atoms.get(self.position) {
            let Some(atom) = self.system.atom(atom_id) else {
                self.position += 1;
                continue;
            };

            if !is_sidechain_hydrogen(atom) {
                self.previous = Some(atom_id);
                self.position += 1;
                continue;
            }

            // A hydrogen with nothing before it has no donor to attach to.
            let Some(donor_id) = self.previous else {
                self.position += 1;
                continue;
            };

            while let Some(hydrogen_id) = self.is_hydrogen_at(self.position) {
                self.previous = Some(hydrogen_id);
                self.position += 1;
            }

            let donor = self.system.atom(donor_id)?;
            let hydrogen = (!self.has_rotatable_hydrogen(donor)).then_some(atom_id);
            return Some(SidechainDonor {
                donor: donor_id,
                hydrogen,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    struct Fixture {
        system: MolecularSystem,
        residue_id: ResidueId,
        ids: Vec<AtomId>,
    }

    impl Fixture {
        fn new(residue_name: &str, atoms: &[&str]) -> Self {
            let mut system = MolecularSystem::new();
            let chain_id = system.add_chain('A');
            let residue_id = system.add_residue(chain_id, 1, ' ', residue_name).unwrap();
            let ids = atoms
                .iter()
                .map(|name| {
                    let atom = Atom::new(name, residue_id, Point3::origin());
                    system.add_atom_to_residue(residue_id, atom).unwrap()
                })
                .collect();
            Self {
                system,
                residue_id,
                ids,
            }
        }

        fn acceptors(&self) -> Vec<SidechainAcceptor> {
            SidechainAcceptors::new(&self.system, self.residue_id).collect()
        }

        fn donors(&self) -> Vec<SidechainDonor> {
            SidechainDonors::new(&self.system, self.residue_id).collect()
        }
    }

    #[test]
    fn serine_hydroxyl_is_acceptor_with_carbon_antecedent() {
        let f = Fixture::new("SER", &["N", "H", "CA", "C", "O", "CB", "OG", "HG"]);
        assert_eq!(
            f.acceptors(),
            vec![SidechainAcceptor {
                acceptor: f.ids[6],
                antecedent: Some(f.ids[5]),
            }]
        );
    }

    #[test]
    fn glutamine_amide_nitrogen_skips_same_branch_oxygen() {
        let f = Fixture::new(
            "GLN",
            &["N", "CA", "C", "O", "CB", "CG", "CD", "OE1", "NE2", "HE21", "HE22"],
        );
        assert_eq!(
            f.acceptors(),
            vec![
                SidechainAcceptor {
                    acceptor: f.ids[7],
                    antecedent: Some(f.ids[6]),
                },
                SidechainAcceptor {
                    acceptor: f.ids[8],
                    antecedent: Some(f.ids[6]),
                },
            ]
        );
    }

    #[test]
    fn same_branch_rule_may_leave_antecedent_absent() {
        let f = Fixture::new("XXX", &["OE1", "NE2"]);
        assert_eq!(
            f.acceptors(),
            vec![
                SidechainAcceptor {
                    acceptor: f.ids[0],
                    antecedent: None,
                },
                SidechainAcceptor {
                    acceptor: f.ids[1],
                    antecedent: None,
                },
            ]
        );
    }

    #[test]
    fn backbone_nitrogen_and_oxygens_are_not_sidechain_acceptors() {
        let f = Fixture::new("ALA", &["N", "CA", "C", "O", "OXT", "CB"]);
        assert!(f.acceptors().is_empty());
    }

    #[test]
    fn acceptor_scan_restarts_identically() {
        let f = Fixture::new("ASP", &["N", "CA", "C", "O", "CB", "CG", "OD1", "OD2"]);
        let mut scan = SidechainAcceptors::new(&f.system, f.residue_id);
        let first: Vec<_> = scan.by_ref().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(scan.next(), None);

        scan.reset();
        let second: Vec<_> = scan.collect();
        assert_eq!(first, second);

        let fresh = f.acceptors();
        assert_eq!(first, fresh);
    }

    #[test]
    fn asparagine_amide_hydrogens_yield_one_donor() {
        let f = Fixture::new(
            "ASN",
            &["N", "H", "CA", "C", "O", "CB", "CG", "OD1", "ND2", "HD21", "HD22"],
        );
        assert_eq!(
            f.donors(),
            vec![SidechainDonor {
                donor: f.ids[8],
                hydrogen: Some(f.ids[9]),
            }]
        );
    }

    #[test]
    fn hydrogen_groups_are_stepped_over() {
        let f = Fixture::new(
            "ARG",
            &["NE", "HE", "CZ", "NH1", "HH11", "HH12", "NH2", "HH21", "HH22"],
        );
        assert_eq!(
            f.donors(),
            vec![
                SidechainDonor {
                    donor: f.ids[0],
                    hydrogen: Some(f.ids[1]),
                },
                SidechainDonor {
                    donor: f.ids[3],
                    hydrogen: Some(f.ids[4]),
                },
                SidechainDonor {
                    donor: f.ids[6],
                    hydrogen: Some(f.ids[7]),
                },
            ]
        );
    }

    #[test]
    fn amide_hydrogen_is_not_a_sidechain_donor() {
        let f = Fixture::new("GLY", &["N", "H", "CA", "C", "O"]);
        assert!(f.donors().is_empty());
    }

    #[test]
    fn lysine_amine_donor_has_no_hydrogen() {
        let f = Fixture::new(
            "LYS",
            &["N", "H", "CA", "C", "O", "CB", "CG", "CD", "CE", "NZ", "HZ1", "HZ2", "HZ3"],
        );
        assert_eq!(
            f.donors(),
            vec![SidechainDonor {
                donor: f.ids[9],
                hydrogen: None,
            }]
        );
    }

    #[test]
    fn hydroxyl_donor_has_no_hydrogen() {
        let f = Fixture::new("THR", &["N", "CA", "C", "O", "CB", "OG1", "HG1", "CG2"]);
        assert_eq!(
            f.donors(),
            vec![SidechainDonor {
                donor: f.ids[5],
                hydrogen: None,
            }]
        );
    }

    #[test]
    fn leading_hydrogen_is_skipped_and_not_remembered() {
        let f = Fixture::new("XXX", &["H1", "H2", "N2", "H3"]);
        assert_eq!(
            f.donors(),
            vec![SidechainDonor {
                donor: f.ids[2],
                hydrogen: Some(f.ids[3]),
            }]
        );
    }

    #[test]
    fn donor_scan_restarts_identically() {
        let f = Fixture::new("TRP", &["N", "CA", "C", "O", "CD1", "NE1", "HE1", "CE2"]);
        let mut scan = SidechainDonors::new(&f.system, f.residue_id);
        let first: Vec<_> = scan.by_ref().collect();
        scan.reset();
        let second: Vec<_> = scan.collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![SidechainDonor {
                donor: f.ids[5],
                hydrogen: Some(f.ids[6]),
            }]
        );
    }

    #[test]
    fn unknown_residue_yields_nothing() {
        let f = Fixture::new("SER", &["OG", "HG"]);
        let unknown = ResidueId::default();
        assert_eq!(SidechainAcceptors::new(&f.system, unknown).count(), 0);
        assert_eq!(SidechainDonors::new(&f.system, unknown).count(), 0);
    }

    #[test]
    fn nested_scans_are_independent() {
        let f = Fixture::new("ASP", &["CB", "CG", "OD1", "OD2"]);
        let mut pairs = 0;
        for outer in SidechainAcceptors::new(&f.system, f.residue_id) {
            for inner in SidechainAcceptors::new(&f.system, f.residue_id) {
                assert_ne!(outer.acceptor, AtomId::default());
                assert_ne!(inner.acceptor, AtomId::default());
                pairs += 1;
            }
        }
        assert_eq!(pairs, 4);
    }
}
