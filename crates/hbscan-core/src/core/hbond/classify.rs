use super::criteria::HBondCriteria;
use super::finders::{BackboneAcceptor, BackboneDonor, find_backbone_acceptor, find_backbone_donor};
use super::roles::RoleFlags;
use super::scanners::{SidechainAcceptors, SidechainDonors};
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::system::MolecularSystem;

/// A hydrogen bond found between two residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HBond {
    /// Role combination that matched.
    pub roles: RoleFlags,
    pub hydrogen: Option<AtomId>,
    pub donor: AtomId,
    pub acceptor: AtomId,
    pub antecedent: Option<AtomId>,
}

/// Donor side of a candidate bond.
#[derive(Debug, Clone, Copy)]
struct Donor {
    donor: AtomId,
    hydrogen: Option<AtomId>,
}

/// Acceptor side of a candidate bond.
#[derive(Debug, Clone, Copy)]
struct Acceptor {
    acceptor: AtomId,
    antecedent: Option<AtomId>,
}

impl From<BackboneDonor> for Donor {
    fn from(d: BackboneDonor) -> Self {
        Self {
            donor: d.donor,
            hydrogen: d.hydrogen,
        }
    }
}

impl From<BackboneAcceptor> for Acceptor {
    fn from(a: BackboneAcceptor) -> Self {
        Self {
            acceptor: a.acceptor,
            antecedent: Some(a.antecedent),
        }
    }
}

/// Classifies residue pairs by the hydrogen bonds between them.
///
/// The detector only borrows the system; it is cheap to build and `Sync`, so a
/// single detector can serve many threads.
#[derive(Debug, Clone, Copy)]
pub struct HBondDetector<'a> {
    system: &'a MolecularSystem,
    criteria: HBondCriteria,
}

impl<'a> HBondDetector<'a> {
    pub fn new(system: &'a MolecularSystem) -> Self {
        Self::with_criteria(system, HBondCriteria::default())
    }

    pub fn with_criteria(system: &'a MolecularSystem, criteria: HBondCriteria) -> Self {
        Self { system, criteria }
    }

    pub fn criteria(&self) -> &HBondCriteria {
        &self.criteria
    }

    fn bond(&self, donor: Donor, acceptor: Acceptor, roles: RoleFlags) -> Option<HBond> {
        let resolve = |id: Option<AtomId>| id.and_then(|id| self.system.atom(id));
        self.criteria
            .is_valid(
                resolve(donor.hydrogen),
                resolve(Some(donor.donor)),
                resolve(Some(acceptor.acceptor)),
                resolve(acceptor.antecedent),
            )
            .then_some(HBond {
                roles,
                hydrogen: donor.hydrogen,
                donor: donor.donor,
                acceptor: acceptor.acceptor,
                antecedent: acceptor.antecedent,
            })
    }

    fn backbone_donor(&self, residue_id: ResidueId) -> Option<Donor> {
        find_backbone_donor(self.system, residue_id).map(Donor::from)
    }

    fn backbone_acceptor(&self, residue_id: ResidueId) -> Option<Acceptor> {
        find_backbone_acceptor(self.system, residue_id).map(Acceptor::from)
    }

    fn sidechain_donors(&self, residue_id: ResidueId) -> impl Iterator<Item = Donor> + 'a {
        SidechainDonors::new(self.system, residue_id).map(|d| Donor {
            donor: d.donor,
            hydrogen: d.hydrogen,
        })
    }

    fn sidechain_acceptors(&self, residue_id: ResidueId) -> impl Iterator<Item = Acceptor> + 'a {
        SidechainAcceptors::new(self.system, residue_id).map(|a| Acceptor {
            acceptor: a.acceptor,
            antecedent: a.antecedent,
        })
    }

    /// Tests `donor` against the backbone acceptor and then every sidechain
    /// acceptor of `residue_id`, as permitted by `roles`' second-residue facets.
    fn donor_against(
        &self,
        donor: Donor,
        residue_id: ResidueId,
        roles: RoleFlags,
        backbone_hit: RoleFlags,
        sidechain_hit: RoleFlags,
    ) -> Option<HBond> {
        if roles.backbone2 {
            let found = self
                .backbone_acceptor(residue_id)
                .and_then(|acceptor| self.bond(donor, acceptor, backbone_hit));
            if found.is_some() {
                return found;
            }
        }
        if roles.sidechain2 {
            return self
                .sidechain_acceptors(residue_id)
                .find_map(|acceptor| self.bond(donor, acceptor, sidechain_hit));
        }
        None
    }

    /// Mirror of [`donor_against`](Self::donor_against) for a fixed acceptor.
    fn acceptor_against(
        &self,
        acceptor: Acceptor,
        residue_id: ResidueId,
        roles: RoleFlags,
        backbone_hit: RoleFlags,
        sidechain_hit: RoleFlags,
    ) -> Option<HBond> {
        if roles.backbone2 {
            let found = self
                .backbone_donor(residue_id)
                .and_then(|donor| self.bond(donor, acceptor, backbone_hit));
            if found.is_some() {
                return found;
            }
        }
        if roles.sidechain2 {
            return self
                .sidechain_donors(residue_id)
                .find_map(|donor| self.bond(donor, acceptor, sidechain_hit));
        }
        None
    }

    /// Finds a hydrogen bond between two residues within the requested roles.
    ///
    /// Combinations are tried in a fixed priority and the first valid one is
    /// returned:
    ///
    /// 1. `first`'s backbone donor, then its backbone acceptor, each against
    ///    `second`'s backbone and then its sidechain;
    /// 2. each sidechain donor of `first`, then each sidechain acceptor of
    ///    `first`, again against `second`'s backbone before its sidechain.
    ///
    /// Unknown residues, prolines asked to donate and missing atoms simply
    /// produce no bond.
    pub fn classify(&self, first: ResidueId, second: ResidueId, roles: RoleFlags) -> Option<HBond> {
        if roles.backbone1 {
            if let Some(donor) = self.backbone_donor(first) {
                let found = self.donor_against(donor, second, roles, RoleFlags::BB, RoleFlags::BS);
                if found.is_some() {
                    return found;
                }
            }
            if let Some(acceptor) = self.backbone_acceptor(first) {
                let found =
                    self.acceptor_against(acceptor, second, roles, RoleFlags::BB, RoleFlags::BS);
                if found.is_some() {
                    return found;
                }
            }
        }

        if roles.sidechain1 {
            let found = self.sidechain_donors(first).find_map(|donor| {
                self.donor_against(donor, second, roles, RoleFlags::SB, RoleFlags::SS)
            });
            if found.is_some() {
                return found;
            }
            return self.sidechain_acceptors(first).find_map(|acceptor| {
                self.acceptor_against(acceptor, second, roles, RoleFlags::SB, RoleFlags::SS)
            });
        }

        None
    }

    /// Finds a bond in which `first` donates through its backbone amide.
    ///
    /// Only the `backbone2` and `sidechain2` facets of `roles` are consulted.
    /// The result carries `BACK2` or `SIDE2` depending on where `second` accepts.
    pub fn classify_mainchain_donor(
        &self,
        first: ResidueId,
        second: ResidueId,
        roles: RoleFlags,
    ) -> Option<HBond> {
        let donor = self.backbone_donor(first)?;
        self.donor_against(donor, second, roles, RoleFlags::BACK2, RoleFlags::SIDE2)
    }

    /// Finds a bond in which `first` accepts through its backbone carbonyl.
    ///
    /// Only the `backbone2` and `sidechain2` facets of `roles` are consulted. A
    /// backbone donor on `second` reports `BACK2`; a sidechain donor reports
    /// `BACK1 | SIDE2`, not `SIDE2`, which existing callers depend on.
    pub fn classify_mainchain_acceptor(
        &self,
        first: ResidueId,
        second: ResidueId,
        roles: RoleFlags,
    ) -> Option<HBond> {
        let acceptor = self.backbone_acceptor(first)?;
        self.acceptor_against(acceptor, second, roles, RoleFlags::BACK2, RoleFlags::BS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    type AtomSpec<'s> = (&'s str, [f64; 3]);

    struct Fixture {
        system: MolecularSystem,
        residues: Vec<ResidueId>,
    }

    impl Fixture {
        fn new(residues: &[(&str, &[AtomSpec])]) -> Self {
            let mut system = MolecularSystem::new();
            let chain_id = system.add_chain('A');
            let residues = residues
                .iter()
                .enumerate()
                .map(|(i, (name, atoms))| {
                    let rid = system
                        .add_residue(chain_id, i as isize + 1, ' ', name)
                        .unwrap();
                    for (atom_name, [x, y, z]) in atoms.iter() {
                        let atom = Atom::new(atom_name, rid, Point3::new(*x, *y, *z));
                        system.add_atom_to_residue(rid, atom).unwrap();
                    }
                    rid
                })
                .collect();
            Self { system, residues }
        }

        fn atom_named(&self, residue: usize, name: &str) -> AtomId {
            self.system
                .residue_atoms(self.residues[residue])
                .find(|(_, atom)| atom.name == name)
                .map(|(id, _)| id)
                .unwrap()
        }

        fn detector(&self) -> HBondDetector<'_> {
            HBondDetector::new(&self.system)
        }
    }

    // Residue 1 donates N-H along +x towards residue 2's carbonyl O at 2.4 Å
    // from H, with a D-H-A angle of 160 degrees.
    fn backbone_pair(first: &str, h_to_o: f64) -> Fixture {
        let bend = 20.0_f64.to_radians();
        let o = [1.0 + h_to_o * bend.cos(), h_to_o * bend.sin(), 0.0];
        let c = [o[0] + 1.23, o[1], 0.0];
        Fixture::new(&[
            (
                first,
                &[
                    ("N", [0.0, 0.0, 0.0]),
                    ("H", [1.0, 0.0, 0.0]),
                    ("CA", [-1.0, -1.0, 0.0]),
                ],
            ),
            (
                "GLY",
                &[
                    ("CA", [o[0] + 2.0, o[1] + 1.5, 0.0]),
                    ("C", c),
                    ("O", o),
                ],
            ),
        ])
    }

    #[test]
    fn backbone_pair_is_bonded_with_bb_roles() {
        let f = backbone_pair("ALA", 2.4);
        let bond = f
            .detector()
            .classify(f.residues[0], f.residues[1], RoleFlags::ANY)
            .unwrap();
        assert_eq!(bond.roles, RoleFlags::BB);
        assert_eq!(bond.donor, f.atom_named(0, "N"));
        assert_eq!(bond.hydrogen, Some(f.atom_named(0, "H")));
        assert_eq!(bond.acceptor, f.atom_named(1, "O"));
        assert_eq!(bond.antecedent, Some(f.atom_named(1, "C")));
    }

    #[test]
    fn moving_hydrogen_out_of_range_breaks_the_bond() {
        let f = backbone_pair("ALA", 2.6);
        assert_eq!(
            f.detector()
                .classify(f.residues[0], f.residues[1], RoleFlags::ANY),
            None
        );
    }

    #[test]
    fn proline_never_donates_through_its_backbone() {
        let f = backbone_pair("PRO", 2.4);
        assert_eq!(
            f.detector()
                .classify(f.residues[0], f.residues[1], RoleFlags::ANY),
            None
        );
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::BB, Mode::MainchainDonor),
            None
        );
    }

    #[test]
    fn role_flags_restrict_the_search() {
        let f = backbone_pair("ALA", 2.4);
        let d = f.detector();
        let (r1, r2) = (f.residues[0], f.residues[1]);
        assert!(d.classify(r1, r2, RoleFlags::BB).is_some());
        assert!(d.classify(r1, r2, RoleFlags::BACKBONE).is_some());
        assert_eq!(d.classify(r1, r2, RoleFlags::BS), None);
        assert_eq!(d.classify(r1, r2, RoleFlags::SIDECHAIN), None);
        assert_eq!(d.classify(r1, r2, RoleFlags::NONE), None);
        // Reversed, the same contact is found through GLY's carbonyl.
        let reversed = d.classify(r2, r1, RoleFlags::BB).unwrap();
        assert_eq!(reversed.roles, RoleFlags::BB);
        assert_eq!(reversed.acceptor, f.atom_named(1, "O"));
    }

    #[derive(Clone, Copy)]
    enum Mode {
        Any,
        MainchainDonor,
        MainchainAcceptor,
    }

    fn is_bonded(
        f: &Fixture,
        first: usize,
        second: usize,
        roles: RoleFlags,
        mode: Mode,
    ) -> Option<RoleFlags> {
        let d = f.detector();
        let (first, second) = (f.residues[first], f.residues[second]);
        let bond = match mode {
            Mode::Any => d.classify(first, second, roles),
            Mode::MainchainDonor => d.classify_mainchain_donor(first, second, roles),
            Mode::MainchainAcceptor => d.classify_mainchain_acceptor(first, second, roles),
        };
        bond.map(|b| b.roles)
    }

    // Residue 1: backbone N-H pointing at residue 2, which offers both a
    // backbone O and a serine OG, each in bonding geometry.
    fn donor_with_two_acceptors() -> Fixture {
        Fixture::new(&[
            (
                "ALA",
                &[("N", [0.0, 0.0, 0.0]), ("H", [1.0, 0.0, 0.0])],
            ),
            (
                "SER",
                &[
                    ("C", [4.2, 0.0, 0.0]),
                    ("O", [3.0, 0.0, 0.0]),
                    ("CB", [1.0, 3.0, 0.0]),
                    ("OG", [1.0, 2.0, 0.0]),
                ],
            ),
        ])
    }

    #[test]
    fn backbone_acceptor_takes_priority_over_sidechain() {
        let f = donor_with_two_acceptors();
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::ANY, Mode::Any),
            Some(RoleFlags::BB)
        );
    }

    #[test]
    fn sidechain_acceptor_is_found_when_backbone_not_requested() {
        let f = Fixture::new(&[
            (
                "ALA",
                &[("N", [0.0, 0.0, 0.0]), ("H", [1.0, 0.0, 0.0])],
            ),
            (
                "SER",
                &[("CB", [4.2, 0.0, 0.0]), ("OG", [3.0, 0.0, 0.0])],
            ),
        ]);
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::ANY, Mode::Any),
            Some(RoleFlags::BS)
        );
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::BB, Mode::Any),
            None
        );
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::ANY, Mode::MainchainDonor),
            Some(RoleFlags::SIDE2)
        );
    }

    #[test]
    fn mainchain_donor_reports_second_residue_role_only() {
        let f = donor_with_two_acceptors();
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::ANY, Mode::MainchainDonor),
            Some(RoleFlags::BACK2)
        );
    }

    // Residue 1 carbonyl accepting from residue 2, whose backbone N-H and
    // sidechain NE2-HE2 (histidine-like) both point at it.
    fn carbonyl_acceptor_pair(with_backbone_donor: bool) -> Fixture {
        let backbone: &[AtomSpec] = &[("N", [3.0, 0.0, 0.0]), ("H", [2.0, 0.0, 0.0])];
        let sidechain: &[AtomSpec] = &[
            ("CD2", [0.0, 4.0, 0.0]),
            ("NE2", [0.0, 3.0, 0.0]),
            ("HE2", [0.0, 2.0, 0.0]),
        ];
        let second: Vec<AtomSpec> = if with_backbone_donor {
            backbone.iter().chain(sidechain).copied().collect()
        } else {
            sidechain.to_vec()
        };
        Fixture::new(&[
            (
                "GLY",
                &[("C", [-0.85, -0.85, 0.0]), ("O", [0.0, 0.0, 0.0])],
            ),
            ("HIS", second.as_slice()),
        ])
    }

    #[test]
    fn mainchain_acceptor_reports_back2_for_backbone_donor() {
        let f = carbonyl_acceptor_pair(true);
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::ANY, Mode::MainchainAcceptor),
            Some(RoleFlags::BACK2)
        );
    }

    #[test]
    fn mainchain_acceptor_sidechain_hit_keeps_back1_flag() {
        let f = carbonyl_acceptor_pair(false);
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::ANY, Mode::MainchainAcceptor),
            Some(RoleFlags::BACK1 | RoleFlags::SIDE2)
        );
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::BB, Mode::MainchainAcceptor),
            None
        );
    }

    #[test]
    fn backbone_acceptor_of_first_residue_is_tried_after_its_donor() {
        let f = carbonyl_acceptor_pair(true);
        let bond = f
            .detector()
            .classify(f.residues[0], f.residues[1], RoleFlags::ANY)
            .unwrap();
        assert_eq!(bond.roles, RoleFlags::BB);
        assert_eq!(bond.acceptor, f.atom_named(0, "O"));
        assert_eq!(bond.donor, f.atom_named(1, "N"));
    }

    #[test]
    fn sidechain_donor_to_backbone_acceptor_is_sb() {
        // Asparagine ND2-HD21 of residue 1 donating to residue 2's carbonyl.
        let f = Fixture::new(&[
            (
                "ASN",
                &[
                    ("CG", [-1.0, 1.0, 0.0]),
                    ("OD1", [-1.0, 2.2, 0.0]),
                    ("ND2", [0.0, 0.0, 0.0]),
                    ("HD21", [1.0, 0.0, 0.0]),
                    ("HD22", [-0.5, -0.8, 0.0]),
                ],
            ),
            (
                "ALA",
                &[("C", [4.2, 0.0, 0.0]), ("O", [3.0, 0.0, 0.0])],
            ),
        ]);
        let bond = f
            .detector()
            .classify(f.residues[0], f.residues[1], RoleFlags::ANY)
            .unwrap();
        assert_eq!(bond.roles, RoleFlags::SB);
        assert_eq!(bond.donor, f.atom_named(0, "ND2"));
        assert_eq!(bond.hydrogen, Some(f.atom_named(0, "HD21")));
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::SS, Mode::Any),
            None
        );
    }

    #[test]
    fn lysine_amine_bonds_on_heavy_atom_distance() {
        // NZ to sidechain OD1 at 3.0 Å; the HZ hydrogens point away, which would
        // fail the hydrogen-based test if they were used.
        let f = Fixture::new(&[
            (
                "LYS",
                &[
                    ("CE", [-1.5, 0.0, 0.0]),
                    ("NZ", [0.0, 0.0, 0.0]),
                    ("HZ1", [-0.3, 1.0, 0.0]),
                    ("HZ2", [-0.3, -1.0, 0.0]),
                ],
            ),
            (
                "ASP",
                &[("CG", [4.2, 0.0, 0.0]), ("OD1", [3.0, 0.0, 0.0])],
            ),
        ]);
        let bond = f
            .detector()
            .classify(f.residues[0], f.residues[1], RoleFlags::SS)
            .unwrap();
        assert_eq!(bond.roles, RoleFlags::SS);
        assert_eq!(bond.donor, f.atom_named(0, "NZ"));
        assert_eq!(bond.hydrogen, None);
        assert_eq!(bond.antecedent, Some(f.atom_named(1, "CG")));
    }

    #[test]
    fn sidechain_acceptor_of_first_residue_is_tried_last() {
        // Serine OG of residue 1 accepting from residue 2's backbone amide.
        let f = Fixture::new(&[
            ("SER", &[("CB", [-1.2, 0.0, 0.0]), ("OG", [0.0, 0.0, 0.0])]),
            ("ALA", &[("N", [3.0, 0.0, 0.0]), ("H", [2.0, 0.0, 0.0])]),
        ]);
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::ANY, Mode::Any),
            Some(RoleFlags::SB)
        );
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::BACKBONE, Mode::Any),
            None
        );
    }

    #[test]
    fn backbone_acceptor_to_sidechain_donor_is_bs() {
        let f = carbonyl_acceptor_pair(false);
        let bond = f
            .detector()
            .classify(f.residues[0], f.residues[1], RoleFlags::ANY)
            .unwrap();
        assert_eq!(bond.roles, RoleFlags::BS);
        assert_eq!(bond.acceptor, f.atom_named(0, "O"));
        assert_eq!(bond.antecedent, Some(f.atom_named(0, "C")));
        assert_eq!(bond.donor, f.atom_named(1, "NE2"));
        assert_eq!(bond.hydrogen, Some(f.atom_named(1, "HE2")));
    }

    #[test]
    fn sidechain_acceptor_to_sidechain_donor_is_ss() {
        // Serine OG of residue 1 accepting from residue 2's NE2-HE2.
        let f = Fixture::new(&[
            ("SER", &[("CB", [-1.2, 0.0, 0.0]), ("OG", [0.0, 0.0, 0.0])]),
            (
                "HIS",
                &[
                    ("CD2", [4.0, 0.0, 0.0]),
                    ("NE2", [3.0, 0.0, 0.0]),
                    ("HE2", [2.0, 0.0, 0.0]),
                ],
            ),
        ]);
        let bond = f
            .detector()
            .classify(f.residues[0], f.residues[1], RoleFlags::ANY)
            .unwrap();
        assert_eq!(bond.roles, RoleFlags::SS);
        assert_eq!(bond.acceptor, f.atom_named(0, "OG"));
        assert_eq!(bond.antecedent, Some(f.atom_named(0, "CB")));
        assert_eq!(bond.donor, f.atom_named(1, "NE2"));
        assert_eq!(
            is_bonded(&f, 0, 1, RoleFlags::SB, Mode::Any),
            None
        );
    }

    #[test]
    fn unknown_residues_are_never_bonded() {
        let f = backbone_pair("ALA", 2.4);
        let d = f.detector();
        let unknown = ResidueId::default();
        assert_eq!(d.classify(unknown, f.residues[1], RoleFlags::ANY), None);
        assert_eq!(d.classify(f.residues[0], unknown, RoleFlags::ANY), None);
        assert_eq!(
            d.classify_mainchain_acceptor(unknown, f.residues[0], RoleFlags::ANY),
            None
        );
    }

    #[test]
    fn custom_criteria_change_the_verdict() {
        let f = backbone_pair("ALA", 2.4);
        let tight = HBondCriteria {
            hydrogen_acceptor_cutoff: 2.0,
            ..HBondCriteria::default()
        };
        let d = HBondDetector::with_criteria(&f.system, tight);
        assert_eq!(d.criteria().hydrogen_acceptor_cutoff, 2.0);
        assert_eq!(d.classify(f.residues[0], f.residues[1], RoleFlags::ANY), None);
    }
}
