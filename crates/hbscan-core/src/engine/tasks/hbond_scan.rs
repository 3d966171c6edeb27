use crate::core::hbond::classify::{HBond, HBondDetector};
use crate::core::hbond::criteria::HBondCriteria;
use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use crate::engine::config::ScanMode;
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::Itertools;
use tracing::{info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A hydrogen bond between two residues, reported as found.
///
/// `residue1` is the residue the classifier treated as "first": for directional
/// modes it is the one donating or accepting through its backbone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HBondContact {
    pub residue1: ResidueId,
    pub residue2: ResidueId,
    pub bond: HBond,
}

/// Residue pairs examined for `mode`, in structure order.
///
/// Symmetric scans look at each unordered pair once (earlier residue first);
/// directional scans look at both orders.
fn residue_pairs(residues: &[ResidueId], mode: &ScanMode) -> Vec<(ResidueId, ResidueId)> {
    if mode.is_directional() {
        residues
            .iter()
            .copied()
            .permutations(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    } else {
        residues.iter().copied().tuple_combinations().collect()
    }
}

pub fn classify_pair(
    detector: &HBondDetector<'_>,
    first: ResidueId,
    second: ResidueId,
    mode: &ScanMode,
) -> Option<HBondContact> {
    let bond = match *mode {
        ScanMode::All(roles) => detector.classify(first, second, roles),
        ScanMode::MainchainDonor(roles) => detector.classify_mainchain_donor(first, second, roles),
        ScanMode::MainchainAcceptor(roles) => {
            detector.classify_mainchain_acceptor(first, second, roles)
        }
    }?;
    Some(HBondContact {
        residue1: first,
        residue2: second,
        bond,
    })
}

#[instrument(skip_all, name = "hbond_scan_task")]
pub fn run(
    system: &MolecularSystem,
    residues: &[ResidueId],
    mode: &ScanMode,
    criteria: &HBondCriteria,
    reporter: &ProgressReporter,
) -> Vec<HBondContact> {
    let pairs = residue_pairs(residues, mode);
    info!(
        residues = residues.len(),
        pairs = pairs.len(),
        mode = %mode.kind(),
        roles = %mode.roles(),
        "Scanning residue pairs for hydrogen bonds."
    );

    if pairs.is_empty() {
        return Vec::new();
    }

    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });

    let detector = HBondDetector::with_criteria(system, *criteria);

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let contacts: Vec<HBondContact> = iterator
        .filter_map(|&(first, second)| {
            let contact = classify_pair(&detector, first, second, mode);
            reporter.report(Progress::TaskIncrement);
            if let Some(contact) = &contact {
                trace!(roles = %contact.bond.roles, "Hydrogen bond found.");
            }
            contact
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    info!(num_bonds = contacts.len(), "Hydrogen-bond scan complete.");

    contacts
}
