use crate::core::hbond::classify::HBondDetector;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::zone::ResidueSpec;
use crate::engine::config::{ConfigError, ScanConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection::{resolve_residue, resolve_selection};
use crate::engine::tasks::hbond_scan::{self, HBondContact};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Bonds found, in structure order of their first residue.
    pub contacts: Vec<HBondContact>,
    pub residues_scanned: usize,
}

/// Scans the selected residues of `system` for hydrogen bonds.
///
/// Every pair of selected residues is classified once; directional modes
/// classify both orders of each pair. At most one bond is reported per
/// classified pair: the first combination found in priority order.
///
/// # Errors
///
/// Fails when the criteria are invalid or the selection resolves to nothing.
#[instrument(skip_all, name = "scan_workflow")]
pub fn run(
    system: &MolecularSystem,
    config: &ScanConfig,
    reporter: &ProgressReporter,
) -> Result<ScanReport, EngineError> {
    config.criteria.validate().map_err(ConfigError::from)?;

    // === Phase 1: Resolve residue selection ===
    reporter.report(Progress::PhaseStart {
        name: "Resolving Selection",
    });
    let residues = resolve_selection(system, &config.selection)?;
    info!(residues = residues.len(), "Residue selection resolved.");
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Pairwise scan ===
    reporter.report(Progress::PhaseStart {
        name: "Scanning Residue Pairs",
    });
    let contacts = hbond_scan::run(
        system,
        &residues,
        &config.mode,
        &config.criteria,
        reporter,
    );
    reporter.report(Progress::PhaseFinish);

    info!(
        "Workflow complete. Found {} hydrogen bond(s) among {} residue(s).",
        contacts.len(),
        residues.len()
    );
    Ok(ScanReport {
        contacts,
        residues_scanned: residues.len(),
    })
}

/// Classifies a single residue pair under `config`'s mode and criteria.
///
/// The residue selection of `config` is ignored.
///
/// # Errors
///
/// Fails when the criteria are invalid or either residue does not exist.
#[instrument(skip_all, name = "pair_workflow")]
pub fn run_pair(
    system: &MolecularSystem,
    first: &ResidueSpec,
    second: &ResidueSpec,
    config: &ScanConfig,
) -> Result<Option<HBondContact>, EngineError> {
    config.criteria.validate().map_err(ConfigError::from)?;
    let first_id = resolve_residue(system, first)?;
    let second_id = resolve_residue(system, second)?;

    let detector = HBondDetector::with_criteria(system, config.criteria);
    let contact = hbond_scan::classify_pair(&detector, first_id, second_id, &config.mode);
    info!(
        %first,
        %second,
        bonded = contact.is_some(),
        "Classified residue pair."
    );
    Ok(contact)
}
