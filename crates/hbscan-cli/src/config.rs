pub mod defaults;

use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use hbscan::core::hbond::{HBondCriteria, RoleFlags};
use hbscan::core::utils::zone::ResidueZone;
use hbscan::engine::config::{ResidueSelection, ScanConfig, ScanConfigBuilder, ScanKind, ScanMode};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialCriteriaConfig {
    donor_acceptor_cutoff: Option<f64>,
    hydrogen_acceptor_cutoff: Option<f64>,
    min_angle: Option<f64>,
    max_angle: Option<f64>,
    missing_antecedent_angle: Option<f64>,
}

impl PartialCriteriaConfig {
    fn merge_over(self, base: HBondCriteria) -> HBondCriteria {
        HBondCriteria {
            donor_acceptor_cutoff: self
                .donor_acceptor_cutoff
                .unwrap_or(base.donor_acceptor_cutoff),
            hydrogen_acceptor_cutoff: self
                .hydrogen_acceptor_cutoff
                .unwrap_or(base.hydrogen_acceptor_cutoff),
            min_angle: self.min_angle.unwrap_or(base.min_angle),
            max_angle: self.max_angle.unwrap_or(base.max_angle),
            missing_antecedent_angle: self
                .missing_antecedent_angle
                .unwrap_or(base.missing_antecedent_angle),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialScanSection {
    roles: Option<RoleFlags>,
    mode: Option<ScanKind>,
    zones: Option<Vec<String>>,
}

/// Scan settings as read from a TOML file, every field optional.
///
/// ```toml
/// [criteria]
/// donor-acceptor-cutoff = 3.5
/// hydrogen-acceptor-cutoff = 2.5
///
/// [scan]
/// roles = "bb"
/// mode = "all"
/// zones = ["A10-A40", "B5"]
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialScanConfig {
    criteria: Option<PartialCriteriaConfig>,
    scan: Option<PartialScanSection>,
}

impl PartialScanConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the file named by `--config`, or starts empty without one.
    pub fn load(args: &ClassifyArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final scan configuration.
    ///
    /// Precedence, highest first: command-line flags, `--set` values, the
    /// config file, built-in defaults. A non-empty `zones` replaces the zones of
    /// the file.
    pub fn merge_with_cli(mut self, args: &ClassifyArgs, zones: &[ResidueZone]) -> Result<ScanConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let criteria = self
            .criteria
            .take()
            .unwrap_or_default()
            .merge_over(defaults.criteria);
        let scan = self.scan.take().unwrap_or_default();

        let roles = args.roles.or(scan.roles).unwrap_or(defaults.roles);
        let kind = args.mode.or(scan.mode).unwrap_or(defaults.mode);

        let zones = if zones.is_empty() {
            scan.zones
                .unwrap_or_default()
                .iter()
                .map(|zone| {
                    ResidueZone::from_str(zone)
                        .map_err(|e| CliError::Config(format!("Invalid zone '{}': {}", zone, e)))
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            zones.to_vec()
        };
        let selection = if zones.is_empty() {
            ResidueSelection::All
        } else {
            ResidueSelection::Zones(zones)
        };

        ScanConfigBuilder::new()
            .mode(ScanMode::new(kind, roles))
            .criteria(criteria)
            .selection(selection)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "criteria.donor-acceptor-cutoff" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .donor_acceptor_cutoff = Some(parse_value(key, value_str, "float")?);
                }
                "criteria.hydrogen-acceptor-cutoff" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .hydrogen_acceptor_cutoff = Some(parse_value(key, value_str, "float")?);
                }
                "scan.roles" => {
                    self.scan.get_or_insert_with(Default::default).roles =
                        Some(parse_value(key, value_str, "role")?);
                }
                "scan.mode" => {
                    self.scan.get_or_insert_with(Default::default).mode =
                        Some(parse_value(key, value_str, "mode")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}
