use crate::core::hbond::criteria::{CriteriaError, HBondCriteria};
use crate::core::hbond::roles::RoleFlags;
use crate::core::utils::zone::ResidueZone;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid hydrogen-bond criteria: {0}")]
    InvalidCriteria(#[from] CriteriaError),
}

/// How the first residue of each pair is allowed to participate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanKind {
    /// Any donor or acceptor of the first residue, within the requested roles.
    #[default]
    All,
    /// The first residue donates through its backbone amide.
    MainchainDonor,
    /// The first residue accepts through its backbone carbonyl.
    MainchainAcceptor,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid scan mode '{0}': expected all, mainchain-donor or mainchain-acceptor")]
pub struct ParseScanKindError(pub String);

impl FromStr for ScanKind {
    type Err = ParseScanKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "mainchain-donor" | "mc-donor" => Ok(Self::MainchainDonor),
            "mainchain-acceptor" | "mc-acceptor" => Ok(Self::MainchainAcceptor),
            _ => Err(ParseScanKindError(s.to_string())),
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::MainchainDonor => "mainchain-donor",
            Self::MainchainAcceptor => "mainchain-acceptor",
        })
    }
}

/// Which classifier a scan applies, and with which role flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    All(RoleFlags),
    MainchainDonor(RoleFlags),
    MainchainAcceptor(RoleFlags),
}

impl ScanMode {
    pub fn new(kind: ScanKind, roles: RoleFlags) -> Self {
        match kind {
            ScanKind::All => Self::All(roles),
            ScanKind::MainchainDonor => Self::MainchainDonor(roles),
            ScanKind::MainchainAcceptor => Self::MainchainAcceptor(roles),
        }
    }

    pub fn kind(&self) -> ScanKind {
        match self {
            Self::All(_) => ScanKind::All,
            Self::MainchainDonor(_) => ScanKind::MainchainDonor,
            Self::MainchainAcceptor(_) => ScanKind::MainchainAcceptor,
        }
    }

    pub fn roles(&self) -> RoleFlags {
        match *self {
            Self::All(roles) | Self::MainchainDonor(roles) | Self::MainchainAcceptor(roles) => {
                roles
            }
        }
    }

    /// Directional modes are asymmetric, so both orders of a pair are examined.
    pub fn is_directional(&self) -> bool {
        !matches!(self, Self::All(_))
    }
}

impl Default for ScanMode {
    fn default() -> Self {
        Self::All(RoleFlags::ANY)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResidueSelection {
    #[default]
    All,
    /// Residues falling in any of the zones.
    Zones(Vec<ResidueZone>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub mode: ScanMode,
    pub criteria: HBondCriteria,
    pub selection: ResidueSelection,
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    mode: Option<ScanMode>,
    criteria: Option<HBondCriteria>,
    selection: Option<ResidueSelection>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: ScanMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn criteria(mut self, criteria: HBondCriteria) -> Self {
        self.criteria = Some(criteria);
        self
    }
    pub fn selection(mut self, selection: ResidueSelection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Builds the configuration. Criteria default to Baker & Hubbard and the
    /// selection to every residue; the mode must be given.
    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        let criteria = self.criteria.unwrap_or_default();
        criteria.validate()?;
        Ok(ScanConfig {
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
            criteria,
            selection: self.selection.unwrap_or_default(),
        })
    }
}
