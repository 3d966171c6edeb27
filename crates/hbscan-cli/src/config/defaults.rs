use hbscan::core::hbond::{HBondCriteria, RoleFlags};
use hbscan::engine::config::ScanKind;

/// Values used when neither the command line nor the config file sets them.
pub struct DefaultsConfig {
    pub roles: RoleFlags,
    pub mode: ScanKind,
    pub criteria: HBondCriteria,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            roles: RoleFlags::ANY,
            mode: ScanKind::All,
            criteria: HBondCriteria::default(),
        }
    }
}
