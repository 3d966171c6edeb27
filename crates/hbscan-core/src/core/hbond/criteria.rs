use crate::core::models::atom::Atom;
use crate::core::utils::geometry::{angle, distance_squared};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use thiserror::Error;

pub const DEFAULT_DONOR_ACCEPTOR_CUTOFF: f64 = 3.5;
pub const DEFAULT_HYDROGEN_ACCEPTOR_CUTOFF: f64 = 2.5;
pub const DEFAULT_MIN_ANGLE: f64 = FRAC_PI_2;
pub const DEFAULT_MAX_ANGLE: f64 = PI;
/// Stand-in for the antecedent-acceptor-hydrogen angle when the antecedent is unknown.
pub const DEFAULT_MISSING_ANTECEDENT_ANGLE: f64 = 3.0 * PI / 4.0;

/// Geometric thresholds of the Baker & Hubbard hydrogen-bond test.
///
/// Distances are in Angstroms and are strict upper bounds. Angles are in
/// radians and the `[min_angle, max_angle]` range is inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HBondCriteria {
    pub donor_acceptor_cutoff: f64,
    pub hydrogen_acceptor_cutoff: f64,
    pub min_angle: f64,
    pub max_angle: f64,
    pub missing_antecedent_angle: f64,
}

impl Default for HBondCriteria {
    fn default() -> Self {
        Self {
            donor_acceptor_cutoff: DEFAULT_DONOR_ACCEPTOR_CUTOFF,
            hydrogen_acceptor_cutoff: DEFAULT_HYDROGEN_ACCEPTOR_CUTOFF,
            min_angle: DEFAULT_MIN_ANGLE,
            max_angle: DEFAULT_MAX_ANGLE,
            missing_antecedent_angle: DEFAULT_MISSING_ANTECEDENT_ANGLE,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CriteriaError {
    #[error("Cutoff '{name}' must be a positive distance, got {value}")]
    NonPositiveCutoff { name: &'static str, value: f64 },
    #[error("Angle '{name}' must lie within [0, π], got {value}")]
    AngleOutOfRange { name: &'static str, value: f64 },
    #[error("Minimum angle {min} exceeds maximum angle {max}")]
    InvertedAngleRange { min: f64, max: f64 },
}

impl HBondCriteria {
    pub fn validate(&self) -> Result<(), CriteriaError> {
        for (name, value) in [
            ("donor-acceptor-cutoff", self.donor_acceptor_cutoff),
            ("hydrogen-acceptor-cutoff", self.hydrogen_acceptor_cutoff),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(CriteriaError::NonPositiveCutoff { name, value });
            }
        }
        for (name, value) in [
            ("min-angle", self.min_angle),
            ("max-angle", self.max_angle),
            ("missing-antecedent-angle", self.missing_antecedent_angle),
        ] {
            if !(0.0..=PI).contains(&value) {
                return Err(CriteriaError::AngleOutOfRange { name, value });
            }
        }
        if self.min_angle > self.max_angle {
            return Err(CriteriaError::InvertedAngleRange {
                min: self.min_angle,
                max: self.max_angle,
            });
        }
        Ok(())
    }

    #[inline]
    fn angle_in_range(&self, value: f64) -> bool {
        value >= self.min_angle && value <= self.max_angle
    }

    /// Decides whether the candidate tuple forms a hydrogen bond.
    ///
    /// Without a hydrogen the test falls back to the donor-acceptor distance and,
    /// when the antecedent is known, the antecedent-acceptor-donor angle. With a
    /// hydrogen it checks the hydrogen-acceptor distance, the donor-hydrogen-acceptor
    /// angle and the antecedent-acceptor-hydrogen angle, substituting
    /// `missing_antecedent_angle` for the last one when the antecedent is absent.
    ///
    /// A missing donor or acceptor is never a bond.
    pub fn is_valid(
        &self,
        hydrogen: Option<&Atom>,
        donor: Option<&Atom>,
        acceptor: Option<&Atom>,
        antecedent: Option<&Atom>,
    ) -> bool {
        let (Some(donor), Some(acceptor)) = (donor, acceptor) else {
            return false;
        };

        match hydrogen {
            None => {
                let cutoff = self.donor_acceptor_cutoff;
                if distance_squared(&donor.position, &acceptor.position) >= cutoff * cutoff {
                    return false;
                }
                antecedent.is_none_or(|antecedent| {
                    self.angle_in_range(angle(
                        &antecedent.position,
                        &acceptor.position,
                        &donor.position,
                    ))
                })
            }
            Some(hydrogen) => {
                let cutoff = self.hydrogen_acceptor_cutoff;
                if distance_squared(&hydrogen.position, &acceptor.position) >= cutoff * cutoff {
                    return false;
                }
                if !self.angle_in_range(angle(
                    &donor.position,
                    &hydrogen.position,
                    &acceptor.position,
                )) {
                    return false;
                }
                let antecedent_angle = antecedent.map_or(self.missing_antecedent_angle, |p| {
                    angle(&p.position, &acceptor.position, &hydrogen.position)
                });
                self.angle_in_range(antecedent_angle)
            }
        }
    }
}

/// [`HBondCriteria::is_valid`] with the default Baker & Hubbard thresholds.
pub fn is_valid_hbond(
    hydrogen: Option<&Atom>,
    donor: Option<&Atom>,
    acceptor: Option<&Atom>,
    antecedent: Option<&Atom>,
) -> bool {
    HBondCriteria::default().is_valid(hydrogen, donor, acceptor, antecedent)
}
