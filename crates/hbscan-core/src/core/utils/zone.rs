use crate::core::models::residue::{NO_INSERTION_CODE, ResidueLabel};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One end of a [`ResidueZone`]: residue number plus insertion code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneBound {
    pub residue_number: isize,
    pub insertion_code: char,
}

impl ZoneBound {
    pub fn new(residue_number: isize, insertion_code: char) -> Self {
        Self {
            residue_number,
            insertion_code,
        }
    }
}

/// An inclusive range of residues within a single chain.
///
/// Insertion codes order by their character code, with the blank code sorting
/// before any letter, so the zone `A10-A12` contains `A10`, `A10A`, `A11`, `A12`
/// but not `A12A`.
///
/// A residue on a bound's number is inside when its code is at or after the
/// start code or at or before the end code. When both bounds share a number,
/// either condition is enough, so `A52A-A52C` also admits `A52` and `A52D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueZone {
    pub chain: char,
    pub start: ZoneBound,
    pub end: ZoneBound,
}

impl ResidueZone {
    pub fn new(chain: char, start: ZoneBound, end: ZoneBound) -> Self {
        Self { chain, start, end }
    }

    /// A zone on one residue number, starting and ending at the blank code.
    pub fn single(chain: char, residue_number: isize) -> Self {
        let bound = ZoneBound::new(residue_number, NO_INSERTION_CODE);
        Self::new(chain, bound, bound)
    }

    pub fn contains(&self, chain: char, residue_number: isize, insertion_code: char) -> bool {
        if chain != self.chain {
            return false;
        }

        let (start, end) = (self.start, self.end);

        if residue_number > start.residue_number && residue_number < end.residue_number {
            return true;
        }

        if residue_number == start.residue_number
            && residue_number == end.residue_number
            && insertion_code >= start.insertion_code
            && insertion_code <= end.insertion_code
        {
            return true;
        }

        (residue_number == start.residue_number && insertion_code >= start.insertion_code)
            || (residue_number == end.residue_number && insertion_code <= end.insertion_code)
    }
}

impl fmt::Display for ResidueZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = ResidueLabel {
            residue_number: self.start.residue_number,
            insertion_code: self.start.insertion_code,
        };
        let end = ResidueLabel {
            residue_number: self.end.residue_number,
            insertion_code: self.end.insertion_code,
        };
        if self.start == self.end {
            write!(f, "{}{}", self.chain, start)
        } else {
            write!(f, "{}{}-{}{}", self.chain, start, self.chain, end)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneParseError {
    #[error("Residue specification is empty")]
    Empty,
    #[error("Missing residue number in '{0}'")]
    MissingNumber(String),
    #[error("Unexpected trailing characters '{trailing}' in '{spec}'")]
    Trailing { spec: String, trailing: String },
    #[error("Zone '{0}' spans two chains")]
    ChainMismatch(String),
    #[error("Zone '{0}' ends before it starts")]
    Inverted(String),
}

/// A single residue specifier such as `A45` or `A45B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueSpec {
    pub chain: char,
    pub residue_number: isize,
    pub insertion_code: char,
}

impl ResidueSpec {
    /// Parses a specifier from the front of `input`, returning it and the rest.
    fn parse_prefix(input: &str) -> Result<(Self, &str), ZoneParseError> {
        let mut chars = input.char_indices();
        let (_, chain) = chars.next().ok_or(ZoneParseError::Empty)?;
        let body = &input[chain.len_utf8()..];

        let sign_len = usize::from(
            body.starts_with('-') && body[1..].starts_with(|c: char| c.is_ascii_digit()),
        );
        let digits_len = body[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(body.len() - sign_len);
        if digits_len == 0 {
            return Err(ZoneParseError::MissingNumber(input.to_string()));
        }
        let number_end = sign_len + digits_len;
        let residue_number = body[..number_end]
            .parse()
            .map_err(|_| ZoneParseError::MissingNumber(input.to_string()))?;

        let mut rest = &body[number_end..];
        let mut insertion_code = NO_INSERTION_CODE;
        if let Some(c) = rest.chars().next().filter(|c| c.is_ascii_alphabetic()) {
            insertion_code = c;
            rest = &rest[c.len_utf8()..];
        }

        Ok((
            Self {
                chain,
                residue_number,
                insertion_code,
            },
            rest,
        ))
    }
}

impl FromStr for ResidueSpec {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (spec, rest) = Self::parse_prefix(trimmed)?;
        if !rest.is_empty() {
            return Err(ZoneParseError::Trailing {
                spec: trimmed.to_string(),
                trailing: rest.to_string(),
            });
        }
        Ok(spec)
    }
}

impl fmt::Display for ResidueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = ResidueLabel {
            residue_number: self.residue_number,
            insertion_code: self.insertion_code,
        };
        write!(f, "{}{}", self.chain, label)
    }
}

impl FromStr for ResidueZone {
    type Err = ZoneParseError;

    /// Parses `A10-A20`, `A10B-A20C` or a single residue such as `A5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (first, rest) = ResidueSpec::parse_prefix(trimmed)?;
        let start = ZoneBound::new(first.residue_number, first.insertion_code);

        if rest.is_empty() {
            return Ok(Self::new(first.chain, start, start));
        }

        let Some(second) = rest.strip_prefix('-') else {
            return Err(ZoneParseError::Trailing {
                spec: trimmed.to_string(),
                trailing: rest.to_string(),
            });
        };
        let second: ResidueSpec = second.parse()?;
        if second.chain != first.chain {
            return Err(ZoneParseError::ChainMismatch(trimmed.to_string()));
        }
        let end = ZoneBound::new(second.residue_number, second.insertion_code);
        if (end.residue_number, end.insertion_code) < (start.residue_number, start.insertion_code)
        {
            return Err(ZoneParseError::Inverted(trimmed.to_string()));
        }
        Ok(Self::new(first.chain, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(s: &str) -> ResidueZone {
        s.parse().unwrap()
    }

    #[test]
    fn residue_inside_range_is_contained() {
        let z = zone("A10-A20");
        assert!(z.contains('A', 15, ' '));
        assert!(z.contains('A', 15, 'C'));
        assert!(z.contains('A', 10, ' '));
        assert!(z.contains('A', 20, ' '));
        assert!(!z.contains('A', 9, ' '));
        assert!(!z.contains('A', 21, ' '));
        assert!(!z.contains('B', 15, ' '));
    }

    #[test]
    fn insertion_codes_at_range_ends_are_ordered() {
        let z = zone("A10B-A20");
        assert!(!z.contains('A', 10, ' '));
        assert!(!z.contains('A', 10, 'A'));
        assert!(z.contains('A', 10, 'B'));
        assert!(z.contains('A', 10, 'C'));
        assert!(z.contains('A', 20, ' '));
        assert!(!z.contains('A', 20, 'A'));
    }

    #[test]
    fn single_number_range_falls_back_to_either_end() {
        let z = zone("A52A-A52C");
        assert!(z.contains('A', 52, 'A'));
        assert!(z.contains('A', 52, 'B'));
        assert!(z.contains('A', 52, 'C'));
        // Past the end code but not before the start code, and vice versa.
        assert!(z.contains('A', 52, 'D'));
        assert!(z.contains('A', 52, ' '));
        assert!(!z.contains('A', 51, 'B'));
        assert!(!z.contains('A', 53, ' '));
    }

    #[test]
    fn single_residue_zone() {
        let z = zone("B7");
        assert_eq!(z, ResidueZone::single('B', 7));
        assert!(z.contains('B', 7, ' '));
        assert!(z.contains('B', 7, 'A'));
        assert!(!z.contains('B', 8, ' '));
        assert_eq!(z.to_string(), "B7");
    }

    #[test]
    fn negative_numbers_parse() {
        let z = zone("A-5-A3");
        assert_eq!(z.start, ZoneBound::new(-5, ' '));
        assert_eq!(z.end, ZoneBound::new(3, ' '));
        assert!(z.contains('A', 0, ' '));
        assert_eq!(z.to_string(), "A-5-A3");
    }

    #[test]
    fn malformed_zones_are_rejected() {
        assert_eq!("".parse::<ResidueZone>(), Err(ZoneParseError::Empty));
        assert!(matches!(
            "AX".parse::<ResidueZone>(),
            Err(ZoneParseError::MissingNumber(_))
        ));
        assert!(matches!(
            "A10-B20".parse::<ResidueZone>(),
            Err(ZoneParseError::ChainMismatch(_))
        ));
        assert!(matches!(
            "A20-A10".parse::<ResidueZone>(),
            Err(ZoneParseError::Inverted(_))
        ));
        assert!(matches!(
            "A10AB".parse::<ResidueZone>(),
            Err(ZoneParseError::Trailing { .. })
        ));
    }

    #[test]
    fn residue_spec_round_trips() {
        let spec: ResidueSpec = "C112A".parse().unwrap();
        assert_eq!(
            spec,
            ResidueSpec {
                chain: 'C',
                residue_number: 112,
                insertion_code: 'A',
            }
        );
        assert_eq!(spec.to_string(), "C112A");
        assert!("C112-C113".parse::<ResidueSpec>().is_err());
    }
}
