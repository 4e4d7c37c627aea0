use crate::airfoil::generate::{AirfoilGenerator, Naca4Digit};
use crate::airfoil::naca5::{lookup_meanline, MeanlineEntry, Naca5Digit};
use crate::airfoil::Airfoil;
use crate::errors::NacaError;
use std::str::FromStr;
use tracing::debug;

/// The parameters of a 4-digit MPTT designation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Designation4 {
    /// Maximum camber as a fraction of the chord, 0.00 to 0.09
    pub max_camber: f64,

    /// Location of maximum camber as a fraction of the chord, 0.0 to 0.9
    pub camber_position: f64,

    /// Maximum thickness as a fraction of the chord, 0.00 to 0.99
    pub thickness: f64,
}

/// The parameters of a 5-digit LPQTT designation, resolved against the mean line table
#[derive(Debug, Clone, PartialEq)]
pub struct Designation5 {
    pub design_lift: f64,
    pub camber_position: f64,
    pub thickness: f64,
    pub meanline: &'static MeanlineEntry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Designation {
    Four(Designation4),
    Five(Designation5),
}

fn invalid(designation: &str, reason: &str) -> NacaError {
    NacaError::Validation {
        designation: designation.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for Designation {
    type Err = NacaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u32> = s
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid(s, "expected only the digits 0-9"))?;
        let thickness = |d: &[u32]| (d[0] * 10 + d[1]) as f64 / 100.0;

        let parsed = match digits.len() {
            4 => {
                let d = Designation4 {
                    max_camber: digits[0] as f64 / 100.0,
                    camber_position: digits[1] as f64 / 10.0,
                    thickness: thickness(&digits[2..]),
                };
                if d.max_camber > 0.0 && d.camber_position == 0.0 {
                    return Err(invalid(
                        s,
                        "a cambered section needs a non-zero max camber location",
                    ));
                }
                Designation::Four(d)
            }
            5 => Designation::Five(Designation5 {
                design_lift: digits[0] as f64 * 0.15,
                camber_position: digits[1] as f64 * 0.05,
                thickness: thickness(&digits[3..]),
                meanline: lookup_meanline(&s[0..3])?,
            }),
            _ => return Err(invalid(s, "expected 4 or 5 digits")),
        };

        debug!("parsed designation {}: {:?}", s, parsed);
        Ok(parsed)
    }
}

impl Designation {
    /// Generates the normalized section at the given chord fractions
    pub fn generate(&self, fractions: &[f64]) -> Result<Airfoil, NacaError> {
        match self {
            Designation::Four(d) => {
                Naca4Digit::new(d.thickness, d.max_camber, d.camber_position).generate(fractions)
            }
            Designation::Five(d) => {
                Naca5Digit::new(d.thickness, d.design_lift, d.camber_position, d.meanline)
                    .generate(fractions)
            }
        }
    }
}
