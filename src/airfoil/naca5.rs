//! NACA 5-digit sections of the form LPQTT, where L sets the design lift coefficient, P the
//! location of maximum camber, Q selects a standard (0) or reflexed (1) mean line, and TT is the
//! maximum thickness.  The mean line coefficients come from NACA Reports 537 and 610.

use crate::airfoil::generate::{half_thickness, AirfoilGenerator};
use crate::airfoil::CamberPoint;
use crate::errors::{check_fraction, NacaError};
use itertools::Itertools;

/// The design lift coefficient the tabulated k1 values were computed for
pub const REFERENCE_LIFT: f64 = 0.3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeanlineKind {
    Standard,
    Reflex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeanlineEntry {
    /// The first three digits of the designation
    pub key: &'static str,
    pub r: f64,
    pub k1: f64,
    pub k2_over_k1: f64,
    pub kind: MeanlineKind,
    pub description: &'static str,
}

const fn entry(
    key: &'static str,
    r: f64,
    k1: f64,
    k2_over_k1: f64,
    kind: MeanlineKind,
    description: &'static str,
) -> MeanlineEntry {
    MeanlineEntry {
        key,
        r,
        k1,
        k2_over_k1,
        kind,
        description,
    }
}

/// Published mean line coefficients. Only the useful range was reported, and "211" is missing
/// from the report, so absent keys are genuinely unavailable.
pub const MEANLINE_TABLE: [MeanlineEntry; 9] = [
    entry("210", 0.0580, 361.4, 0.0, MeanlineKind::Standard, "05% standard"),
    entry("220", 0.1260, 51.64, 0.0, MeanlineKind::Standard, "10% standard"),
    entry("230", 0.2025, 15.957, 0.0, MeanlineKind::Standard, "15% standard"),
    entry("240", 0.2900, 6.643, 0.0, MeanlineKind::Standard, "20% standard"),
    entry("250", 0.3910, 3.230, 0.0, MeanlineKind::Standard, "25% standard"),
    entry("221", 0.1300, 51.990, 0.000764, MeanlineKind::Reflex, "10% reflex"),
    entry("231", 0.2170, 15.793, 0.00677, MeanlineKind::Reflex, "15% reflex"),
    entry("241", 0.3180, 6.520, 0.0303, MeanlineKind::Reflex, "20% reflex"),
    entry("251", 0.4410, 3.191, 0.1355, MeanlineKind::Reflex, "25% reflex"),
];

pub fn lookup_meanline(key: &str) -> Result<&'static MeanlineEntry, NacaError> {
    MEANLINE_TABLE.iter().find(|e| e.key == key).ok_or_else(|| {
        NacaError::Lookup(
            key.to_string(),
            MEANLINE_TABLE.iter().map(|e| e.key).join(", "),
        )
    })
}

/// The reflex k2/k1 ratio for a mean line with transition point `r` and max camber location `p`
pub fn reflex_ratio(r: f64, p: f64) -> f64 {
    (3.0 * (r - p).powi(2) - r.powi(3)) / (1.0 - r).powi(3)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Naca5Digit {
    t: f64,
    scale: f64,
    r: f64,
    k1: f64,
    k2_over_k1: f64,
    kind: MeanlineKind,
}

impl Naca5Digit {
    /// Create a new NACA 5 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness as a fraction of the chord, 0.12 for a 23012
    ///
    /// * `design_lift` - the design lift coefficient, 0.3 for a 23012
    ///
    /// * `max_camber_chord` - the location of max camber as a fraction of the chord, 0.15 for a
    /// 23012. Only used to derive k2/k1 for reflexed mean lines.
    ///
    /// * `meanline` - the tabulated coefficients for the first three digits
    pub fn new(
        t_max: f64,
        design_lift: f64,
        max_camber_chord: f64,
        meanline: &MeanlineEntry,
    ) -> Naca5Digit {
        let k2_over_k1 = match meanline.kind {
            MeanlineKind::Standard => meanline.k2_over_k1,
            MeanlineKind::Reflex => reflex_ratio(meanline.r, max_camber_chord),
        };

        Naca5Digit {
            t: t_max,
            scale: design_lift / REFERENCE_LIFT,
            r: meanline.r,
            k1: meanline.k1,
            k2_over_k1,
            kind: meanline.kind,
        }
    }

    pub fn k2_over_k1(&self) -> f64 {
        self.k2_over_k1
    }

    /// Camber height and slope at the reference lift coefficient
    fn mean_line(&self, x: f64) -> (f64, f64) {
        let (r, k1, k21) = (self.r, self.k1 / 6.0, self.k2_over_k1);
        let tail = (1.0 - r).powi(3);

        match (self.kind, x < r) {
            (MeanlineKind::Standard, true) => (
                k1 * (x.powi(3) - 3.0 * r * x.powi(2) + r.powi(2) * (3.0 - r) * x),
                k1 * (3.0 * x.powi(2) - 6.0 * r * x + r.powi(2) * (3.0 - r)),
            ),
            (MeanlineKind::Standard, false) => (k1 * r.powi(3) * (1.0 - x), -k1 * r.powi(3)),
            (MeanlineKind::Reflex, true) => (
                k1 * ((x - r).powi(3) - k21 * tail * x - r.powi(3) * x + r.powi(3)),
                k1 * (3.0 * (x - r).powi(2) - k21 * tail - r.powi(3)),
            ),
            (MeanlineKind::Reflex, false) => (
                k1 * (k21 * (x - r).powi(3) - k21 * tail - r.powi(3) * x + r.powi(3)),
                k1 * (3.0 * k21 * (x - r).powi(2) - r.powi(3)),
            ),
        }
    }
}

impl AirfoilGenerator for Naca5Digit {
    fn camber_line(&self, x: f64) -> Result<CamberPoint, NacaError> {
        let x = check_fraction(x)?;
        let (y, slope) = self.mean_line(x);
        Ok(CamberPoint::new(x, y * self.scale, slope * self.scale))
    }

    fn thickness(&self, x: f64) -> Result<f64, NacaError> {
        Ok(half_thickness(check_fraction(x)?, self.t))
    }
}
