use crate::airfoil::{Airfoil, CamberPoint, CamberStation};
use crate::errors::{check_fraction, NacaError};
use tracing::debug;

/// Evaluate the half thickness of the NACA 4-digit thickness distribution at chord fraction `x`
/// for a section whose maximum thickness is `t_max` (as a fraction of the chord).  The
/// distribution is zero at the leading edge and leaves a small finite thickness at the trailing
/// edge.
pub fn half_thickness(x: f64, t_max: f64) -> f64 {
    (t_max / 0.20)
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4))
}

/// An AirfoilGenerator is an entity which can generate the position and slope of the mean camber
/// line and the airfoil half thickness at fractions of the chord. This provides the information
/// necessary to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Return the camber line point and slope at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Result<CamberPoint, NacaError>;

    /// Return the half thickness of the airfoil with respect to the camber line at a fraction
    /// from 0.0 to 1.0
    fn thickness(&self, x: f64) -> Result<f64, NacaError>;

    fn station_at(&self, x: f64) -> Result<CamberStation, NacaError> {
        let camber = self.camber_line(x)?;
        let t = self.thickness(x)?;
        Ok(CamberStation::from_offset(camber, t))
    }

    /// Generates a station at each of the given chord fractions, which are expected to be
    /// ordered from the leading edge to the trailing edge
    fn generate(&self, fractions: &[f64]) -> Result<Airfoil, NacaError> {
        let stations = fractions
            .iter()
            .map(|x| self.station_at(*x))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("generated {} stations", stations.len());
        Ok(Airfoil::from_stations(&stations))
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Naca4Digit {
    t: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    pub fn new(t_max: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            m: max_camber,
            p: max_camber_chord,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.m == 0.0 && self.p == 0.0
    }

    /// Camber height and slope ahead of the max camber location
    fn forward(&self, x: f64) -> (f64, f64) {
        let k = self.m / self.p.powi(2);
        (k * (2.0 * self.p * x - x.powi(2)), 2.0 * k * (self.p - x))
    }

    /// Camber height and slope behind the max camber location
    fn aft(&self, x: f64) -> (f64, f64) {
        let k = self.m / (1.0 - self.p).powi(2);
        (
            k * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2)),
            2.0 * k * (self.p - x),
        )
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> Result<CamberPoint, NacaError> {
        let x = check_fraction(x)?;
        let (y, slope) = if self.is_symmetric() {
            (0.0, 0.0)
        } else if x <= self.p {
            self.forward(x)
        } else {
            self.aft(x)
        };

        Ok(CamberPoint::new(x, y, slope))
    }

    fn thickness(&self, x: f64) -> Result<f64, NacaError> {
        Ok(half_thickness(check_fraction(x)?, self.t))
    }
}
