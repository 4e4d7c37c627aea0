//! Point geometry for NACA 4-digit and 5-digit series aerofoil sections.
//!
//! A designation such as `2412` or `23012` is parsed into a [`Designation`], stations are placed
//! along the chord with a [`Spacing`], and the resulting section is ordered and placed in space
//! according to a [`GeneratorConfig`].

use ncollide2d::na::Point3;
use tracing::debug;

pub mod airfoil;
pub mod config;
pub mod designation;
pub mod errors;
pub mod output;
pub mod serialize;
pub mod spacing;

pub use config::GeneratorConfig;
pub use designation::Designation;
pub use errors::NacaError;
pub use spacing::Spacing;

/// Generate the ordered points of a section. Nothing is produced unless the designation and the
/// configuration are both valid.
pub fn generate_aerofoil(
    designation: &str,
    config: &GeneratorConfig,
) -> Result<Vec<Point3<f64>>, NacaError> {
    let config = config.clone().validate()?;
    let designation: Designation = designation.parse()?;
    let fractions = config.spacing.samples(config.samples)?;

    debug!(
        "generating {} stations with {} spacing",
        fractions.len(),
        config.spacing
    );
    let airfoil = designation.generate(&fractions)?;
    Ok(output::arrange(&airfoil, &config))
}
