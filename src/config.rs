use crate::errors::NacaError;
use crate::output::Plane;
use crate::spacing::{Spacing, MAX_SAMPLES};
use serde::{Deserialize, Serialize};

/// Everything besides the designation that controls what gets generated and how it is placed.
/// Built once up front and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of stations along the chord, 3 to 999
    pub samples: usize,
    pub spacing: Spacing,
    pub chord: f64,

    /// The constant out of plane coordinate
    pub z: f64,
    pub plane: Plane,

    /// Emit only the mean camber line instead of the section contour
    pub mean_camber_line: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            samples: 100,
            spacing: Spacing::Cosine,
            chord: 1.0,
            z: 0.0,
            plane: Plane::Xy,
            mean_camber_line: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(self) -> Result<Self, NacaError> {
        if !(3..=MAX_SAMPLES).contains(&self.samples) {
            return Err(NacaError::Config(format!(
                "sample count must be between 3 and {}, got {}",
                MAX_SAMPLES, self.samples
            )));
        }

        if !self.chord.is_finite() || self.chord <= 0.0 {
            return Err(NacaError::Config(format!(
                "chord length must be a positive number, got {}",
                self.chord
            )));
        }

        if !self.z.is_finite() {
            return Err(NacaError::Config(format!(
                "out of plane coordinate must be finite, got {}",
                self.z
            )));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(Ok(config.clone()), config.validate());
    }

    #[test_case(GeneratorConfig { samples: 2, ..Default::default() }; "too few samples")]
    #[test_case(GeneratorConfig { samples: 1000, ..Default::default() }; "too many samples")]
    #[test_case(GeneratorConfig { chord: 0.0, ..Default::default() }; "zero chord")]
    #[test_case(GeneratorConfig { chord: -1.0, ..Default::default() }; "negative chord")]
    #[test_case(GeneratorConfig { chord: f64::NAN, ..Default::default() }; "nan chord")]
    #[test_case(GeneratorConfig { z: f64::INFINITY, ..Default::default() }; "infinite z")]
    fn test_invalid(config: GeneratorConfig) {
        assert!(matches!(config.validate(), Err(NacaError::Config(_))));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"samples": 20, "spacing": "double-cosine", "plane": "yz"}"#)
                .unwrap();
        assert_eq!(20, config.samples);
        assert_eq!(Spacing::DoubleCosine, config.spacing);
        assert_eq!(Plane::Yz, config.plane);
        assert_eq!(1.0, config.chord);
    }
}
