use crate::errors::NacaError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Largest supported station count. Far beyond this the cosine modes lose strict ordering near
/// the edges, where `1 - cos` stops resolving neighbouring angles.
pub const MAX_SAMPLES: usize = 999;

/// The strategy used to place stations along the chord.  Every mode starts at the leading edge
/// (x = 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    /// Half-cosine over [0, pi], clustering stations at both the leading and trailing edges
    Cosine,

    /// Cosine over [0, pi/2], clustering stations at the leading edge only
    DoubleCosine,

    Linear,
}

impl Spacing {
    /// Generate `count` chord fractions in [0, 1], strictly increasing.
    pub fn samples(&self, count: usize) -> Result<Vec<f64>, NacaError> {
        if !(3..=MAX_SAMPLES).contains(&count) {
            return Err(NacaError::Config(format!(
                "sample count must be between 3 and {}, got {}",
                MAX_SAMPLES, count
            )));
        }

        let last = (count - 1) as f64;
        let fractions = (0..count).map(|i| i as f64 / last);
        let samples = match self {
            Spacing::Cosine => fractions.map(|f| (1.0 - (f * PI).cos()) / 2.0).collect(),
            Spacing::DoubleCosine => fractions.map(|f| 1.0 - (f * FRAC_PI_2).cos()).collect(),
            Spacing::Linear => fractions.collect(),
        };

        Ok(samples)
    }
}

impl FromStr for Spacing {
    type Err = NacaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cos" | "cosine" => Ok(Spacing::Cosine),
            "2cos" | "double-cosine" => Ok(Spacing::DoubleCosine),
            "lin" | "linear" => Ok(Spacing::Linear),
            _ => Err(NacaError::Config(format!(
                "unknown spacing {:?}, expected one of cos, 2cos, lin",
                s
            ))),
        }
    }
}

impl Display for Spacing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Spacing::Cosine => "cos",
            Spacing::DoubleCosine => "2cos",
            Spacing::Linear => "lin",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(Spacing::Cosine, 3)]
    #[test_case(Spacing::Cosine, 100)]
    #[test_case(Spacing::DoubleCosine, 3)]
    #[test_case(Spacing::DoubleCosine, 57)]
    #[test_case(Spacing::Linear, 3)]
    #[test_case(Spacing::Linear, MAX_SAMPLES)]
    #[test_case(Spacing::Cosine, MAX_SAMPLES)]
    #[test_case(Spacing::DoubleCosine, MAX_SAMPLES)]
    fn test_samples_increasing_from_zero(spacing: Spacing, n: usize) {
        let x = spacing.samples(n).unwrap();

        assert_eq!(n, x.len());
        assert_eq!(0.0, x[0]);
        assert!(x.windows(2).all(|w| w[0] < w[1]));
        assert!(x.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test_case(Spacing::Cosine)]
    #[test_case(Spacing::Linear)]
    fn test_samples_end_at_trailing_edge(spacing: Spacing) {
        for n in 3..200 {
            let x = spacing.samples(n).unwrap();
            assert_eq!(1.0, *x.last().unwrap());
        }
    }

    #[test]
    fn test_double_cosine_ends_near_one() {
        let x = Spacing::DoubleCosine.samples(10).unwrap();
        assert_relative_eq!(1.0, *x.last().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_linear_three() {
        let x = Spacing::Linear.samples(3).unwrap();
        assert_eq!(vec![0.0, 0.5, 1.0], x);
    }

    #[test]
    fn test_cosine_clusters_at_edges() {
        let x = Spacing::Cosine.samples(21).unwrap();
        let first = x[1] - x[0];
        let middle = x[11] - x[10];
        let last = x[20] - x[19];
        assert!(first < middle);
        assert!(last < middle);
        assert_relative_eq!(first, last, epsilon = 1e-12);
    }

    #[test]
    fn test_double_cosine_clusters_at_leading_edge() {
        let x = Spacing::DoubleCosine.samples(21).unwrap();
        assert!(x[1] - x[0] < x[20] - x[19]);
    }

    #[test_case(0)]
    #[test_case(2)]
    #[test_case(MAX_SAMPLES + 1)]
    fn test_sample_count_out_of_range(n: usize) {
        assert!(matches!(
            Spacing::Linear.samples(n),
            Err(NacaError::Config(_))
        ));
    }

    #[test_case("cos", Spacing::Cosine)]
    #[test_case("cosine", Spacing::Cosine)]
    #[test_case("2cos", Spacing::DoubleCosine)]
    #[test_case("double-cosine", Spacing::DoubleCosine)]
    #[test_case("lin", Spacing::Linear)]
    fn test_parse(s: &str, e: Spacing) {
        assert_eq!(e, s.parse().unwrap());
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "log".parse::<Spacing>(),
            Err(NacaError::Config(_))
        ));
    }
}
