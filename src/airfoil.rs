use ncollide2d::na::{Point2, Vector2};

pub mod generate;
pub mod naca5;

/// A point on the mean camber line along with the slope dy/dx of the line at that point
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CamberPoint {
    pub point: Point2<f64>,
    pub slope: f64,
}

impl CamberPoint {
    pub fn new(x: f64, y: f64, slope: f64) -> CamberPoint {
        CamberPoint {
            point: Point2::new(x, y),
            slope,
        }
    }

    /// The unit normal to the camber line, pointing towards the upper surface. For a slope angle
    /// theta this is (-sin(theta), cos(theta)).
    pub fn normal(&self) -> Vector2<f64> {
        let theta = self.slope.atan();
        Vector2::new(-theta.sin(), theta.cos())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CamberStation {
    pub camber: CamberPoint,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: CamberPoint, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }

    /// Build the station by offsetting the half thickness from the camber point perpendicular to
    /// the local camber line tangent, on both sides.
    pub fn from_offset(camber: CamberPoint, half_thickness: f64) -> CamberStation {
        let offset = camber.normal() * half_thickness;
        CamberStation::new(camber, camber.point + offset, camber.point - offset)
    }
}

/// The normalized (unit chord) geometry of a section, with the camber, upper, and lower points
/// all ordered from the leading edge to the trailing edge.
#[derive(Debug, Clone)]
pub struct Airfoil {
    pub camber: Vec<CamberPoint>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.camber.len()
    }

    pub fn is_empty(&self) -> bool {
        self.camber.is_empty()
    }

    pub fn mean_camber_line(&self) -> Vec<Point2<f64>> {
        self.camber.iter().map(|c| c.point).collect()
    }

    /// Walks the upper surface from the trailing edge to the leading edge, then the lower surface
    /// back to the trailing edge. The leading edge point is shared by both surfaces and appears
    /// once, while the trailing edge is left open, giving 2N - 1 points for N stations.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().cloned().collect();
        result.extend(self.lower.iter().skip(1));
        result
    }

    /// The ordered points to emit, either the mean camber line alone or the full section contour
    pub fn ordered_points(&self, mean_camber_line: bool) -> Vec<Point2<f64>> {
        if mean_camber_line {
            self.mean_camber_line()
        } else {
            self.to_outer_contour()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn flat_stations(n: usize) -> Vec<CamberStation> {
        (0..n)
            .map(|i| {
                let x = i as f64 / (n - 1) as f64;
                let t = if i == 0 { 0.0 } else { 0.1 };
                CamberStation::from_offset(CamberPoint::new(x, 0.0, 0.0), t)
            })
            .collect()
    }

    #[test]
    fn test_offset_flat() {
        let s = CamberStation::from_offset(CamberPoint::new(0.5, 0.0, 0.0), 0.06);
        assert_relative_eq!(0.5, s.upper.x, epsilon = 1e-12);
        assert_relative_eq!(0.06, s.upper.y, epsilon = 1e-12);
        assert_relative_eq!(0.5, s.lower.x, epsilon = 1e-12);
        assert_relative_eq!(-0.06, s.lower.y, epsilon = 1e-12);
    }

    #[test_case(1.0)]
    #[test_case(-0.5)]
    #[test_case(0.1)]
    fn test_offset_is_perpendicular(slope: f64) {
        let c = CamberPoint::new(0.3, 0.02, slope);
        let s = CamberStation::from_offset(c, 0.05);
        let tangent = Vector2::new(1.0, slope);

        assert_relative_eq!(0.0, (s.upper - c.point).dot(&tangent), epsilon = 1e-12);
        assert_relative_eq!(0.0, (s.lower - c.point).dot(&tangent), epsilon = 1e-12);
        assert_relative_eq!(0.05, (s.upper - c.point).norm(), epsilon = 1e-12);
        assert_relative_eq!(0.05, (s.lower - c.point).norm(), epsilon = 1e-12);
    }

    #[test]
    fn test_offset_matches_closed_form() {
        let (x, yc, slope, yt) = (0.25, 0.015, 0.2, 0.04);
        let theta = f64::atan(slope);
        let s = CamberStation::from_offset(CamberPoint::new(x, yc, slope), yt);

        assert_relative_eq!(x - yt * theta.sin(), s.upper.x, epsilon = 1e-12);
        assert_relative_eq!(yc + yt * theta.cos(), s.upper.y, epsilon = 1e-12);
        assert_relative_eq!(x + yt * theta.sin(), s.lower.x, epsilon = 1e-12);
        assert_relative_eq!(yc - yt * theta.cos(), s.lower.y, epsilon = 1e-12);
    }

    #[test]
    fn test_outer_contour_order() {
        let airfoil = Airfoil::from_stations(&flat_stations(4));
        let contour = airfoil.to_outer_contour();

        assert_eq!(7, contour.len());
        assert_eq!(airfoil.upper[3], contour[0]);
        assert_eq!(airfoil.upper[0], contour[3]);
        assert_eq!(airfoil.lower[1], contour[4]);
        assert_eq!(airfoil.lower[3], contour[6]);
        assert_ne!(contour[0], contour[6]);
    }

    #[test_case(3)]
    #[test_case(10)]
    fn test_ordered_point_counts(n: usize) {
        let airfoil = Airfoil::from_stations(&flat_stations(n));
        assert_eq!(n, airfoil.ordered_points(true).len());
        assert_eq!(2 * n - 1, airfoil.ordered_points(false).len());
    }
}
