use ncollide2d::na::Point3;
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Point3<f64>")]
pub struct Point3f64 {
    x: f64,
    y: f64,
    z: f64,
}

/// A single emitted aerofoil point
#[derive(Serialize)]
pub struct PointRow(#[serde(with = "Point3f64")] pub Point3<f64>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_row_json() {
        let row = PointRow(Point3::new(1.0, -0.5, 2.0));
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(r#"{"x":1.0,"y":-0.5,"z":2.0}"#, json);
    }
}
