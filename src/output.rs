use crate::airfoil::Airfoil;
use crate::config::GeneratorConfig;
use crate::errors::NacaError;
use crate::serialize::PointRow;
use itertools::Itertools;
use ncollide2d::na::{Point2, Point3};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::str::FromStr;

/// The pair of axes the section is drawn in. The chordwise coordinate always maps to the first
/// axis of the pair and the thickness coordinate to the second, while the remaining axis takes
/// the constant out of plane value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    Xy,
    Xz,
    Yz,
}

impl Plane {
    pub fn place(&self, u: f64, v: f64, w: f64) -> Point3<f64> {
        match self {
            Plane::Xy => Point3::new(u, v, w),
            Plane::Xz => Point3::new(u, w, v),
            Plane::Yz => Point3::new(w, u, v),
        }
    }
}

impl FromStr for Plane {
    type Err = NacaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xy" => Ok(Plane::Xy),
            "xz" => Ok(Plane::Xz),
            "yz" => Ok(Plane::Yz),
            _ => Err(NacaError::Config(format!(
                "unknown plane {:?}, expected one of xy, xz, yz",
                s
            ))),
        }
    }
}

impl Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Plane::Xy => "xy",
            Plane::Xz => "xz",
            Plane::Yz => "yz",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma delimited rows without a header
    Csv,

    /// An array of {x, y, z} objects
    Json,
}

impl FromStr for OutputFormat {
    type Err = NacaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(NacaError::Config(format!(
                "unknown output format {:?}, expected csv or json",
                s
            ))),
        }
    }
}

/// Orders the points of a normalized airfoil for emission, scales them to the chord length, and
/// places them in the configured plane
pub fn arrange(airfoil: &Airfoil, config: &GeneratorConfig) -> Vec<Point3<f64>> {
    airfoil
        .ordered_points(config.mean_camber_line)
        .iter()
        .map(|p: &Point2<f64>| {
            config
                .plane
                .place(p.x * config.chord, p.y * config.chord, config.z)
        })
        .collect()
}

pub fn write_csv<W: Write>(writer: &mut W, points: &[Point3<f64>]) -> std::io::Result<()> {
    for p in points.iter() {
        writeln!(writer, "{}", [p.x, p.y, p.z].iter().join(","))?;
    }

    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, points: &[Point3<f64>]) -> std::io::Result<()> {
    let rows: Vec<PointRow> = points.iter().map(|p| PointRow(*p)).collect();
    serde_json::to_writer(&mut *writer, &rows)?;
    writeln!(writer)
}

pub fn write_points<W: Write>(
    writer: &mut W,
    points: &[Point3<f64>],
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, points),
        OutputFormat::Json => write_json(writer, points),
    }
}
