use anyhow::{Context, Result};
use clap::Parser;
use naca_rs::output::{write_points, OutputFormat, Plane};
use naca_rs::{generate_aerofoil, GeneratorConfig, Spacing};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "naca",
    version,
    about = "Create a NACA 4-series or 5-series aerofoil",
    after_help = "See: https://en.wikipedia.org/wiki/NACA_airfoil"
)]
struct Opts {
    /// 4 digits specifying MPTT (e.g. 0012) or 5 digits specifying LPQTT (e.g. 23012)
    designation: String,

    /// File to write to (default: stdout)
    outfile: Option<PathBuf>,

    /// Number of points on the camber line (3 to 999)
    #[arg(short = 'r', long = "resolution", value_name = "N", default_value_t = 100)]
    resolution: usize,

    /// Chord length
    #[arg(short = 'c', long = "chordlength", value_name = "C", default_value_t = 1.0)]
    chord: f64,

    /// Spacing: cos, 2cos or lin
    #[arg(short = 's', long, value_name = "TYPE", default_value = "cos")]
    spacing: String,

    /// Position of the aerofoil section along the out of plane axis
    #[arg(
        short = 'z',
        long = "zcoordinate",
        value_name = "Z",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    z: f64,

    /// Aerofoil plane: xy, xz or yz
    #[arg(short = 'p', long, value_name = "IJ", default_value = "xy")]
    plane: String,

    /// Only write the mean camber line
    #[arg(long = "meancamberline")]
    mean_camber_line: bool,

    /// Output format: csv or json
    #[arg(long, default_value = "csv")]
    format: String,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Opts {
    fn config(&self) -> Result<GeneratorConfig> {
        Ok(GeneratorConfig {
            samples: self.resolution,
            spacing: self.spacing.parse::<Spacing>()?,
            chord: self.chord,
            z: self.z,
            plane: self.plane.parse::<Plane>()?,
            mean_camber_line: self.mean_camber_line,
        }
        .validate()?)
    }
}

fn main() -> Result<()> {
    let opt = Opts::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if opt.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = opt.config()?;
    let format = opt.format.parse::<OutputFormat>()?;

    // Everything is computed before the sink is opened so errors never leave partial output
    let points = generate_aerofoil(&opt.designation, &config)?;

    match &opt.outfile {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed creating file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_points(&mut writer, &points, format)?;
            writer.flush()?;
            info!("wrote {} points to {}", points.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_points(&mut writer, &points, format)?;
            writer.flush()?;
        }
    }

    Ok(())
}
