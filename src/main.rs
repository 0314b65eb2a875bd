#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

use std::io::Write;

use anyhow::Result;
use serde::Deserialize;
use structopt::StructOpt;

use streamline::svg::SVG;
use streamline::{streamline_collection, DrawSegments, StreamlineStyle};

#[derive(StructOpt)]
#[structopt(about = "Render a particle's trajectory as a tapering, color graded svg line")]
struct Args {
    /// A csv file with one `x,y` position per row, ordered by time. Without it, a spiral is drawn.
    #[structopt(long)]
    input: Option<String>,
    /// Where to write the svg. Defaults to stdout.
    #[structopt(long)]
    output: Option<String>,
    /// Color at the start of the trajectory
    #[structopt(long, default_value = "black")]
    color1: String,
    /// Color at the end of the trajectory
    #[structopt(long, default_value = "white")]
    color2: String,
    /// Higher values stay close to color1 for longer
    #[structopt(long, default_value = "2.0")]
    color_power: f64,
    /// Width at the start of the trajectory
    #[structopt(long, default_value = "5.0")]
    linewidth: f64,
    /// Svg units per data unit. Widths are given in svg units.
    #[structopt(long, default_value = "20.0")]
    scale: f64,
    /// Margin around the trajectory in svg units
    #[structopt(long, default_value = "10.0")]
    margin: f64,
    /// Number of points in the spiral drawn without --input
    #[structopt(long, default_value = "200")]
    demo_points: usize,
}

#[derive(Deserialize)]
struct Position {
    x: f64,
    y: f64,
}

impl Args {
    fn load(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        match &self.input {
            Some(path) => read_positions(path),
            None => {
                if self.demo_points < 2 {
                    bail!("--demo-points needs to be at least 2");
                }
                Ok(spiral(self.demo_points))
            }
        }
    }
}

fn read_positions(path: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let file = fs_err::File::open(path)?;
    for rec in csv::Reader::from_reader(file).deserialize() {
        let pos: Position = rec?;
        x.push(pos.x);
        y.push(pos.y);
    }
    info!("Read {} positions from {}", x.len(), path);
    Ok((x, y))
}

/// Two turns of an outwards spiral
fn spiral(n: usize) -> (Vec<f64>, Vec<f64>) {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            let angle = t * 4.0 * std::f64::consts::PI;
            let radius = 2.0 + 8.0 * t;
            (radius * angle.cos(), radius * angle.sin())
        })
        .unzip()
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::from_args();
    let style = StreamlineStyle::from_specs(
        &args.color1,
        &args.color2,
        args.color_power,
        args.linewidth,
    )?;
    let (x, y) = args.load()?;

    // svg's y axis points down
    let x: Vec<f64> = x.into_iter().map(|x| x * args.scale).collect();
    let y: Vec<f64> = y.into_iter().map(|y| -y * args.scale).collect();

    let collection = streamline_collection(&x, &y, &style)?;
    let mut svg = SVG::new((0.0, 0.0, 1.0, 1.0));
    svg.fit_to(collection.data_limits(), args.margin);
    svg.add_collection(collection);

    match &args.output {
        Some(path) => {
            fs_err::write(path, svg.to_string())?;
            info!("Wrote {}", path);
        }
        None => {
            std::io::stdout().write_all(svg.to_string().as_bytes())?;
        }
    }
    Ok(())
}
