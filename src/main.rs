use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, error};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

mod canvas;
mod color;
mod error;
mod hsv;
mod log_setup;
mod range;
mod sample;
mod starfield;

use crate::canvas::PngCanvas;
use crate::starfield::StarField;

// CLI arg definition
#[derive(Parser, Debug)]
#[command(about = "Paints a random night sky into a PNG")]
struct Args {
    #[arg(default_value("sky.png"))]
    output: PathBuf,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Stars per pixel
    #[arg(short, long, default_value_t = starfield::DEFAULT_STAR_DENSITY)]
    density: f64,

    #[arg(long, default_value_t = sample::DEFAULT_RADIUS_MIN)]
    r_min: f64,

    #[arg(long, default_value_t = sample::DEFAULT_RADIUS_MAX)]
    r_max: f64,

    /// Power law exponent of star radii, negative favours small stars
    #[arg(short, long, allow_negative_numbers(true), default_value_t = sample::DEFAULT_EXPONENT)]
    exponent: f64,

    /// Seed for a reproducible sky
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    #[arg(long, default_value("info"))]
    log_level: String,
}

fn run(args: Args) -> error::Result<()> {
    let field = StarField {
        star_density: args.density,
        radius_min: args.r_min,
        radius_max: args.r_max,
        exponent: args.exponent,
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    debug!("seed: {:?}", args.seed);

    let mut canvas = PngCanvas::new(args.width, args.height, args.output);
    field.generate(&mut canvas, &mut rng)?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let _logger = match log_setup::setup_logging(&args.log_level) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("{e}");
        process::exit(1);
    }
}
