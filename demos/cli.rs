//! Command-line interface for style_scan
//!
//! Analyzes an outfit photo, or a hex color given with `--hex`, and prints
//! the detected color, style and recommendations.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use style_scan::{AnalysisConfig, AnalysisError, RgbColor, StyleAnalysis, StyleAnalyzer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Detect the dominant color and style of an outfit photo", long_about = None)]
struct Args {
    /// Image to analyze (JPEG, PNG, GIF, WebP, TIFF or BMP)
    #[arg(value_name = "IMAGE", required_unless_present = "hex")]
    image: Option<PathBuf>,

    /// Analyze a hex color instead of an image
    #[arg(long, value_name = "COLOR", conflicts_with = "image")]
    hex: Option<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for reproducible style picks
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(result) => {
            if args.json {
                match result.to_json() {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    }
                }
            } else {
                print_result(&result);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            eprintln!("  {e}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<StyleAnalysis, AnalysisError> {
    let config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut analyzer = StyleAnalyzer::new(config, rng)?;

    match (&args.hex, &args.image) {
        (Some(hex), _) => Ok(analyzer.analyze_color(RgbColor::from_hex(hex)?)),
        (None, Some(path)) => analyzer.analyze_image(path),
        (None, None) => Err(AnalysisError::invalid_input("image", "missing")),
    }
}

fn print_result(result: &StyleAnalysis) {
    println!("Detected color: {} ({})", result.detected_color, result.display_color_name());
    println!("Style:          {} ({:.0}% match)", result.style, result.confidence * 100.0);
    println!("                {}", result.style.profile().description);
    println!();

    println!("Recommendations:");
    for rec in &result.recommendations {
        println!("  {:<10} {}", format!("{:?}", rec.kind), rec.name);
        println!("  {:<10} {}", "", rec.description);
    }
    println!();

    println!("Perfect for:    {}", result.occasions.join(", "));
    println!("Pairs with:     {}", result.matching_items.join(", "));
    println!(
        "Harmony:        {}",
        result.harmony.to_hex().join("  ")
    );
    println!("Accessories:    {}", result.style.accessory_tone());
}
