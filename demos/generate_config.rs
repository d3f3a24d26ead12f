//! Generate a default analysis configuration file
//!
//! Creates a JSON config with all default parameters

use std::{env, path::Path, process};

use style_scan::AnalysisConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/style_scan.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = AnalysisConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Sampling:   {}x{} grid, {}px spacing",
                config.sampling.grid_size, config.sampling.grid_size, config.sampling.spacing
            );
            eprintln!("  Fallback:   {}", config.fallback_color);
            eprintln!(
                "  Confidence: {:.0}%-{:.0}%",
                config.confidence.min * 100.0,
                config.confidence.max * 100.0
            );
            eprintln!("  Max upload: {} MiB", config.max_upload_bytes / (1024 * 1024));
        }
        Err(e) => {
            eprintln!("Error saving configuration: {}", e);
            process::exit(1);
        }
    }
}
