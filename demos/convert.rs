//! Command-line demo for hexhsl
//!
//! Converts one hex color to RGB and HSL and prints the result as JSON.

use std::{env, path::Path, process};

use hexhsl::{ColorConverter, ColorError, ConverterConfig, HexCase, Hsl, HuePolicy, Rgb};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct Report {
    input: String,
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    /// RGB recovered from the HSL value; may differ by a step or two
    hsl_roundtrip: Rgb,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config = ConverterConfig::default();
    let mut color_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("Error: --config needs a file path");
                    process::exit(1);
                };
                config = match ConverterConfig::from_json_file(Path::new(path)) {
                    Ok(config) => config,
                    Err(error) => {
                        eprintln!("Error: {}", error);
                        eprintln!("Suggestion: {}", error.user_message());
                        process::exit(1);
                    }
                };
                i += 1;
            }
            "--upper" => config.hex_case = HexCase::Upper,
            "--strict" => config.hue_policy = HuePolicy::Strict,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if color_arg.is_none() {
                    color_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple colors provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(input) = color_arg else {
        print_help(&args[0]);
        process::exit(1);
    };

    let converter = ColorConverter::with_config(config);
    match convert(&converter, &input) {
        Ok(report) => print_report(&report),
        Err(error) => {
            eprintln!("Conversion failed: {}", error);
            if error.is_input_error() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn convert(converter: &ColorConverter, input: &str) -> Result<Report, ColorError> {
    let rgb = converter.hex_to_rgb(input)?;
    let hsl = converter.rgb_to_hsl(rgb);
    Ok(Report {
        input: input.to_string(),
        hex: converter.rgb_to_hex(rgb)?,
        rgb,
        hsl,
        hsl_roundtrip: converter.hsl_to_rgb(hsl),
    })
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <hex_color>", program_name);
    eprintln!();
    eprintln!("Convert a hex color to RGB and HSL.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load converter settings from a JSON file");
    eprintln!("  --upper          Print hex digits in uppercase");
    eprintln!("  --strict         Do not wrap hues outside [0, 360)");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#3366cc'", program_name);
    eprintln!("  {} --upper ff8800", program_name);
}

fn print_report(report: &Report) {
    // JSON on stdout for programmatic use
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    eprintln!();
    eprintln!("Color Conversion Summary:");
    eprintln!("  Hex: {}", report.hex);
    eprintln!("  RGB: {}", report.rgb);
    eprintln!("  HSL: {}", report.hsl);
    if report.hsl_roundtrip != report.rgb {
        eprintln!("  Note: HSL maps back to {}", report.hsl_roundtrip);
    }
}
