//! Print readings across a Fahrenheit range
//!
//! Run with: cargo run --example reading_table -- [min] [max] [step] [--raw]

use std::error::Error;

use temp_converter::{build_reading, Formula, Scale};

type DemoResult<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> DemoResult<()> {
    // Initialize logging (RUST_LOG=trace shows each reading as it is built)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let rounding_enabled = match args.iter().position(|arg| arg == "--raw") {
        Some(index) => {
            args.remove(index);
            false
        }
        None => true,
    };

    let min = parse_arg(&args, 0, "min", -40.0)?;
    let max = parse_arg(&args, 1, "max", 212.0)?;
    let step = parse_arg(&args, 2, "step", 20.0)?;
    if step <= 0.0 {
        return Err(format!("step must be positive, got {}", step).into());
    }

    // Names are resolved once, before any conversion runs
    let to_celsius: Formula = "FahrenheitToCelsius".parse()?;
    println!("Temperature Table ({})", to_celsius);
    println!("=================\n");

    for scale in Scale::ALL {
        print!("{:>14}", format!("{} ({})", scale.name(), scale.symbol()));
    }
    println!();

    let mut fahrenheit = min;
    while fahrenheit <= max {
        let reading = build_reading(fahrenheit, rounding_enabled);
        for (_, value) in reading.iter() {
            print!("{:>14}", value);
        }
        println!();
        fahrenheit += step;
    }

    Ok(())
}

fn parse_arg(args: &[String], index: usize, name: &str, default: f64) -> DemoResult<f64> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid {} value: {}", name, raw).into()),
        None => Ok(default),
    }
}
