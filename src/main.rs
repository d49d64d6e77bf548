/*

    Cast rays against boxes listed in a JSON probe file and
    print the closest hit of every ray as JSON on stdout.

    Usage: aabb-probe <filename>.json

    @date: Oct, 2025
*/

use std::{self, env, io::Write};
use tracing::{info, warn, error, debug};

use aabb_geom::json_parser::load_probe_file;
use aabb_geom::probe;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console (stderr, stdout carries the records)
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: &str = if args.len() == 1 {
        warn!("No arguments were provided, setting default probe path...");
        "./probe.json"
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading probe from {}...", json_path);
    let probe_file = load_probe_file(json_path).map_err(|e| {
        error!("Failed to load probe file: {}", e);
        Box::<dyn std::error::Error>::from(e)
    })?;
    debug!("Probe settings: {:?}", probe_file.settings);

    let records = probe::cast_all(&probe_file);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &records)?;
    writeln!(out)?;

    info!("Finished execution.");
    Ok(())
}
