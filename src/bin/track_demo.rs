use color_tracker::config::{load_config, RuntimeConfig};
use color_tracker::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use color_tracker::types::TrackReport;
use color_tracker::{LogRobot, SteeringCommand, Tracker};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: track_demo <config.json>".to_string())?;
    let config: RuntimeConfig = load_config(Path::new(&config_path))?;

    let mut frame = load_rgba_image(&config.input_path)?;
    let mut tracker = Tracker::new(config.tracker_params.clone(), LogRobot);
    let report = tracker.process(&mut frame, true);

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.annotated_out {
        save_rgba_image(&frame, path)?;
        println!("Annotated frame written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &TrackReport) {
    println!("Tracking summary");
    println!("  found: {}", report.found);
    println!("  latency_ms: {:.3}", report.latency_ms);
    if let Some(target) = &report.target {
        println!(
            "  target: center=({:.1}, {:.1}) radius={:.1}",
            target.center.x, target.center.y, target.radius
        );
    }
    match report.command {
        Some(SteeringCommand::Drive { speed, angle }) => {
            println!("  command: drive speed={speed:.0} angle={angle:.1}");
        }
        Some(SteeringCommand::Stop) => println!("  command: stop"),
        None => println!("  command: none (following disabled)"),
    }
}
