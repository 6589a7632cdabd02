use field_vision::config::scan_tool;
use field_vision::image::io::{load_ycbcr422_image, save_luma_png, write_json_file};
use field_vision::landmarks::LandmarkInput;
use field_vision::services::FrameContext;
use field_vision::VisionCycle;
use std::env;
use std::path::Path;
use std::time::Duration;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = scan_tool::load_config(Path::new(&config_path))?;

    let frame = load_ycbcr422_image(&config.input)?;
    let silhouette = config.silhouette();
    let ctx = FrameContext {
        frame: &frame,
        valid: true,
        timestamp: Duration::ZERO,
        projection: &config.camera,
        field_color: &config.field_color,
        field_boundary: &config.field_boundary,
        silhouette: &silhouette,
    };

    let mut cycle = VisionCycle::new(config.vision);
    let report = cycle.process(&ctx, &LandmarkInput::default());

    save_luma_png(&frame, &config.output.luma_image)?;
    write_json_file(&config.output.report_json, &report)?;

    println!("{}", report.summary());
    println!(
        "Saved luma image to {} and report to {}",
        config.output.luma_image.display(),
        config.output.report_json.display()
    );
    for (i, p) in report.robots.positions.iter().enumerate() {
        println!("robot {i}: x={:.2} m y={:.2} m", p.x, p.y);
    }

    Ok(())
}

fn usage() -> String {
    "Usage: scan_segments <config.json>".to_string()
}
