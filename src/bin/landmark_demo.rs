use field_vision::config::landmark_tool;
use field_vision::image::io::{read_json_file, write_json_file};
use field_vision::landmarks::{LandmarkExtractor, LandmarkInput, LandmarkModel};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = landmark_tool::load_config(Path::new(&config_path))?;

    let inputs: Vec<LandmarkInput> = read_json_file(&config.input)?;
    let mut extractor = LandmarkExtractor::new(config.landmarks);

    let start = Instant::now();
    let models: Vec<LandmarkModel> = inputs.iter().map(|i| extractor.process(i)).collect();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    write_json_file(&config.output.models_json, &models)?;

    for model in &models {
        println!(
            "t={:.3}s goals={} circles={} penalty_areas={} intersections={} unused_lines={}",
            model.timestamp.as_secs_f64(),
            model.goals.len(),
            model.center_circles.len(),
            model.penalty_areas.len(),
            model.intersections.len(),
            model.unused_lines.len()
        );
    }
    println!(
        "Processed {} cycles in {:.3} ms, saved models to {}",
        models.len(),
        elapsed_ms,
        config.output.models_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: landmark_demo <config.json>".to_string()
}
