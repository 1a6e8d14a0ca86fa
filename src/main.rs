use std::path::PathBuf;

use clap::Parser;

use coyote::{GameApp, PlaygroundConfig};

#[derive(Parser)]
#[command(name = "coyote", about = "Headless platformer locomotion playground")]
struct Args {
    /// Playground TOML (controller, camera and input script)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 8.0)]
    duration: f32,

    /// Render frames per second; physics always ticks at 60 Hz
    #[arg(long, default_value_t = 144.0)]
    frame_rate: f32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !(args.frame_rate.is_finite() && args.frame_rate > 0.0) {
        log::error!("frame rate must be a positive number, got {}", args.frame_rate);
        std::process::exit(1);
    }

    let config = match &args.config {
        Some(path) => match PlaygroundConfig::from_file(path) {
            Ok(config) => {
                if config.input.is_empty() {
                    log::warn!(
                        "{} has no [[input]] entries, using the built-in script",
                        path.display()
                    );
                }
                config
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => PlaygroundConfig::default(),
    };

    let mut app = match GameApp::playground(config, args.frame_rate) {
        Ok(app) => app,
        Err(e) => {
            log::error!("invalid controller configuration: {e}");
            std::process::exit(1);
        }
    };

    let summary = app.run(args.duration);
    println!(
        "{} frames, {} ticks | jumps {} (buffered {}), landings {}, takeoffs {}",
        summary.frames,
        summary.ticks,
        summary.stats.jumps,
        summary.stats.buffered,
        summary.stats.landings,
        summary.stats.takeoffs
    );
    println!(
        "final: {:?} at ({:.2}, {:.2}), gravity {:?}, facing {:.0}, camera x {:.2}",
        summary.final_state,
        summary.final_position.x,
        summary.final_position.y,
        summary.gravity_direction,
        summary.facing,
        summary.camera_x
    );
}
