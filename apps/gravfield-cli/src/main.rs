mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glam::Vec3;
use gravfield_common::Pose;
use gravfield_input::{Controls, Key};
use gravfield_kernel::{G, MASS_MAX, PlayerEvent, Simulation};
use gravfield_render::{DebugTextSink, PoseSink, Projection};
use gravfield_tools::{FieldInspector, PlayerInspector};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

#[derive(Parser)]
#[command(name = "gravfield-cli", about = "Headless runner for the gravfield simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file with scene, player and look settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the scene seed
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, constants and crate info
    Info,
    /// Fly the player through a seeded scene
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016667")]
        dt: f32,
        /// Keys held down, as comma-separated codes (KeyW,KeyA,KeyS,KeyD,Space,ShiftLeft)
        #[arg(short, long, value_delimiter = ',', default_value = "KeyW")]
        keys: Vec<String>,
        /// Release the held keys after this many frames
        #[arg(long)]
        release_after: Option<u64>,
        /// Horizontal mouse motion per frame, in pixels
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        mouse_dx: f32,
        /// Vertical mouse motion per frame, in pixels
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        mouse_dy: f32,
        /// Print every Nth frame
        #[arg(long, default_value = "30")]
        every: u64,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Sample gravity and the nearest node at a point
    Probe {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },
    /// Summarize the scene's field
    Inspect,
}

#[derive(Serialize)]
struct RunReport {
    frames: u64,
    landings: usize,
    jumps: usize,
    grounded: bool,
    pose: Pose,
    view_projection: [f32; 16],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.scene.seed = seed;
    }

    match cli.command {
        Commands::Info => {
            println!("gravfield-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: G={G} mass_max={MASS_MAX}");
            println!("render: {}", gravfield_render::crate_info());
            println!("tools: {}", gravfield_tools::crate_info());
            println!(
                "scene: size={} masses={} seed={}",
                config.scene.field_size, config.scene.mass_count, config.scene.seed
            );
        }
        Commands::Run {
            frames,
            dt,
            keys,
            release_after,
            mouse_dx,
            mouse_dy,
            every,
            json,
        } => {
            let mut sim = Simulation::from_scene(&config.scene, config.player)?;
            let mut controls = Controls::new(config.look);
            controls.lock();

            let held: Vec<Key> = keys
                .iter()
                .map(|code| {
                    let key = Key::from_code(code.trim());
                    if key == Key::Other {
                        tracing::warn!(code = %code, "unbound key ignored");
                    }
                    key
                })
                .collect();
            for &key in &held {
                controls.key_down(key);
            }

            let mut sink = DebugTextSink::every(every);
            let (mut landings, mut jumps) = (0, 0);
            for frame in 1..=frames {
                if release_after == Some(frame) {
                    for &key in &held {
                        controls.key_up(key);
                    }
                    tracing::info!(frame, "keys released");
                }
                controls.mouse_move(mouse_dx, mouse_dy);

                if controls.is_locked() {
                    match sim.step(dt, &controls.state(), controls.quaternion()) {
                        Some(PlayerEvent::Landed { node }) => {
                            landings += 1;
                            tracing::info!(frame, node = ?node, "landed");
                        }
                        Some(PlayerEvent::Jumped) => {
                            jumps += 1;
                            tracing::info!(frame, "jumped");
                        }
                        None => {}
                    }
                }
                controls.clear_clicks();
                sink.present(sim.frame(), sim.pose());
            }

            if json {
                let report = RunReport {
                    frames: sim.frame(),
                    landings,
                    jumps,
                    grounded: sim.player().is_grounded(),
                    pose: *sim.pose(),
                    view_projection: Projection::default()
                        .view_projection(sim.pose())
                        .to_cols_array(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", sink.output());
                println!("{}", PlayerInspector::summary(sim.player()));
                println!("landings={landings} jumps={jumps}");
            }
        }
        Commands::Probe { x, y, z } => {
            let field = config.scene.build()?;
            println!("{}", FieldInspector::probe(&field, Vec3::new(x, y, z)));
        }
        Commands::Inspect => {
            let field = config.scene.build()?;
            println!("{}", FieldInspector::summary(&field));
            for (i, node) in field.nodes().iter().enumerate() {
                let p = node.position;
                println!(
                    "  [{i:>2}] pos=({:.0}, {:.0}, {:.0}) mass={:.2}",
                    p.x, p.y, p.z, node.mass
                );
            }
        }
    }

    Ok(())
}
