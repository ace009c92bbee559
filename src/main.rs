//! Headless chunkworld driver
//!
//! Walks a simulated observer across the world for a fixed number of ticks and
//! logs streaming and meshing activity.

use std::path::PathBuf;

use chunkworld::player::{BlockIntent, InputState};
use chunkworld::render::{DrawCall, HeadlessGeometry};
use chunkworld::utils::{SettingsError, TerrainKind, WorldSettings, load_settings, save_settings};
use chunkworld::{BlockType, Session, World};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Load world settings from a bincode file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings to a bincode file before running
    #[arg(long)]
    save_settings: Option<PathBuf>,

    /// Terrain seed (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Use flat terrain instead of noise
    #[arg(long, default_value_t = false)]
    flat: bool,

    /// Render distance in chunks
    #[arg(long)]
    render_distance: Option<i32>,

    /// Unload distance in chunks
    #[arg(long)]
    unload_distance: Option<i32>,

    /// Maximum chunks created per tick
    #[arg(long)]
    max_loads: Option<usize>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seconds per tick
    #[arg(long, default_value_t = 0.05)]
    dt: f32,
}

fn build_settings(args: &Args) -> Result<WorldSettings, SettingsError> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => WorldSettings {
            terrain: chunkworld::utils::TerrainSettings {
                kind: TerrainKind::Noise,
                ..Default::default()
            },
            ..Default::default()
        },
    };

    if let Some(seed) = args.seed {
        settings.terrain.seed = seed;
    } else if args.settings.is_none() {
        settings.terrain.seed = rand::random::<u32>();
    }
    if args.flat {
        settings.terrain.kind = TerrainKind::Flat;
    }
    if let Some(render_distance) = args.render_distance {
        settings.render_distance = render_distance;
    }
    if let Some(unload_distance) = args.unload_distance {
        settings.unload_distance = unload_distance;
    }
    if args.max_loads.is_some() {
        settings.max_loads_per_tick = args.max_loads;
    }

    settings.validate()?;
    Ok(settings)
}

fn run(args: Args) -> Result<(), SettingsError> {
    let settings = build_settings(&args)?;
    if let Some(path) = &args.save_settings {
        save_settings(path, &settings)?;
        tracing::info!("Saved settings to {}", path.display());
    }

    tracing::info!(
        "Terrain {:?} seed {}, render distance {}, unload distance {}",
        settings.terrain.kind,
        settings.terrain.seed,
        settings.render_distance,
        settings.unload_distance
    );

    let world = World::with_settings(settings, HeadlessGeometry::new())?;
    let mut session = Session::spawn_at_surface(world, 0, 0);

    let mut loaded = 0;
    let mut unloaded = 0;
    let mut rebuilt = 0;
    let mut edits = 0;

    for tick in 0..args.ticks {
        let intent = match tick % 120 {
            40 => Some(BlockIntent::Break),
            80 => Some(BlockIntent::Place(BlockType::Stone)),
            _ => None,
        };
        let input = InputState {
            forward: true,
            jump: tick % 30 == 0,
            intent,
            ..Default::default()
        };

        let report = session.tick(&input, args.dt);
        loaded += report.streaming.loaded;
        unloaded += report.streaming.unloaded;
        rebuilt += report.rebuilt;
        if report.edited.is_some() {
            edits += 1;
        }

        if tick % 100 == 0 {
            let p = session.player.position;
            tracing::debug!(
                "Tick {}: player ({:.1}, {:.1}, {:.1}), {} chunks resident",
                tick,
                p.x,
                p.y,
                p.z,
                session.world.chunk_count()
            );
        }
    }

    let mut calls: Vec<DrawCall> = Vec::new();
    session.render(&mut calls);
    let vertices: u64 = calls.iter().map(|c| c.vertex_count as u64).sum();

    tracing::info!(
        "Finished {} ticks: loaded {}, unloaded {}, rebuilt {}, edits {}",
        args.ticks,
        loaded,
        unloaded,
        rebuilt,
        edits
    );
    tracing::info!(
        "{} draw calls, {} vertices, {} live buffers",
        calls.len(),
        vertices,
        session.world.geometry().live_buffers()
    );
    Ok(())
}

fn main() -> Result<(), SettingsError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting chunkworld...");
    let args = Args::parse();
    run(args).inspect_err(|e| tracing::error!("{}", e))
}
