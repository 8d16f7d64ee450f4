//! # Delve Headless Host
//!
//! Builds a session, drives it at a fixed frame rate with either the autopilot or
//! idle input, and prints a run summary.

use clap::Parser;
use delve::config::TARGET_FPS;
use delve::{
    Actor, Autopilot, DelveError, DelveResult, GameSession, InputIntents, PlayerClass, Position,
    SessionConfig, SessionEvent, SessionStatus,
};
use log::{info, warn};

/// Command line arguments for the headless host.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "Headless runner for the Delve dungeon-crawler core")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation, spawns and AI
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player class (warrior, archer, mage)
    #[arg(short, long, default_value = "warrior")]
    class: String,

    /// Maximum number of ticks to simulate
    #[arg(short, long, default_value_t = 3_600)]
    ticks: u64,

    /// Simulated frames per second
    #[arg(long, default_value_t = TARGET_FPS)]
    fps: u64,

    /// JSON session configuration file
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Let the autopilot walk to the portal instead of standing still
    #[arg(long)]
    autopilot: bool,

    /// Print the dungeon map when the run ends
    #[arg(long)]
    print_map: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> DelveResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting Delve v{}", delve::VERSION);

    let config = load_config(&args)?;
    let class: PlayerClass = args.class.parse()?;
    let mut session = GameSession::new(class, config)?;

    let status = run_session(&mut session, &args)?;

    print_summary(&session, status);
    if args.print_map {
        println!("{}", render_map(&session));
    }

    Ok(())
}

/// Installs `env_logger`; `RUST_LOG` overrides the command line level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

fn load_config(args: &Args) -> DelveResult<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            SessionConfig::from_json_file(path)?
        }
        None => SessionConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.generation.seed = seed;
    }
    Ok(config)
}

fn run_session(session: &mut GameSession, args: &Args) -> DelveResult<SessionStatus> {
    if args.fps == 0 {
        return Err(DelveError::InvalidConfig("fps must be positive".to_string()));
    }
    let delta = 1.0 / args.fps as f32;
    if args.autopilot && session.config().player.speed * delta > 4.0 {
        warn!("Frame step is coarse for the autopilot; it may stall against corridor walls");
    }

    let mut autopilot = Autopilot::new();
    let mut status = session.status();

    for _ in 0..args.ticks {
        session.reveal_around_player();

        let intents = if args.autopilot {
            autopilot.next_intents(session, delta)
        } else {
            InputIntents::idle()
        };

        status = session.tick(delta, &intents)?;
        for event in session.drain_events() {
            log_event(&event);
        }

        if let SessionStatus::Finished(_) = status {
            break;
        }
    }

    Ok(status)
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::EnemyHit {
            enemy,
            damage,
            remaining_health,
        } => info!("Hit {} for {} ({} left)", enemy, damage, remaining_health),
        SessionEvent::EnemyKilled { enemy } => info!("Defeated {}", enemy),
        SessionEvent::PlayerHit {
            damage,
            remaining_health,
            ..
        } => info!("Took {} damage ({} left)", damage, remaining_health),
        SessionEvent::PlayerDied => info!("You died"),
        SessionEvent::PortalDiscovered => info!("Portal sighted"),
        SessionEvent::LevelCompleted => info!("Level complete"),
        SessionEvent::Quit => info!("Quit"),
    }
}

fn print_summary(session: &GameSession, status: SessionStatus) {
    let stats = session.statistics();
    println!("Delve run summary");
    println!("  seed:             {}", session.config().seed());
    println!("  class:            {}", session.player().class);
    println!("  status:           {:?}", status);
    println!("  {}", session.health_text());
    println!("  ticks:            {}", stats.ticks);
    println!("  elapsed:          {:.2}s", stats.elapsed_seconds);
    println!("  attacks:          {}", stats.attacks_made);
    println!("  enemies defeated: {}", stats.enemies_defeated);
    println!("  damage dealt:     {}", stats.damage_dealt);
    println!("  damage taken:     {}", stats.damage_taken);
    println!("  distance:         {:.1}", stats.distance_travelled);
    println!(
        "  explored tiles:   {}/{}",
        session.explored().explored_count(),
        session.grid().width() * session.grid().height()
    );
}

/// ASCII map with `@` for the player, `e` for enemies and `O` for the portal.
///
/// Rows are printed top to bottom with +y up, matching the movement axes.
fn render_map(session: &GameSession) -> String {
    let grid = session.grid();
    let mut rows: Vec<Vec<char>> = grid
        .to_ascii()
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    let mut mark = |tile: Position, glyph: char| {
        if grid.in_bounds(tile) {
            rows[tile.y as usize][tile.x as usize] = glyph;
        }
    };

    mark(session.portal().tile(), 'O');
    for enemy in session.enemies() {
        mark(enemy.center().to_tile(), 'e');
    }
    mark(session.player_tile(), '@');

    rows.iter()
        .rev()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
