use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drone_defense::compute::{advance_frame, init_state};
use drone_defense::display::{self, Viewport};
use drone_defense::entities::{GameState, GameStatus};
use drone_defense::feed::{NoFeed, NoiseFeed, VideoFeed};
use drone_defense::input::KeyTracker;

#[derive(Parser, Debug)]
#[command(name = "drone_defense")]
#[command(about = "Terminal arcade shooter: fly the drone, shoot the swarm, beat the boss")]
struct Cli {
    /// Seed for enemy placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Frame budget in milliseconds
    #[arg(long, default_value_t = 33)]
    frame_ms: u64,
    /// Picture-in-picture feed shown in the corner
    #[arg(long, value_enum, default_value_t = FeedKind::None)]
    feed: FeedKind,
    /// How long the GAME OVER screen stays up before exiting
    #[arg(long, default_value_t = 3000)]
    game_over_delay_ms: u64,
    /// Log level; logs go to stderr, so redirect it while playing
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FeedKind {
    None,
    Noise,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run ticks until the session reaches a terminal status.
///
/// Each tick drains every pending terminal event without blocking, advances
/// the simulation once, renders, then sleeps out the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut StdRng,
    feed: &mut dyn VideoFeed,
    cli: &Cli,
) -> Result<()> {
    let frame_budget = Duration::from_millis(cli.frame_ms);
    let started = Instant::now();
    let mut tracker = KeyTracker::new();
    let mut tick: u64 = 0;

    loop {
        let frame_start = Instant::now();
        tick += 1;

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            tracker.handle_event(&ev, tick);
        }

        let input = tracker.take_input(tick, started.elapsed().as_secs_f64());
        let report = advance_frame(state, &input, rng);
        tracker.set_paused(state.status == GameStatus::Paused);

        if report.boss_activated {
            info!("boss activated at frame {} (score {})", state.frame, state.score);
        }
        if report.boss_defeated {
            info!("boss defeated at frame {} (score {})", state.frame, state.score);
        }
        if report.enemies_escaped > 0 {
            debug!("{} enemy(ies) escaped, health {}", report.enemies_escaped, state.health);
        }
        if report.damage_taken > 0 {
            debug!("took {} damage, health {}", report.damage_taken, state.health);
        }

        let thumb = feed.read();
        if thumb.is_none() {
            // Nothing to show this frame; the inset is simply left out.
            log::trace!("no feed frame");
        }
        let (cols, rows) = terminal::size()?;
        display::render(out, state, Viewport::new(cols, rows), thumb.as_ref())?;

        match report.status {
            GameStatus::Quit => {
                info!("quit at frame {} with score {}", state.frame, state.score);
                return Ok(());
            }
            GameStatus::GameOver => {
                info!("game over at frame {} with score {}", state.frame, state.score);
                std::thread::sleep(Duration::from_millis(cli.game_over_delay_ms));
                return Ok(());
            }
            _ => {}
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(cli.log_level.filter())
        .init()
        .context("failed to initialise logger")?;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("starting: seed {seed}, frame budget {} ms", cli.frame_ms);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut feed: Box<dyn VideoFeed> = match cli.feed {
        FeedKind::None => Box::new(NoFeed),
        FeedKind::Noise => Box::new(NoiseFeed::new(seed)),
    };

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        // Below the default level: stderr would draw over the playfield.
        info!("keyboard enhancement unavailable; held keys expire on a timer");
    }

    let mut state = init_state();
    let result = game_loop(&mut out, &mut state, &mut rng, feed.as_mut(), &cli);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result?;
    println!("Final score: {}", state.score);
    Ok(())
}
