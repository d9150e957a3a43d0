//! Terminal runner (default binary).
//!
//! Owns the frame clock: wires the demo model and the phase renderer onto
//! the event bus, then posts one tick per frame at the fixed rate. Key
//! handling here is driver plumbing only (quit and phase-transition keys);
//! the renderer itself never reads input.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arena_duel::events::EventBus;
use arena_duel::model::{DemoModel, GameModel};
use arena_duel::term::TerminalRenderer;
use arena_duel::types::{GameEvent, Phase, FPS, WINDOW_CAPTION};
use arena_duel::view::PhaseRenderer;

fn main() -> Result<()> {
    init_logging()?;
    info!("arena-duel starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;
    term.set_title(WINDOW_CAPTION)?;

    let mut bus = EventBus::new();
    PhaseRenderer::attach(&mut bus, term);

    let mut model = DemoModel::new();
    let result = run(&mut bus, &mut model);

    // The terminal is restored when the bus (and with it the renderer)
    // drops, including on the error path.
    if let Err(err) = &result {
        error!(?err, "exiting on render error");
    }
    result
}

fn run(bus: &mut EventBus, model: &mut DemoModel) -> Result<()> {
    bus.post(GameEvent::Initialize, &*model)?;

    let tick_duration = Duration::from_micros(1_000_000 / FPS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(&key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    handle_key(key.code, bus, model)?;
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed();
            last_tick = Instant::now();

            model.record_fps(1.0 / elapsed.as_secs_f64());
            model.advance();
            bus.post(GameEvent::Tick, &*model)?;
        }
    }
}

fn handle_key(code: KeyCode, bus: &mut EventBus, model: &mut DemoModel) -> Result<()> {
    match code {
        KeyCode::Char(' ') => {
            if matches!(model.phase(), Phase::Menu | Phase::Ended) {
                model.start();
                info!("new game session");
                bus.post(GameEvent::Initialize, &*model)?;
            }
        }
        KeyCode::Char('p') => model.pause(),
        KeyCode::Char('o') => model.resume(),
        _ => {}
    }
    Ok(())
}

fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn init_logging() -> Result<()> {
    // Never log to stdout/stderr: the alternate screen owns them.
    let file = std::fs::File::create("arena-duel.log")?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
