//! Shared types module - pure data structures and configuration constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable
//! in any context (model, event bus, terminal rendering, view).
//!
//! # Arena & View Dimensions
//!
//! The arena is a square in floating-point "arena space"; the view maps it
//! onto a fixed grid of terminal cells:
//!
//! - **Arena**: 800.0 x 800.0 arena units
//! - **View**: 96 columns x 48 rows
//!
//! Terminal glyphs are roughly half as wide as they are tall, so a square
//! arena mapped onto a `2h x h` cell grid renders with square proportions
//! (`VIEW_COLS == 2 * VIEW_ROWS`). Circles drawn in arena space stay
//! visually circular.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Render ticks per second, and the frames-to-seconds divisor |
//! | `GAME_LENGTH_FRAMES` | 3600 | Full game length (60 seconds) |
//! | `CHANGE_INTERVAL_FRAMES` | 600 | Interval between arena changes (10 seconds) |
//!
//! # Examples
//!
//! ```
//! use arena_duel_types::{Phase, PlayerSnapshot, player_color, PLAYER_COLORS};
//!
//! let p = PlayerSnapshot::new(1, (200.0, 400.0), 3);
//! assert_eq!(p.id, 1);
//! assert_eq!(player_color(p.id), PLAYER_COLORS[1]);
//!
//! // Out-of-table ids wrap around instead of panicking.
//! assert_eq!(player_color(2), PLAYER_COLORS[0]);
//!
//! assert_eq!(Phase::Paused.as_str(), "paused");
//! ```

/// Arena width in arena units.
pub const ARENA_WIDTH: f32 = 800.0;

/// Arena height in arena units.
pub const ARENA_HEIGHT: f32 = 800.0;

/// View width in terminal columns.
pub const VIEW_COLS: u16 = 96;

/// View height in terminal rows.
pub const VIEW_ROWS: u16 = 48;

/// Window caption shown in the terminal title bar.
pub const WINDOW_CAPTION: &str = "Arena Duel";

/// Render ticks per second. Countdown frame counts divide by this to
/// display seconds.
pub const FPS: u32 = 60;

/// Full game length in frames (60 seconds at 60 FPS).
pub const GAME_LENGTH_FRAMES: u32 = 60 * FPS;

/// Interval between arena changes in frames (10 seconds at 60 FPS).
pub const CHANGE_INTERVAL_FRAMES: u32 = 10 * FPS;

/// Number of players in a game. The model always supplies exactly this
/// many.
pub const MAX_PLAYERS: usize = 2;

/// Player circle radius in arena units.
pub const PLAYER_RADIUS: f32 = 30.0;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background fill used as the clear color.
pub const BACKGROUND_COLOR: Rgb = Rgb::new(16, 16, 24);

/// Overlay text color (timers, scores, hints).
pub const TEXT_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Menu prompt color, dimmer than gameplay overlays.
pub const MENU_TEXT_COLOR: Rgb = Rgb::new(224, 224, 224);

/// Per-player-identifier color table, indexed by `PlayerSnapshot::id`.
pub const PLAYER_COLORS: [Rgb; MAX_PLAYERS] = [Rgb::new(80, 160, 255), Rgb::new(255, 99, 71)];

/// Color for a player identifier. Ids beyond the table wrap by modulo.
pub fn player_color(id: u8) -> Rgb {
    PLAYER_COLORS[id as usize % PLAYER_COLORS.len()]
}

/// The game's current high-level mode, authoritative in the model.
///
/// Transitions happen in the model and are observed, never driven, by the
/// view. The enum is exhaustive: phase dispatch matches on every variant,
/// so adding a phase without a render routine is a build error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting on the start prompt.
    Menu,
    /// Active play.
    Playing,
    /// Play suspended; the last play frame stays visible.
    Paused,
    /// Game over, final scores shown.
    Ended,
}

impl Phase {
    /// Lowercase name, for captions and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::Ended => "ended",
        }
    }
}

/// Notifications delivered by the event bus.
///
/// The bus delivers only these variants, so there is no "unrecognized
/// event" case for listeners to tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game session was instantiated. Delivered once per session.
    Initialize,
    /// One render frame is due. Delivered once per frame.
    Tick,
}

/// Read-only view of one player for the duration of a single frame.
///
/// Owned by the model and rebuilt every tick; the view never caches these
/// across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    /// Small integer identifier, stable for the game's duration.
    pub id: u8,
    /// Position in arena space.
    pub position: (f32, f32),
    /// Non-negative score.
    pub score: u32,
}

impl PlayerSnapshot {
    pub fn new(id: u8, position: (f32, f32), score: u32) -> Self {
        Self {
            id,
            position,
            score,
        }
    }
}
