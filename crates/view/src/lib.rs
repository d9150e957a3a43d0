//! PhaseRenderer: draws the state of the game model onto the screen.
//!
//! One listener on the event bus. Every tick it refreshes the FPS caption,
//! reads the model's current phase, and runs exactly one phase-specific
//! render routine. Each routine composes the frame in a fixed order
//! (background, entities, overlay text) and ends with the atomic present,
//! so a partially composed frame is never visible.
//!
//! Phase dispatch is an exhaustive match: a new [`Phase`] variant without a
//! render routine fails the build instead of silently not rendering.

use anyhow::Result;
use tracing::debug;

use arena_duel_events::{EventBus, Listener};
use arena_duel_model::GameModel;
use arena_duel_term::{CellStyle, Display, FrameBuffer};
use arena_duel_types::{
    player_color, GameEvent, Phase, PlayerSnapshot, Rgb, ARENA_HEIGHT, ARENA_WIDTH,
    BACKGROUND_COLOR, FPS, MAX_PLAYERS, MENU_TEXT_COLOR, PLAYER_RADIUS, TEXT_COLOR, VIEW_COLS,
    VIEW_ROWS, WINDOW_CAPTION,
};

/// Glyph used for player circle fills.
const PLAYER_CHAR: char = '█';

/// Renders the current frame for whatever phase the model is in.
///
/// Owns the presentation surface for the process lifetime. The only state
/// carried across ticks is the surface itself, which is what lets the
/// paused frame keep the last play frame visible underneath the resume
/// hint.
pub struct PhaseRenderer<D: Display> {
    display: D,
    surface: FrameBuffer,
}

impl<D: Display> PhaseRenderer<D> {
    /// Construct once per process, wrapping the presentation backend.
    pub fn new(display: D) -> Self {
        let mut surface = FrameBuffer::new(VIEW_COLS, VIEW_ROWS);
        surface.clear_color(BACKGROUND_COLOR);
        Self { display, surface }
    }

    /// Construct the renderer and subscribe it on the bus in one step.
    pub fn attach(bus: &mut EventBus, display: D)
    where
        D: 'static,
    {
        bus.register(Box::new(Self::new(display)));
    }

    /// The wrapped backend, for output inspection in tests and benches.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Per-game-session hook, run once per `Initialize` notification.
    ///
    /// Resets all per-session renderer state. The surface is the only such
    /// state today; anything a future session-scoped resource needs also
    /// belongs here, not in `new`.
    pub fn initialize(&mut self) {
        debug!("view session initialized");
        self.surface.clear_color(BACKGROUND_COLOR);
    }

    fn display_fps(&mut self, model: &dyn GameModel) -> Result<()> {
        self.display
            .set_caption(&format!("{} - FPS: {:.2}", WINDOW_CAPTION, model.fps()))
    }

    fn render_menu(&mut self) -> Result<()> {
        self.surface.clear_color(BACKGROUND_COLOR);
        self.surface.put_str_centered(
            VIEW_COLS / 2,
            VIEW_ROWS / 2,
            "Press [space] to start ...",
            text_style(MENU_TEXT_COLOR),
        );
        self.display.present(&self.surface)
    }

    fn render_play(&mut self, model: &dyn GameModel) -> Result<()> {
        self.surface.clear_color(BACKGROUND_COLOR);

        for player in model.players() {
            self.draw_player(player);
        }

        let overlay = text_style(TEXT_COLOR);
        self.surface.put_str_centered(
            VIEW_COLS / 2,
            VIEW_ROWS / 20,
            &format!("change time left: {}", format_secs(model.change_countdown())),
            overlay,
        );
        self.surface.put_str_centered(
            VIEW_COLS / 2,
            VIEW_ROWS * 2 / 20,
            &format!("total time left: {}", format_secs(model.end_countdown())),
            overlay,
        );
        self.surface.put_str_centered(
            VIEW_COLS * 5 / 6,
            VIEW_ROWS / 20,
            "pause: press p",
            overlay,
        );
        self.surface.put_str_centered(
            VIEW_COLS / 2,
            VIEW_ROWS * 3 / 20,
            &score_line(model.players()),
            overlay,
        );

        self.display.present(&self.surface)
    }

    fn render_paused(&mut self, model: &dyn GameModel) -> Result<()> {
        // No background clear: the last play frame stays visible under the
        // resume hint, so the player sees exactly where the game stood.
        for player in model.players() {
            self.draw_player(player);
        }
        self.surface.put_str_centered(
            VIEW_COLS / 2,
            VIEW_ROWS / 2,
            "resume: press o",
            text_style(TEXT_COLOR),
        );
        self.display.present(&self.surface)
    }

    fn render_endgame(&mut self, model: &dyn GameModel) -> Result<()> {
        self.surface.clear_color(BACKGROUND_COLOR);
        self.surface.put_str_centered(
            VIEW_COLS / 2,
            VIEW_ROWS / 2,
            &score_line(model.players()),
            text_style(TEXT_COLOR),
        );
        self.display.present(&self.surface)
    }

    fn draw_player(&mut self, player: &PlayerSnapshot) {
        let radius = (
            PLAYER_RADIUS / ARENA_WIDTH * VIEW_COLS as f32,
            PLAYER_RADIUS / ARENA_HEIGHT * VIEW_ROWS as f32,
        );
        self.surface.fill_ellipse(
            arena_to_cell(player.position),
            radius,
            PLAYER_CHAR,
            CellStyle::colors(player_color(player.id), BACKGROUND_COLOR),
        );
    }
}

impl<D: Display> Listener for PhaseRenderer<D> {
    fn notify(&mut self, event: GameEvent, model: &dyn GameModel) -> Result<()> {
        match event {
            GameEvent::Initialize => {
                self.initialize();
                Ok(())
            }
            GameEvent::Tick => {
                self.display_fps(model)?;
                match model.phase() {
                    Phase::Menu => self.render_menu(),
                    Phase::Playing => self.render_play(model),
                    Phase::Paused => self.render_paused(model),
                    Phase::Ended => self.render_endgame(model),
                }
            }
        }
    }
}

/// Map an arena-space position to fractional cell coordinates.
pub fn arena_to_cell(position: (f32, f32)) -> (f32, f32) {
    (
        position.0 / ARENA_WIDTH * VIEW_COLS as f32,
        position.1 / ARENA_HEIGHT * VIEW_ROWS as f32,
    )
}

/// Display a countdown frame count as seconds with two decimals.
pub fn format_secs(frames: u32) -> String {
    format!("{:.2}", frames as f64 / FPS as f64)
}

/// The two-player score overlay line.
///
/// The model is the sole supplier of players and its contract is exactly
/// two, so fewer is a precondition violation and fails fast.
pub fn score_line(players: &[PlayerSnapshot]) -> String {
    assert!(
        players.len() >= MAX_PLAYERS,
        "model must supply {} players, got {}",
        MAX_PLAYERS,
        players.len()
    );
    format!(
        "player[0] score: {}    player[1] score: {}",
        players[0].score, players[1].score
    )
}

fn text_style(fg: Rgb) -> CellStyle {
    CellStyle::colors(fg, BACKGROUND_COLOR)
}
