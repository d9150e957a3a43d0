//! Game model query surface.
//!
//! The view renders from a read-only snapshot of the model on every tick:
//! current phase, an FPS sample, two countdowns (stored as frame counts),
//! and the ordered player list. [`GameModel`] is that query surface.
//!
//! Real gameplay (input mapping, physics, score rules) lives outside this
//! repository; [`DemoModel`] is a scripted stand-in that walks the phase
//! machine and keeps the countdowns and player positions moving so the
//! renderer has something to show. It is what the runner binary and the
//! tests drive.

use arrayvec::ArrayVec;

use arena_duel_types::{
    Phase, PlayerSnapshot, CHANGE_INTERVAL_FRAMES, GAME_LENGTH_FRAMES, MAX_PLAYERS,
};

/// Read-only query surface the view renders from.
///
/// Countdowns are frame counts; the view converts them to seconds for
/// display. The player list is ordered and ids are stable for the game's
/// duration.
pub trait GameModel {
    /// Current phase.
    fn phase(&self) -> Phase;

    /// Instantaneous frame-rate sample, as measured by the frame driver.
    fn fps(&self) -> f64;

    /// Frames until the next arena change.
    fn change_countdown(&self) -> u32;

    /// Frames until the game ends.
    fn end_countdown(&self) -> u32;

    /// Ordered player list. Always exactly [`MAX_PLAYERS`] entries.
    fn players(&self) -> &[PlayerSnapshot];
}

/// Scripted model fixture.
///
/// Carries the full query surface plus the driver hooks the runner uses to
/// move the phase machine (`start`, `pause`, `resume`) and to advance time
/// (`advance`, `record_fps`). Player positions drift along a fixed orbit so
/// consecutive play frames differ; there is no simulation behind them.
#[derive(Debug, Clone)]
pub struct DemoModel {
    phase: Phase,
    fps: f64,
    change_countdown: u32,
    end_countdown: u32,
    frame: u32,
    players: ArrayVec<PlayerSnapshot, MAX_PLAYERS>,
}

/// Orbit radius of the scripted player motion, in arena units.
const ORBIT_RADIUS: f32 = 200.0;

/// Orbit angle step per frame, in radians.
const ORBIT_STEP: f32 = 0.02;

impl DemoModel {
    pub fn new() -> Self {
        let mut model = Self {
            phase: Phase::Menu,
            fps: 0.0,
            change_countdown: CHANGE_INTERVAL_FRAMES,
            end_countdown: GAME_LENGTH_FRAMES,
            frame: 0,
            players: ArrayVec::new(),
        };
        for id in 0..MAX_PLAYERS as u8 {
            model.players.push(PlayerSnapshot::new(id, (0.0, 0.0), 0));
        }
        model.place_players();
        model
    }

    /// Start a new game session from the menu or a finished game.
    ///
    /// Resets the per-session state (countdowns, scores, orbit). The caller
    /// is responsible for announcing the new session on the event bus.
    pub fn start(&mut self) {
        if !matches!(self.phase, Phase::Menu | Phase::Ended) {
            return;
        }
        self.phase = Phase::Playing;
        self.change_countdown = CHANGE_INTERVAL_FRAMES;
        self.end_countdown = GAME_LENGTH_FRAMES;
        self.frame = 0;
        for player in &mut self.players {
            player.score = 0;
        }
        self.place_players();
    }

    /// Suspend play. No-op outside `Playing`.
    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
    }

    /// Resume play. No-op outside `Paused`.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Playing;
        }
    }

    /// Jump straight to the end screen.
    pub fn finish(&mut self) {
        self.phase = Phase::Ended;
    }

    /// Advance the script by one frame.
    ///
    /// Only `Playing` consumes time: both countdowns tick down, the change
    /// countdown wraps, and the game ends when the end countdown reaches
    /// zero. Menu, paused, and ended frames are frozen.
    pub fn advance(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        self.frame += 1;
        self.place_players();

        if self.change_countdown == 0 {
            self.change_countdown = CHANGE_INTERVAL_FRAMES;
        } else {
            self.change_countdown -= 1;
        }

        self.end_countdown = self.end_countdown.saturating_sub(1);
        if self.end_countdown == 0 {
            self.finish();
        }
    }

    /// Store the frame driver's latest frame-rate measurement.
    pub fn record_fps(&mut self, fps: f64) {
        self.fps = fps;
    }

    /// Overwrite one player's score. Fixture hook for tests and demos.
    pub fn set_score(&mut self, index: usize, score: u32) {
        self.players[index].score = score;
    }

    fn place_players(&mut self) {
        let center = (
            arena_duel_types::ARENA_WIDTH / 2.0,
            arena_duel_types::ARENA_HEIGHT / 2.0,
        );
        let angle = self.frame as f32 * ORBIT_STEP;
        for (i, player) in self.players.iter_mut().enumerate() {
            // Players sit on opposite ends of the same orbit.
            let a = angle + i as f32 * std::f32::consts::PI;
            player.position = (
                center.0 + ORBIT_RADIUS * a.cos(),
                center.1 + ORBIT_RADIUS * a.sin(),
            );
        }
    }
}

impl Default for DemoModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GameModel for DemoModel {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn change_countdown(&self) -> u32 {
        self.change_countdown
    }

    fn end_countdown(&self) -> u32 {
        self.end_countdown
    }

    fn players(&self) -> &[PlayerSnapshot] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_duel_types::{ARENA_HEIGHT, ARENA_WIDTH};

    #[test]
    fn new_model_waits_in_menu_with_two_players() {
        let model = DemoModel::new();
        assert_eq!(model.phase(), Phase::Menu);
        assert_eq!(model.players().len(), MAX_PLAYERS);
        assert_eq!(model.players()[0].id, 0);
        assert_eq!(model.players()[1].id, 1);
    }

    #[test]
    fn start_pause_resume_walk_the_phase_machine() {
        let mut model = DemoModel::new();
        model.start();
        assert_eq!(model.phase(), Phase::Playing);
        model.pause();
        assert_eq!(model.phase(), Phase::Paused);
        // Pausing again changes nothing.
        model.pause();
        assert_eq!(model.phase(), Phase::Paused);
        model.resume();
        assert_eq!(model.phase(), Phase::Playing);
    }

    #[test]
    fn start_ignored_mid_game() {
        let mut model = DemoModel::new();
        model.start();
        model.advance();
        let countdown = model.end_countdown();
        model.start();
        assert_eq!(model.end_countdown(), countdown);
    }

    #[test]
    fn advance_only_consumes_time_while_playing() {
        let mut model = DemoModel::new();
        model.advance();
        assert_eq!(model.end_countdown(), GAME_LENGTH_FRAMES);

        model.start();
        model.advance();
        assert_eq!(model.end_countdown(), GAME_LENGTH_FRAMES - 1);

        model.pause();
        model.advance();
        assert_eq!(model.end_countdown(), GAME_LENGTH_FRAMES - 1);
    }

    #[test]
    fn game_ends_when_end_countdown_runs_out() {
        let mut model = DemoModel::new();
        model.start();
        for _ in 0..GAME_LENGTH_FRAMES {
            model.advance();
        }
        assert_eq!(model.phase(), Phase::Ended);
        assert_eq!(model.end_countdown(), 0);
    }

    #[test]
    fn change_countdown_wraps() {
        let mut model = DemoModel::new();
        model.start();
        for _ in 0..=CHANGE_INTERVAL_FRAMES {
            model.advance();
        }
        assert_eq!(model.change_countdown(), CHANGE_INTERVAL_FRAMES);
    }

    #[test]
    fn players_stay_inside_the_arena() {
        let mut model = DemoModel::new();
        model.start();
        for _ in 0..500 {
            model.advance();
            for player in model.players() {
                assert!(player.position.0 >= 0.0 && player.position.0 <= ARENA_WIDTH);
                assert!(player.position.1 >= 0.0 && player.position.1 <= ARENA_HEIGHT);
            }
        }
    }

    #[test]
    fn restart_resets_scores_and_countdowns() {
        let mut model = DemoModel::new();
        model.start();
        model.set_score(0, 5);
        model.finish();
        model.start();
        assert_eq!(model.phase(), Phase::Playing);
        assert_eq!(model.players()[0].score, 0);
        assert_eq!(model.end_countdown(), GAME_LENGTH_FRAMES);
    }
}
