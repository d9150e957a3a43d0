//! Notification handling: lifecycle hook, caption updates, and the
//! one-routine-per-tick guarantee.

use arena_duel::events::Listener;
use arena_duel::model::DemoModel;
use arena_duel::term::CaptureDisplay;
use arena_duel::types::{GameEvent, VIEW_ROWS};
use arena_duel::view::PhaseRenderer;

#[test]
fn initialize_runs_the_hook_without_presenting() {
    let model = DemoModel::new();
    let mut view = PhaseRenderer::new(CaptureDisplay::new());

    view.notify(GameEvent::Initialize, &model).unwrap();
    view.notify(GameEvent::Initialize, &model).unwrap();

    assert_eq!(view.display().presents(), 0);
    assert!(view.display().captions().is_empty());
}

#[test]
fn every_tick_presents_exactly_once_in_every_phase() {
    let mut model = DemoModel::new();
    let mut view = PhaseRenderer::new(CaptureDisplay::new());

    view.notify(GameEvent::Tick, &model).unwrap();
    assert_eq!(view.display().presents(), 1);

    model.start();
    view.notify(GameEvent::Tick, &model).unwrap();
    assert_eq!(view.display().presents(), 2);

    model.pause();
    view.notify(GameEvent::Tick, &model).unwrap();
    assert_eq!(view.display().presents(), 3);

    model.resume();
    model.finish();
    view.notify(GameEvent::Tick, &model).unwrap();
    assert_eq!(view.display().presents(), 4);
}

#[test]
fn caption_carries_the_fps_sample_on_every_tick() {
    let mut model = DemoModel::new();
    let mut view = PhaseRenderer::new(CaptureDisplay::new());

    model.record_fps(59.94);
    view.notify(GameEvent::Tick, &model).unwrap();
    model.record_fps(30.0);
    view.notify(GameEvent::Tick, &model).unwrap();

    assert_eq!(
        view.display().captions(),
        ["Arena Duel - FPS: 59.94", "Arena Duel - FPS: 30.00"]
    );
    // The caption readout is refreshed once per tick, before dispatch.
    assert_eq!(view.display().captions().len(), view.display().presents());
}

#[test]
fn initialize_resets_the_surface_between_sessions() {
    let mut model = DemoModel::new();
    let mut view = PhaseRenderer::new(CaptureDisplay::new());

    // Leave a play frame on the surface, then pause.
    model.start();
    view.notify(GameEvent::Tick, &model).unwrap();
    model.pause();

    // A new session resets the surface, so the paused frame composes over
    // a clean background instead of the stale play frame.
    view.notify(GameEvent::Initialize, &model).unwrap();
    view.notify(GameEvent::Tick, &model).unwrap();

    let fb = view.display().last_frame().unwrap();
    let band1: String = (0..fb.width())
        .map(|x| fb.get(x, VIEW_ROWS / 20).unwrap().ch)
        .collect();
    assert!(!band1.contains("change time left"));
}
