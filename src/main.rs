//! Native headless runner.
//!
//! Plays a scripted round against the in-memory host and logs what happens:
//! `tron [config.json]`, with `TRON_TICKS` choosing how long to steer before
//! the simulated click ends the round.

use anyhow::{Context, Result};

use tron::app::Game;
use tron::config::GameConfig;
use tron::controller::{InputEvent, MouseButton};
use tron::logging;
use tron::view::LocalHost;

const DEFAULT_TICKS: u32 = 180;

/// Keys held for each third of the run.
const SCRIPT: [&[&str]; 3] = [&["ArrowRight"], &["ArrowUp", "ArrowDown", "ArrowLeft"], &[]];

fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => GameConfig::default(),
    };
    let ticks: u32 = match std::env::var("TRON_TICKS") {
        Ok(v) => v.parse().with_context(|| format!("TRON_TICKS={v} is not a tick count"))?,
        Err(_) => DEFAULT_TICKS,
    };

    let step = config.tick_seconds();
    let host = LocalHost::from_config(&config);
    let mut game = Game::new(config, host).context("starting game scene")?;

    if let Some(controller) = game.controller() {
        for entry in controller.registry() {
            tracing::info!(name = %entry.name, color = %entry.color, "roster");
        }
    }

    let phase_len = (ticks / SCRIPT.len() as u32).max(1);
    let mut phase = None;
    while game.tick_count() < ticks as u64 {
        let current = ((game.tick_count() / phase_len as u64) as usize).min(SCRIPT.len() - 1);
        if phase != Some(current) {
            let host = game.host_mut();
            host.handle_event(&InputEvent::FocusLost);
            for key in SCRIPT[current] {
                host.press(key);
            }
            phase = Some(current);
            tracing::info!(phase = current, keys = ?SCRIPT[current], "input phase");
        }
        game.frame(step)?;
    }

    if let Some(entity) = game.controller().map(|c| c.entity()) {
        if let Some(body) = game.host().body(entity) {
            tracing::info!(x = body.pos.x, y = body.pos.y, ticks = game.tick_count(), "final position");
        }
    }

    let click = InputEvent::PointerDown { button: MouseButton::Left, x: 0.0, y: 0.0 };
    if game.host_mut().handle_event(&click) {
        game.pointer_down()?;
    }
    tracing::info!(scene = game.scene_name(), switches = ?game.host().scene_switches, "after click");

    Ok(())
}
