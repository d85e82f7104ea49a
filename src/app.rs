//! Scene director: owns whichever scene is current and drives it from frames.

use glam::Vec2;

use crate::config::{GameConfig, GAME_SCENE};
use crate::controller::{FixedTimestep, SceneController, SceneError, SceneHost, SceneState, SubscriptionId};
use crate::view::hud::{TextAlign, TextStyle};

/// What a director needs from a host beyond the scene boundary itself.
pub trait Runtime: SceneHost {
    /// Advance host-side simulation (physics, camera) by one tick.
    fn step(&mut self, dt: f32);

    /// Drop everything the previous scene spawned, drew or subscribed.
    fn reset(&mut self);

    /// Scene requested through `switch_scene` since the last call.
    fn take_pending_scene(&mut self) -> Option<String>;

    /// Whether pointer-downs should still be delivered to `id`.
    fn is_subscribed(&self, id: SubscriptionId) -> bool;
}

pub enum ActiveScene {
    Game(SceneController),
    GameOver(SubscriptionId),
}

pub struct Game<H: Runtime> {
    config: GameConfig,
    host: H,
    timestep: FixedTimestep,
    scene: ActiveScene,
    rounds: u32,
}

impl<H: Runtime> Game<H> {
    /// Start on the game scene.
    pub fn new(config: GameConfig, mut host: H) -> Result<Self, SceneError> {
        let controller = SceneController::create(&config, &mut host)?;
        Ok(Self {
            timestep: FixedTimestep::new(config.tick_rate_hz),
            config,
            host,
            scene: ActiveScene::Game(controller),
            rounds: 1,
        })
    }

    /// Run as many fixed ticks as `frame_dt` seconds allow. Returns the tick count.
    pub fn frame(&mut self, frame_dt: f32) -> Result<u32, SceneError> {
        let ticks = self.timestep.advance(frame_dt);
        let step = self.timestep.step();
        for _ in 0..ticks {
            if let ActiveScene::Game(controller) = &mut self.scene {
                controller.tick(&mut self.host);
            }
            self.host.step(step);
        }
        self.apply_pending_switch()?;
        Ok(ticks)
    }

    /// Route a pointer-down to the current scene, if it is subscribed.
    pub fn pointer_down(&mut self) -> Result<(), SceneError> {
        match &mut self.scene {
            ActiveScene::Game(controller) => {
                if self.host.is_subscribed(controller.pointer_subscription()) {
                    controller.pointer_down(&mut self.host);
                }
            }
            ActiveScene::GameOver(sub) => {
                if self.host.is_subscribed(*sub) {
                    self.host.switch_scene(GAME_SCENE);
                }
            }
        }
        self.apply_pending_switch()
    }

    fn apply_pending_switch(&mut self) -> Result<(), SceneError> {
        let Some(name) = self.host.take_pending_scene() else {
            return Ok(());
        };
        if name == GAME_SCENE {
            self.host.reset();
            self.scene = ActiveScene::Game(SceneController::create(&self.config, &mut self.host)?);
            self.rounds += 1;
            tracing::info!(round = self.rounds, "scene switched to game");
        } else if name == self.config.game_over_scene {
            self.host.reset();
            self.enter_game_over();
            tracing::info!(scene = %name, "scene switched to game over");
        } else {
            tracing::warn!(scene = %name, "switch to unknown scene ignored");
        }
        Ok(())
    }

    fn enter_game_over(&mut self) {
        let center = Vec2::new(self.config.viewport.width as f32, self.config.viewport.height as f32) / 2.0;
        let title = TextStyle {
            font: "48px Arial".to_string(),
            fill: "#ffffff".to_string(),
            align: TextAlign::Center,
            fixed_to_camera: true,
        };
        let hint = TextStyle { font: "20px Arial".to_string(), ..title.clone() };
        self.host.render_text(center, "GAME OVER", &title);
        self.host.render_text(center + Vec2::new(0.0, 44.0), "Click to play again", &hint);
        let sub = self.host.subscribe_pointer_down();
        self.scene = ActiveScene::GameOver(sub);
    }

    pub fn scene(&self) -> &ActiveScene {
        &self.scene
    }

    pub fn scene_name(&self) -> &str {
        match &self.scene {
            ActiveScene::Game(c) if c.state() == SceneState::Active => GAME_SCENE,
            ActiveScene::Game(_) => "game (ended)",
            ActiveScene::GameOver(_) => &self.config.game_over_scene,
        }
    }

    pub fn controller(&self) -> Option<&SceneController> {
        match &self.scene {
            ActiveScene::Game(c) => Some(c),
            ActiveScene::GameOver(_) => None,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn tick_count(&self) -> u64 {
        self.timestep.tick_count()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
