//! The playable scene and the boundary it needs from whatever hosts it.
//!
//! A host (browser canvas, headless simulator, test harness) owns rendering,
//! physics and raw input. It builds a [`SceneController`] through
//! [`SceneController::create`], calls [`SceneController::tick`] once per
//! fixed simulation step, and forwards pointer-down events to
//! [`SceneController::pointer_down`] for as long as the subscription returned
//! by [`SceneHost::subscribe_pointer_down`] is live.

use glam::Vec2;
use thiserror::Error;

use super::control::{compute_velocity, Velocity2D};
use super::input::InputState;
use crate::config::GameConfig;
use crate::model::{ScoreError, ScoreRegistry, WorldBounds};
use crate::view::hud::{self, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    #[error("entity could not be spawned at ({x}, {y}): {reason}")]
    SpawnFailed { x: f32, y: f32, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("seed roster rejected: {0}")]
    Roster(#[from] ScoreError),
    #[error("controlled entity unavailable: {0}")]
    Spawn(#[source] HostError),
}

/// Services a scene consumes from its host engine.
pub trait SceneHost {
    /// Current directional input. Called once per tick.
    fn sample_input(&mut self) -> InputState;

    fn set_world_bounds(&mut self, bounds: WorldBounds);

    fn spawn_entity(&mut self, at: Vec2) -> Result<EntityHandle, HostError>;

    /// Replace the entity's velocity; it holds until the next call.
    fn set_entity_velocity(&mut self, entity: EntityHandle, velocity: Velocity2D);

    fn camera_follow(&mut self, entity: EntityHandle);

    /// Ask the host to route pointer-down events to this scene.
    fn subscribe_pointer_down(&mut self) -> SubscriptionId;

    fn render_text(&mut self, at: Vec2, text: &str, style: &TextStyle) -> TextHandle;

    /// End the current scene and activate `name`. Fire and forget.
    fn switch_scene(&mut self, name: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    Active,
    Ended,
}

/// State owned by one running game scene.
#[derive(Debug)]
pub struct SceneController {
    state: SceneState,
    registry: ScoreRegistry,
    entity: EntityHandle,
    pointer_sub: SubscriptionId,
    roster_text: Vec<TextHandle>,
    speed: f32,
    game_over_scene: String,
}

impl SceneController {
    /// Enter the scene: seed the roster, spawn and follow the controlled
    /// entity at the world's center, subscribe to pointer-down and draw the
    /// roster.
    pub fn create<H: SceneHost + ?Sized>(config: &GameConfig, host: &mut H) -> Result<Self, SceneError> {
        let mut registry = ScoreRegistry::new();
        for seed in &config.roster {
            registry.add_user(seed.name.as_str(), seed.color.as_str())?;
        }

        host.set_world_bounds(config.world);
        let center = config.world.center();
        let entity = host.spawn_entity(center).map_err(SceneError::Spawn)?;
        tracing::debug!(?entity, x = center.x, y = center.y, "controlled entity spawned");
        host.camera_follow(entity);

        let pointer_sub = host.subscribe_pointer_down();

        let roster_text = hud::roster_lines(&registry, &config.hud)
            .iter()
            .map(|line| host.render_text(line.at, &line.text, &line.style))
            .collect();

        tracing::info!(players = registry.len(), "game scene created");

        Ok(Self {
            state: SceneState::Active,
            registry,
            entity,
            pointer_sub,
            roster_text,
            speed: config.speed,
            game_over_scene: config.game_over_scene.clone(),
        })
    }

    /// One simulation step: sample input, map it to a velocity, apply it.
    pub fn tick<H: SceneHost + ?Sized>(&mut self, host: &mut H) {
        if self.state != SceneState::Active {
            return;
        }
        let input = host.sample_input();
        let velocity = compute_velocity(input, self.speed);
        tracing::trace!(?input, vx = velocity.x, vy = velocity.y, "tick");
        host.set_entity_velocity(self.entity, velocity);
    }

    /// Handle a pointer-down. Only the first one while active ends the scene;
    /// returns whether this call did.
    pub fn pointer_down<H: SceneHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.state == SceneState::Ended {
            return false;
        }
        self.state = SceneState::Ended;
        tracing::info!(next = %self.game_over_scene, "round ended by pointer");
        host.switch_scene(&self.game_over_scene);
        true
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn registry(&self) -> &ScoreRegistry {
        &self.registry
    }

    pub fn entity(&self) -> EntityHandle {
        self.entity
    }

    pub fn pointer_subscription(&self) -> SubscriptionId {
        self.pointer_sub
    }

    pub fn roster_text(&self) -> &[TextHandle] {
        &self.roster_text
    }
}
