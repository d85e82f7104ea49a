//! In-memory host: keeps bodies, camera and drawn text as plain data.
//!
//! Drives the native binary and the integration tests directly; in the
//! browser a canvas renderer draws its state every frame. Every boundary call
//! a scene makes is recorded so it can be inspected afterwards.

use glam::Vec2;

use crate::app::Runtime;
use crate::controller::{
    Body, EntityHandle, HostError, InputEvent, InputProcessor, InputState, KeyboardState,
    PhysicsSystem, SceneHost, SubscriptionId, TextHandle, Velocity2D,
};
use crate::model::{Camera, WorldBounds};
use crate::view::hud::TextStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub at: Vec2,
    pub text: String,
    pub style: TextStyle,
}

pub struct LocalHost {
    pub keys: KeyboardState,
    processor: InputProcessor,
    physics: PhysicsSystem,
    pub camera: Camera,
    entity_size: f32,
    bodies: Vec<Body>,
    follow: Option<EntityHandle>,
    pub texts: Vec<DrawnText>,
    pub subscriptions: Vec<SubscriptionId>,
    next_subscription: u32,
    /// Every `switch_scene` call, in order.
    pub scene_switches: Vec<String>,
    pending_scene: Option<String>,
    pub velocity_commands: Vec<(EntityHandle, Velocity2D)>,
    /// When set, the next spawn fails with this reason.
    pub fail_spawn: Option<String>,
}

impl LocalHost {
    pub fn new(viewport_width: u32, viewport_height: u32, entity_size: f32) -> Self {
        Self {
            keys: KeyboardState::new(),
            processor: InputProcessor::default(),
            physics: PhysicsSystem::new(WorldBounds::default()),
            camera: Camera::new(viewport_width, viewport_height),
            entity_size,
            bodies: Vec::new(),
            follow: None,
            texts: Vec::new(),
            subscriptions: Vec::new(),
            next_subscription: 0,
            scene_switches: Vec::new(),
            pending_scene: None,
            velocity_commands: Vec::new(),
            fail_spawn: None,
        }
    }

    pub fn from_config(config: &crate::config::GameConfig) -> Self {
        Self::new(config.viewport.width, config.viewport.height, config.entity_size)
    }

    /// Feed a platform event; returns true if it was a pointer-down.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.keys.process_event(event)
    }

    pub fn press(&mut self, key: &str) {
        self.handle_event(&InputEvent::KeyDown(key.to_string()));
    }

    pub fn release(&mut self, key: &str) {
        self.handle_event(&InputEvent::KeyUp(key.to_string()));
    }

    pub fn body(&self, entity: EntityHandle) -> Option<&Body> {
        self.bodies.get(entity.0 as usize)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn entity_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bounds(&self) -> WorldBounds {
        self.physics.bounds
    }
}

impl SceneHost for LocalHost {
    fn sample_input(&mut self) -> InputState {
        self.processor.sample(&self.keys)
    }

    fn set_world_bounds(&mut self, bounds: WorldBounds) {
        self.physics.bounds = bounds;
    }

    fn spawn_entity(&mut self, at: Vec2) -> Result<EntityHandle, HostError> {
        if let Some(reason) = self.fail_spawn.take() {
            return Err(HostError::SpawnFailed { x: at.x, y: at.y, reason });
        }
        let handle = EntityHandle(self.bodies.len() as u32);
        self.bodies.push(Body::new(at, self.entity_size));
        Ok(handle)
    }

    fn set_entity_velocity(&mut self, entity: EntityHandle, velocity: Velocity2D) {
        self.velocity_commands.push((entity, velocity));
        match self.bodies.get_mut(entity.0 as usize) {
            Some(body) => body.vel = velocity,
            None => tracing::warn!(?entity, "velocity for unknown entity ignored"),
        }
    }

    fn camera_follow(&mut self, entity: EntityHandle) {
        self.follow = Some(entity);
        if let Some(body) = self.bodies.get(entity.0 as usize) {
            self.camera.follow(body.pos, &self.physics.bounds);
        }
    }

    fn subscribe_pointer_down(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.push(id);
        id
    }

    fn render_text(&mut self, at: Vec2, text: &str, style: &TextStyle) -> TextHandle {
        self.texts.push(DrawnText { at, text: text.to_string(), style: style.clone() });
        TextHandle(self.texts.len() as u32 - 1)
    }

    fn switch_scene(&mut self, name: &str) {
        self.scene_switches.push(name.to_string());
        self.pending_scene = Some(name.to_string());
    }
}

impl Runtime for LocalHost {
    fn step(&mut self, dt: f32) {
        for body in &mut self.bodies {
            self.physics.update(body, dt);
        }
        if let Some(body) = self.follow.and_then(|e| self.bodies.get(e.0 as usize)) {
            self.camera.follow(body.pos, &self.physics.bounds);
        }
    }

    fn reset(&mut self) {
        self.bodies.clear();
        self.follow = None;
        self.texts.clear();
        self.subscriptions.clear();
        self.camera.offset = Vec2::ZERO;
    }

    fn take_pending_scene(&mut self) -> Option<String> {
        self.pending_scene.take()
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions.contains(&id)
    }
}
