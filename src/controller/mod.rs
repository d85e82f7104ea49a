// CONTROLLER: Input, game logic, and update loop
pub mod input;
pub mod control;
pub mod physics;
pub mod scene;
pub mod frame_loop;

pub use input::{InputEvent, InputProcessor, InputState, KeyBindings, KeyboardState, MouseButton};
pub use control::{compute_velocity, Velocity2D};
pub use physics::{Body, PhysicsSystem};
pub use scene::{EntityHandle, HostError, SceneController, SceneError, SceneHost, SceneState, SubscriptionId, TextHandle};
pub use frame_loop::FixedTimestep;
