// MODEL: Game state and data
pub mod score;
pub mod world;
pub mod camera;

pub use score::{ScoreEntry, ScoreError, ScoreRegistry};
pub use world::WorldBounds;
pub use camera::Camera;
