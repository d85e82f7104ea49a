// VIEW: Hosts and rendering
pub mod hud;
pub mod local;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use hud::{HudLine, HudStyle, TextAlign, TextStyle};
pub use local::{DrawnText, LocalHost};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
