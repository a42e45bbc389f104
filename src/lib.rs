pub mod camera;
pub mod cli;
pub mod core;
pub mod frame;
pub mod geometry;
pub mod hud;
pub mod renderer;
pub mod state;
pub mod toggles;
pub mod transform;
pub mod types;

pub use camera::{Camera, PointerTracking};
pub use state::{AppState, CursorMode};
pub use toggles::{ToggleSet, TransformKind};
pub use transform::{compose_model, FrameMatrices};
