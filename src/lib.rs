pub mod app;
pub mod camera;
pub mod cli;
pub mod input;
pub mod light;
pub mod palette;
pub mod renderer;
pub mod rng;
pub mod scene;
pub mod shapes;
pub mod texture;
pub mod ui;

pub use camera::Camera;
pub use light::{Light, LightForm, LightKind, LightUpdate};
pub use rng::{Dice, ThreadDice};
pub use scene::Scene;
pub use shapes::{Material, Shape, ShapeKind};
