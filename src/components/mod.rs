//! The components module contains all shared components for our app.

mod app;
mod controller;
mod icons;
mod player;
mod sidebar;
mod sleep_timer;
mod visualizer;

pub use app::*;
pub use controller::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;
pub use sleep_timer::*;
pub use visualizer::*;
