//! Particle screensaver shown before the landing page.
//!
//! Draws bouncing particles on a full-viewport canvas with:
//! - Elastic reflection off the canvas edges
//! - Lines between particles closer than a fixed distance
//! - Dismissal on click or after a timeout
//!
//! # Example
//!
//! ```ignore
//! use disco_screensaver::components::screensaver::{DismissReason, Screensaver};
//!
//! view! {
//!     <Screensaver on_dismiss=move |reason: DismissReason| log::info!("{reason}") />
//! }
//! ```

mod activation;
mod component;
pub mod config;
mod error;
pub mod particles;
mod render;
pub mod state;
pub mod theme;
mod types;

pub use activation::{Activation, Release};
pub use component::Screensaver;
pub use config::{LinkStyle, LinkTiming, ScreensaverConfig};
pub use error::SurfaceError;
pub use particles::{Particle, Scene};
pub use render::Surface;
pub use state::{DismissReason, FrameControl, FrameOutcome, FrameTask, Lifecycle, Phase};
pub use types::Bounds;
