//! Tunable constants for the screensaver.
//!
//! Everything the scene initializer and frame advancer need lives in
//! [`ScreensaverConfig`]. The defaults reproduce the classic look: fifty
//! slow particles, lines between neighbors closer than 100px, dismissal after
//! ten seconds.

use std::ops::Range;
use std::time::Duration;

use super::theme::Color;

/// Which particle positions the neighbor-line pass reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkTiming {
	/// Lines use positions from before this frame's update, so they trail the
	/// particles by one frame.
	#[default]
	Lagged,
	/// Lines use the positions drawn in this frame.
	Current,
}

/// Style of the lines drawn between nearby particles.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkStyle {
	/// Pairs strictly closer than this (in pixels) are connected.
	pub distance: f64,
	/// Stroke color; its alpha becomes the global alpha of the line pass.
	pub color: Color,
	/// Stroke width in pixels.
	pub width: f64,
	/// Which frame's positions the line pass reads.
	pub timing: LinkTiming,
}

/// Complete screensaver configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreensaverConfig {
	/// Number of particles in every freshly generated scene.
	pub particle_count: usize,
	/// Auto-dismiss delay.
	pub dismiss_after: Duration,
	/// Velocity components are drawn from `[-max_speed, max_speed)` px/frame.
	pub max_speed: f64,
	/// Particle radius range in pixels.
	pub size: Range<f64>,
	/// Particle opacity range.
	pub opacity: Range<f64>,
	/// HSL saturation shared by all particles, in percent.
	pub saturation: f64,
	/// HSL lightness shared by all particles, in percent.
	pub lightness: f64,
	/// Neighbor lines.
	pub link: LinkStyle,
}

impl Default for ScreensaverConfig {
	fn default() -> Self {
		Self {
			particle_count: 50,
			dismiss_after: Duration::from_secs(10),
			max_speed: 1.0,
			size: 1.0..4.0,
			opacity: 0.2..1.0,
			saturation: 70.0,
			lightness: 60.0,
			link: LinkStyle {
				distance: 100.0,
				color: Color::WHITE.with_alpha(0.3),
				width: 1.0,
				timing: LinkTiming::Lagged,
			},
		}
	}
}

impl ScreensaverConfig {
	/// Whole seconds until auto-dismiss, rounded up, for the overlay hint.
	pub fn dismiss_after_secs(&self) -> u64 {
		let d = self.dismiss_after;
		d.as_secs() + u64::from(d.subsec_nanos() > 0)
	}
}
