//! Canvas drawing for the screensaver.
//!
//! All drawing goes through the [`Surface`] trait so the shared context state
//! (global alpha, stroke style) is an explicit parameter of every pass.
//! A frame is drawn in this order:
//! 1. Clear the whole surface
//! 2. Particles, each with its own global alpha set right before the fill
//! 3. Neighbor lines, after switching global alpha to the link alpha once

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::LinkStyle;
use super::particles::{Particle, linked_pairs};
use super::types::Bounds;

/// Minimal 2D drawing target.
///
/// Mirrors the stateful canvas API: alpha and stroke settings persist until
/// changed, so callers must order their calls.
pub trait Surface {
	/// Erase the rectangle covering `bounds`.
	fn clear(&mut self, bounds: Bounds);
	/// Set the alpha applied to every following fill and stroke.
	fn set_global_alpha(&mut self, alpha: f64);
	/// Fill a circle centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str);
	/// Set stroke color and width for following lines.
	fn set_stroke(&mut self, stroke: &str, width: f64);
	/// Stroke a straight line segment.
	fn line(&mut self, from: (f64, f64), to: (f64, f64));
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, bounds: Bounds) {
		self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(fill);
		self.fill();
	}

	fn set_stroke(&mut self, stroke: &str, width: f64) {
		self.set_stroke_style_str(stroke);
		self.set_line_width(width);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Draws one particle with its own opacity.
pub fn draw_particle<S: Surface + ?Sized>(surface: &mut S, particle: &Particle) {
	surface.set_global_alpha(particle.opacity);
	surface.fill_circle(
		particle.x,
		particle.y,
		particle.size,
		&particle.color.to_css(),
	);
}

/// Strokes a line between every pair closer than the link distance.
/// Returns the number of lines drawn.
pub fn draw_links<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	style: &LinkStyle,
) -> usize {
	surface.set_global_alpha(style.color.a);
	surface.set_stroke(&style.color.to_css_rgb(), style.width);

	let mut drawn = 0;
	for (i, j) in linked_pairs(particles, style.distance) {
		let (a, b) = (&particles[i], &particles[j]);
		surface.line((a.x, a.y), (b.x, b.y));
		drawn += 1;
	}
	drawn
}

/// Records every drawing call for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
	pub ops: Vec<Op>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
	Clear(Bounds),
	Alpha(f64),
	Circle { x: f64, y: f64, radius: f64, fill: String },
	Stroke { color: String, width: f64 },
	Line((f64, f64), (f64, f64)),
}

#[cfg(test)]
impl Recorder {
	pub fn circles(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count()
	}

	pub fn lines(&self) -> Vec<((f64, f64), (f64, f64))> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				Op::Line(a, b) => Some((*a, *b)),
				_ => None,
			})
			.collect()
	}
}

#[cfg(test)]
impl Surface for Recorder {
	fn clear(&mut self, bounds: Bounds) {
		self.ops.push(Op::Clear(bounds));
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ops.push(Op::Alpha(alpha));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str) {
		self.ops.push(Op::Circle {
			x,
			y,
			radius,
			fill: fill.to_string(),
		});
	}

	fn set_stroke(&mut self, stroke: &str, width: f64) {
		self.ops.push(Op::Stroke {
			color: stroke.to_string(),
			width,
		});
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
		self.ops.push(Op::Line(from, to));
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::components::screensaver::config::ScreensaverConfig;
	use crate::components::screensaver::theme::Hsl;

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			color: Hsl::new(200.0, 70.0, 60.0),
			opacity: 0.5,
		}
	}

	#[test]
	fn particle_alpha_is_set_right_before_fill() {
		let mut rec = Recorder::default();
		draw_particle(&mut rec, &particle_at(3.0, 4.0));
		assert_eq!(
			rec.ops,
			vec![
				Op::Alpha(0.5),
				Op::Circle {
					x: 3.0,
					y: 4.0,
					radius: 2.0,
					fill: "hsl(200, 70%, 60%)".to_string(),
				},
			]
		);
	}

	#[rstest]
	#[case(50.0, 1)]
	#[case(99.9, 1)]
	#[case(100.0, 0)]
	#[case(150.0, 0)]
	fn links_follow_distance_threshold(#[case] dx: f64, #[case] expected: usize) {
		let style = ScreensaverConfig::default().link;
		let mut rec = Recorder::default();
		let drawn = draw_links(&mut rec, &[particle_at(0.0, 0.0), particle_at(dx, 0.0)], &style);
		assert_eq!(drawn, expected);
		assert_eq!(rec.lines().len(), expected);
	}

	#[test]
	fn link_pass_switches_alpha_and_stroke_first() {
		let style = ScreensaverConfig::default().link;
		let mut rec = Recorder::default();
		draw_links(&mut rec, &[particle_at(0.0, 0.0), particle_at(50.0, 0.0)], &style);
		assert_eq!(rec.ops[0], Op::Alpha(0.3));
		assert_eq!(
			rec.ops[1],
			Op::Stroke {
				color: "#ffffff".to_string(),
				width: 1.0,
			}
		);
		assert_eq!(rec.ops[2], Op::Line((0.0, 0.0), (50.0, 0.0)));
	}
}
