//! Bouncing particles and the scene that owns them.

use std::ops::Range;

use rand::Rng;
use rand::distributions::Standard;

use super::config::{LinkTiming, ScreensaverConfig};
use super::render::{self, Surface};
use super::theme::Hsl;
use super::types::Bounds;

/// A single bouncing particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity in px/frame.
	pub vx: f64,
	/// Vertical velocity in px/frame.
	pub vy: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Fill color.
	pub color: Hsl,
	/// Fixed for the particle's lifetime.
	pub opacity: f64,
}

impl Particle {
	/// Advance one frame, reflecting off the edges of `bounds`.
	///
	/// A coordinate that would reach or cross an edge is clamped onto it and
	/// the matching velocity component flips sign, keeping its magnitude.
	pub fn step(&self, bounds: Bounds) -> Particle {
		let (x, vx) = reflect(self.x + self.vx, self.vx, bounds.width);
		let (y, vy) = reflect(self.y + self.vy, self.vy, bounds.height);
		Particle {
			x,
			y,
			vx,
			vy,
			..self.clone()
		}
	}

	/// Euclidean distance between two particle centers.
	pub fn distance(&self, other: &Particle) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

fn reflect(candidate: f64, velocity: f64, bound: f64) -> (f64, f64) {
	if candidate <= 0.0 {
		(0.0, -velocity)
	} else if candidate >= bound {
		(bound, -velocity)
	} else {
		(candidate, velocity)
	}
}

/// Uniform sample from `[range.start, range.end)`.
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
	let unit: f64 = rng.sample(Standard);
	range.start + unit * (range.end - range.start)
}

/// All particles of one screensaver activation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Particles in draw order.
	pub particles: Vec<Particle>,
}

impl Scene {
	/// Generate a fresh scene of `config.particle_count` particles spread
	/// uniformly over `bounds`.
	pub fn generate<R: Rng + ?Sized>(
		rng: &mut R,
		bounds: Bounds,
		config: &ScreensaverConfig,
	) -> Self {
		let speed = -config.max_speed..config.max_speed;
		let particles = (0..config.particle_count)
			.map(|_| Particle {
				x: sample(rng, &(0.0..bounds.width)),
				y: sample(rng, &(0.0..bounds.height)),
				vx: sample(rng, &speed),
				vy: sample(rng, &speed),
				size: sample(rng, &config.size),
				color: Hsl::new(
					sample(rng, &(0.0..360.0)),
					config.saturation,
					config.lightness,
				),
				opacity: sample(rng, &config.opacity),
			})
			.collect();
		Self { particles }
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the scene has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advance every particle one frame and draw the result.
	///
	/// Particles are stepped and drawn one at a time; the neighbor lines are
	/// drawn afterwards from either this scene (lagged) or the returned one,
	/// depending on the configured [`LinkTiming`].
	pub fn advance<S: Surface + ?Sized>(
		&self,
		bounds: Bounds,
		surface: &mut S,
		config: &ScreensaverConfig,
	) -> Scene {
		let particles: Vec<Particle> = self
			.particles
			.iter()
			.map(|p| {
				let next = p.step(bounds);
				render::draw_particle(surface, &next);
				next
			})
			.collect();

		let linked = match config.link.timing {
			LinkTiming::Lagged => &self.particles,
			LinkTiming::Current => &particles,
		};
		render::draw_links(surface, linked, &config.link);

		Scene { particles }
	}
}

/// Index pairs `(i, j)`, `i < j`, of particles strictly closer than `max_distance`.
///
/// Brute force over all pairs, which is fine for a few dozen particles.
pub fn linked_pairs(
	particles: &[Particle],
	max_distance: f64,
) -> impl Iterator<Item = (usize, usize)> + '_ {
	particles.iter().enumerate().flat_map(move |(i, a)| {
		particles[i + 1..]
			.iter()
			.enumerate()
			.filter(move |(_, b)| a.distance(b) < max_distance)
			.map(move |(offset, _)| (i, i + 1 + offset))
	})
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use rstest::rstest;

	use super::*;
	use crate::components::screensaver::render::{Op, Recorder};

	fn moving(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			size: 1.5,
			color: Hsl::new(10.0, 70.0, 60.0),
			opacity: 0.8,
		}
	}

	#[rstest]
	#[case(1)]
	#[case(42)]
	#[case(2024)]
	fn generated_particles_respect_ranges(#[case] seed: u64) {
		let config = ScreensaverConfig::default();
		let bounds = Bounds::new(1280.0, 720.0);
		let scene = Scene::generate(&mut StdRng::seed_from_u64(seed), bounds, &config);

		assert_eq!(scene.len(), 50);
		for p in &scene.particles {
			assert!(bounds.contains(p.x, p.y));
			assert!((-1.0..1.0).contains(&p.vx));
			assert!((-1.0..1.0).contains(&p.vy));
			assert!((1.0..4.0).contains(&p.size));
			assert!((0.2..1.0).contains(&p.opacity));
			assert!((0.0..360.0).contains(&p.color.hue));
			assert_eq!(p.color.saturation, 70.0);
			assert_eq!(p.color.lightness, 60.0);
		}
	}

	#[test]
	fn generate_on_empty_viewport_pins_to_origin() {
		let scene = Scene::generate(
			&mut StdRng::seed_from_u64(3),
			Bounds::default(),
			&ScreensaverConfig::default(),
		);
		assert_eq!(scene.len(), 50);
		assert!(scene.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn regenerated_scenes_differ() {
		let config = ScreensaverConfig::default();
		let bounds = Bounds::new(800.0, 600.0);
		let mut rng = StdRng::seed_from_u64(9);
		let first = Scene::generate(&mut rng, bounds, &config);
		let second = Scene::generate(&mut rng, bounds, &config);
		assert_eq!(second.len(), 50);
		assert_ne!(first, second);
	}

	#[test]
	fn bounces_off_left_edge() {
		let next = moving(0.0, 50.0, -0.5, 0.0).step(Bounds::new(200.0, 100.0));
		assert_eq!(next.x, 0.0);
		assert_eq!(next.vx, 0.5);
	}

	#[test]
	fn bounces_off_right_edge() {
		let next = moving(200.0, 50.0, 0.3, 0.0).step(Bounds::new(200.0, 100.0));
		assert_eq!(next.x, 200.0);
		assert_eq!(next.vx, -0.3);
	}

	#[test]
	fn axes_reflect_independently() {
		let next = moving(50.0, 99.5, 0.25, 0.75).step(Bounds::new(200.0, 100.0));
		assert_eq!((next.x, next.vx), (50.25, 0.25));
		assert_eq!((next.y, next.vy), (100.0, -0.75));
	}

	#[test]
	fn step_keeps_appearance() {
		let p = moving(10.0, 10.0, 1.0, -1.0);
		let next = p.step(Bounds::new(100.0, 100.0));
		assert_eq!(next.size, p.size);
		assert_eq!(next.color, p.color);
		assert_eq!(next.opacity, p.opacity);
	}

	#[test]
	fn positions_stay_in_bounds_over_many_frames() {
		let config = ScreensaverConfig::default();
		let bounds = Bounds::new(320.0, 240.0);
		let mut scene = Scene::generate(&mut StdRng::seed_from_u64(5), bounds, &config);
		let mut rec = Recorder::default();
		for _ in 0..2_000 {
			scene = scene.advance(bounds, &mut rec, &config);
			rec.ops.clear();
			assert!(scene.particles.iter().all(|p| bounds.contains(p.x, p.y)));
		}
		assert_eq!(scene.len(), 50);
	}

	#[test]
	fn linked_pairs_are_unordered_and_unique() {
		let particles = vec![
			moving(0.0, 0.0, 0.0, 0.0),
			moving(50.0, 0.0, 0.0, 0.0),
			moving(140.0, 0.0, 0.0, 0.0),
		];
		let pairs: Vec<_> = linked_pairs(&particles, 100.0).collect();
		assert_eq!(pairs, vec![(0, 1), (1, 2)]);
	}

	#[test]
	fn advance_draws_circles_before_lines() {
		let config = ScreensaverConfig::default();
		let scene = Scene {
			particles: vec![moving(10.0, 10.0, 1.0, 0.0), moving(40.0, 10.0, -1.0, 0.0)],
		};
		let mut rec = Recorder::default();
		scene.advance(Bounds::new(100.0, 100.0), &mut rec, &config);

		let first_line = rec
			.ops
			.iter()
			.position(|op| matches!(op, Op::Line(..)))
			.expect("a line between close particles");
		let last_circle = rec
			.ops
			.iter()
			.rposition(|op| matches!(op, Op::Circle { .. }))
			.expect("circles drawn");
		assert!(last_circle < first_line);
		assert_eq!(rec.circles(), 2);
		assert_eq!(rec.ops[last_circle + 1], Op::Alpha(0.3));
	}

	#[test]
	fn lagged_links_use_previous_positions() {
		let config = ScreensaverConfig::default();
		let scene = Scene {
			particles: vec![moving(10.0, 10.0, 1.0, 0.0), moving(40.0, 10.0, -1.0, 0.0)],
		};
		let mut rec = Recorder::default();
		let next = scene.advance(Bounds::new(100.0, 100.0), &mut rec, &config);

		assert_eq!(next.particles[0].x, 11.0);
		assert_eq!(rec.lines(), vec![((10.0, 10.0), (40.0, 10.0))]);
	}

	#[test]
	fn current_links_use_updated_positions() {
		let mut config = ScreensaverConfig::default();
		config.link.timing = LinkTiming::Current;
		let scene = Scene {
			particles: vec![moving(10.0, 10.0, 1.0, 0.0), moving(40.0, 10.0, -1.0, 0.0)],
		};
		let mut rec = Recorder::default();
		scene.advance(Bounds::new(100.0, 100.0), &mut rec, &config);

		assert_eq!(rec.lines(), vec![((11.0, 10.0), (39.0, 10.0))]);
	}

	#[test]
	fn lag_can_link_pairs_that_just_separated() {
		let config = ScreensaverConfig::default();
		let scene = Scene {
			particles: vec![moving(0.5, 0.0, 0.0, 0.0), moving(100.0, 0.0, 1.0, 0.0)],
		};
		let mut rec = Recorder::default();
		let next = scene.advance(Bounds::new(500.0, 10.0), &mut rec, &config);

		assert_eq!(next.particles[1].x, 101.0);
		assert_eq!(rec.lines().len(), 1);
	}
}
