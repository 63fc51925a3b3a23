//! Visibility lifecycle and frame-loop state.
//!
//! [`Lifecycle`] is the two-state controller deciding whether the screensaver
//! or the landing page is shown. [`FrameTask`] is one activation's render loop:
//! it owns the scene and the drawing surface and is driven one frame at a time
//! by whatever schedules repaints, stopping for good once its [`FrameControl`]
//! is cancelled.

use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use super::config::ScreensaverConfig;
use super::particles::Scene;
use super::render::Surface;
use super::types::Bounds;

/// Visibility of the screensaver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Screensaver shown; frame loop, dismiss timer and resize listener armed.
	Active,
	/// Landing page shown; nothing scheduled.
	Inactive,
}

/// What ended an activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
	/// Pointer click on the overlay or canvas.
	Click,
	/// The auto-dismiss timer expired.
	Timeout,
}

impl fmt::Display for DismissReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DismissReason::Click => f.write_str("click"),
			DismissReason::Timeout => f.write_str("timeout"),
		}
	}
}

/// Two-state visibility controller. Starts [`Phase::Active`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lifecycle {
	phase: Phase,
	activations: u32,
	last_dismissal: Option<DismissReason>,
}

impl Default for Lifecycle {
	fn default() -> Self {
		Self::new()
	}
}

impl Lifecycle {
	/// Starts active, as on first page load.
	pub fn new() -> Self {
		Self {
			phase: Phase::Active,
			activations: 1,
			last_dismissal: None,
		}
	}

	/// Current phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Whether the screensaver is showing.
	pub fn is_active(&self) -> bool {
		self.phase == Phase::Active
	}

	/// How many times the screensaver has been entered, including the initial one.
	pub fn activations(&self) -> u32 {
		self.activations
	}

	/// What ended the most recent activation, if any.
	pub fn last_dismissal(&self) -> Option<DismissReason> {
		self.last_dismissal
	}

	/// Active -> Inactive. Returns `false` (and changes nothing) when already inactive.
	pub fn dismiss(&mut self, reason: DismissReason) -> bool {
		if self.phase != Phase::Active {
			return false;
		}
		self.phase = Phase::Inactive;
		self.last_dismissal = Some(reason);
		true
	}

	/// Inactive -> Active. Returns `false` when already active.
	pub fn restart(&mut self) -> bool {
		if self.phase != Phase::Inactive {
			return false;
		}
		self.phase = Phase::Active;
		self.activations += 1;
		true
	}
}

/// Externally held cancellation flag for a frame loop.
///
/// Clones share state. Thread-safe so it can live in cleanup hooks that demand
/// `Send + Sync`, even though everything runs on the UI thread.
#[derive(Clone, Debug, Default)]
pub struct FrameControl {
	inner: Arc<ControlInner>,
}

#[derive(Debug, Default)]
struct ControlInner {
	cancelled: AtomicBool,
	frames: AtomicU64,
}

impl FrameControl {
	/// Stop the loop. Returns `true` only for the call that actually cancelled.
	pub fn cancel(&self) -> bool {
		!self.inner.cancelled.swap(true, Ordering::SeqCst)
	}

	pub fn is_cancelled(&self) -> bool {
		self.inner.cancelled.load(Ordering::SeqCst)
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.inner.frames.load(Ordering::Relaxed)
	}

	fn record_frame(&self) {
		self.inner.frames.fetch_add(1, Ordering::Relaxed);
	}
}

/// Result of one frame; the scheduler only requests another frame on `Continue`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
	/// A frame was drawn; schedule the next.
	Continue,
	/// The loop is over.
	Stopped,
}

/// One activation's render loop.
pub struct FrameTask<S: Surface> {
	scene: Scene,
	surface: S,
	config: ScreensaverConfig,
	control: FrameControl,
}

impl<S: Surface> FrameTask<S> {
	/// Loop over `scene`, drawing to `surface` until `control` is cancelled.
	pub fn new(scene: Scene, surface: S, config: ScreensaverConfig, control: FrameControl) -> Self {
		Self {
			scene,
			surface,
			config,
			control,
		}
	}

	/// Clear the surface, advance the scene and draw it.
	///
	/// Does nothing once the control is cancelled.
	pub fn run_frame(&mut self, bounds: Bounds) -> FrameOutcome {
		if self.control.is_cancelled() {
			return FrameOutcome::Stopped;
		}
		self.surface.clear(bounds);
		self.scene = self.scene.advance(bounds, &mut self.surface, &self.config);
		self.control.record_frame();
		FrameOutcome::Continue
	}

	/// Run one frame of a task the scheduler holds only weakly.
	///
	/// Stops once the owner has dropped the task.
	pub fn run_shared(task: &Weak<RefCell<Self>>, bounds: Bounds) -> FrameOutcome {
		match task.upgrade() {
			Some(task) => task.borrow_mut().run_frame(bounds),
			None => FrameOutcome::Stopped,
		}
	}

	/// Scene as of the last frame.
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	/// Cancellation handle shared with the owner.
	pub fn control(&self) -> &FrameControl {
		&self.control
	}

	#[cfg(test)]
	pub(crate) fn surface(&self) -> &S {
		&self.surface
	}

	#[cfg(test)]
	pub(crate) fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}
