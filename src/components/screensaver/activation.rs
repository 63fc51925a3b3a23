//! Everything one screensaver activation has scheduled, and its teardown.
//!
//! An [`Activation`] owns the pending animation frame, the auto-dismiss timer
//! and the resize listener together with the [`FrameControl`] of the frame
//! loop. Dismissal cancels the loop and releases every handle; only the first
//! dismissal is reported, whichever of click or timer gets there first.

use std::sync::Mutex;

use log::info;

use super::state::{DismissReason, FrameControl};

/// A scheduled callback or listener that can be torn down.
pub trait Release {
	/// Cancel or detach. Consumes the handle.
	fn release(self);
}

/// Handles held for a single activation.
pub struct Activation<F, T, L> {
	control: FrameControl,
	frame: Mutex<Option<F>>,
	timer: Mutex<Option<T>>,
	resize: Mutex<Option<L>>,
}

impl<F: Release, T: Release, L: Release> Activation<F, T, L> {
	/// Empty activation driving the loop behind `control`.
	pub fn new(control: FrameControl) -> Self {
		Self {
			control,
			frame: Mutex::new(None),
			timer: Mutex::new(None),
			resize: Mutex::new(None),
		}
	}

	/// Cancellation handle of the frame loop.
	pub fn control(&self) -> &FrameControl {
		&self.control
	}

	/// Track the next pending animation frame.
	pub fn set_frame(&self, handle: F) {
		self.store(&self.frame, handle);
	}

	/// Track the auto-dismiss timer.
	pub fn set_timer(&self, handle: T) {
		self.store(&self.timer, handle);
	}

	/// Track the resize listener.
	pub fn set_resize(&self, handle: L) {
		self.store(&self.resize, handle);
	}

	/// Stop the loop and release all handles.
	///
	/// `notify` runs only for the first dismissal. Returns whether it ran.
	pub fn dismiss(&self, reason: DismissReason, notify: impl FnOnce(DismissReason)) -> bool {
		let first = self.control.cancel();
		self.release();
		if first {
			info!(
				"disco: screensaver dismissed by {} after {} frames",
				reason,
				self.control.frames()
			);
			notify(reason);
		}
		first
	}

	/// Stop the loop and release all handles without reporting a dismissal.
	pub fn teardown(&self) {
		self.control.cancel();
		self.release();
	}

	/// Release whatever is still held. Handles are released at most once.
	pub fn release(&self) {
		release_slot(&self.frame);
		release_slot(&self.timer);
		release_slot(&self.resize);
	}

	// Handles arriving after cancellation are released on the spot.
	fn store<H: Release>(&self, slot: &Mutex<Option<H>>, handle: H) {
		if self.control.is_cancelled() {
			handle.release();
			return;
		}
		match slot.lock() {
			Ok(mut slot) => *slot = Some(handle),
			Err(_) => handle.release(),
		}
	}
}

fn release_slot<H: Release>(slot: &Mutex<Option<H>>) {
	let handle = slot.lock().ok().and_then(|mut slot| slot.take());
	if let Some(handle) = handle {
		handle.release();
	}
}
