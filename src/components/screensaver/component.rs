//! Leptos component hosting the screensaver canvas.
//!
//! On mount the canvas is sized to the viewport, a fresh scene is generated and
//! a frame loop is driven through `requestAnimationFrame`. The component also
//! arms the auto-dismiss timer and a window resize listener. All of these are
//! released on dismissal and again on unmount; releasing twice is a no-op.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, error, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::activation::{Activation, Release};
use super::config::ScreensaverConfig;
use super::error::{SurfaceError, describe};
use super::particles::Scene;
use super::state::{DismissReason, FrameControl, FrameOutcome, FrameTask};
use super::types::Bounds;

type CanvasTask = Rc<RefCell<FrameTask<CanvasRenderingContext2d>>>;

const OVERLAY_STYLE: &str = "position: fixed; inset: 0; background: #000; cursor: pointer; overflow: hidden;";
const CANVAS_STYLE: &str = "display: block;";
const TEXT_STYLE: &str = "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); \
	color: #fff; text-align: center; pointer-events: none;";

type WebActivation = Activation<AnimationFrameRequestHandle, TimeoutHandle, WindowListenerHandle>;

impl Release for AnimationFrameRequestHandle {
	fn release(self) {
		self.cancel();
	}
}

impl Release for TimeoutHandle {
	fn release(self) {
		self.clear();
	}
}

impl Release for WindowListenerHandle {
	fn release(self) {
		self.remove();
	}
}

/// Full-viewport particle screensaver.
///
/// Emits `on_dismiss` once per click or when `config.dismiss_after` elapses.
/// The owner is expected to unmount the component in response.
#[component]
pub fn Screensaver(
	#[prop(into)] on_dismiss: Callback<DismissReason>,
	#[prop(optional)] config: ScreensaverConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let activation: Arc<WebActivation> = Arc::new(Activation::new(FrameControl::default()));
	let hint = format!(
		"Click anywhere or wait {} seconds to continue",
		config.dismiss_after_secs()
	);

	let dismiss = {
		let activation = activation.clone();
		move |reason: DismissReason| {
			activation.dismiss(reason, |reason| on_dismiss.run(reason));
		}
	};

	let on_timeout = dismiss.clone();
	match set_timeout_with_handle(
		move || on_timeout(DismissReason::Timeout),
		config.dismiss_after,
	) {
		Ok(handle) => activation.set_timer(handle),
		Err(err) => warn!("disco: {}", SurfaceError::schedule("dismiss timer", err)),
	}

	let resize = window_event_listener(ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match fit_to_viewport(&canvas) {
			Ok(bounds) => debug!("disco: canvas resized to {}x{}", bounds.width, bounds.height),
			Err(err) => warn!("disco: resize ignored: {}", err),
		}
	});
	activation.set_resize(resize);

	{
		let activation = activation.clone();
		let config = config.clone();
		let started = Cell::new(false);
		// Sole strong reference; the frame callback only holds a `Weak`.
		let task: RefCell<Option<CanvasTask>> = RefCell::new(None);
		Effect::new(move |_| {
			let Some(canvas) = canvas_ref.get() else {
				return;
			};
			if started.replace(true) {
				return;
			}
			let canvas: HtmlCanvasElement = canvas.into();
			match start(&canvas, &config, &activation) {
				Ok(owned) => *task.borrow_mut() = Some(owned),
				Err(err) => error!("disco: screensaver cannot animate: {}", err),
			}
		});
	}

	{
		let activation = activation.clone();
		on_cleanup(move || activation.teardown());
	}

	let on_click = move |_: MouseEvent| dismiss(DismissReason::Click);

	view! {
		<div class="screensaver" style=OVERLAY_STYLE on:click=on_click>
			<canvas node_ref=canvas_ref class="screensaver-canvas" style=CANVAS_STYLE />
			<div class="screensaver-text" style=TEXT_STYLE>
				<h1>"Welcome to Disco Test"</h1>
				<p>{hint}</p>
			</div>
		</div>
	}
}

/// Size the canvas, build the scene and request the first frame.
fn start(
	canvas: &HtmlCanvasElement,
	config: &ScreensaverConfig,
	activation: &Arc<WebActivation>,
) -> Result<CanvasTask, SurfaceError> {
	let bounds = fit_to_viewport(canvas)?;
	let ctx = canvas_context(canvas)?;
	let scene = Scene::generate(&mut rand::thread_rng(), bounds, config);
	info!(
		"disco: screensaver activated with {} particles on {}x{}",
		scene.len(),
		bounds.width,
		bounds.height
	);

	let task: CanvasTask = Rc::new(RefCell::new(FrameTask::new(
		scene,
		ctx,
		config.clone(),
		activation.control().clone(),
	)));
	schedule_frame(Rc::downgrade(&task), canvas.clone(), activation.clone())?;
	Ok(task)
}

/// Request one animation frame; the frame requests the next one while the
/// task keeps returning [`FrameOutcome::Continue`] and its owner keeps it alive.
fn schedule_frame(
	task: Weak<RefCell<FrameTask<CanvasRenderingContext2d>>>,
	canvas: HtmlCanvasElement,
	activation: Arc<WebActivation>,
) -> Result<(), SurfaceError> {
	let pending = activation.clone();
	let handle = request_animation_frame_with_handle(move || {
		let outcome = FrameTask::run_shared(&task, canvas_bounds(&canvas));
		if outcome == FrameOutcome::Continue {
			if let Err(err) = schedule_frame(task, canvas, activation) {
				warn!("disco: frame loop stopped: {}", err);
			}
		}
	})
	.map_err(|err| SurfaceError::schedule("animation frame", err))?;
	pending.set_frame(handle);
	Ok(())
}

/// Current viewport size in CSS pixels.
pub fn viewport_bounds() -> Result<Bounds, SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let read = |value: Result<JsValue, JsValue>| {
		value
			.ok()
			.and_then(|v| v.as_f64())
			.ok_or(SurfaceError::ViewportUnavailable)
	};
	Ok(Bounds::new(
		read(window.inner_width())?,
		read(window.inner_height())?,
	))
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> Result<Bounds, SurfaceError> {
	let bounds = viewport_bounds()?;
	canvas.set_width(bounds.width as u32);
	canvas.set_height(bounds.height as u32);
	Ok(canvas_bounds(canvas))
}

fn canvas_bounds(canvas: &HtmlCanvasElement) -> Bounds {
	Bounds::new(canvas.width() as f64, canvas.height() as f64)
}

/// The canvas' 2D context.
pub fn canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|err| SurfaceError::ContextUnavailable(describe(&err)))?
		.ok_or_else(|| SurfaceError::ContextUnavailable("no context returned".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::ContextUnavailable("unexpected context type".into()))
}
