//! The embeddable engine viewport widget
//!
//! [`PortholeWidget`] is the toolkit-agnostic half of a host widget: a
//! thin adapter in the host toolkit forwards its native callbacks (mouse,
//! key, wheel, resize, paint) to the matching `on_*` methods here and
//! drives [`poll`](PortholeWidget::poll) from its event loop or timer.
//! Everything engine-shaped stays behind the [`EngineWorld`] traits.

use std::time::Instant;

use porthole_core::{CameraLens, EngineWorld, FilmSize, OffscreenBuffer};
use porthole_input::{
    EventDispatcher, InputEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent,
    WheelEvent,
};

use crate::bridge::{PaintOutcome, PaintSurface, PixelBridge};
use crate::error::WidgetError;
use crate::pump::{FramePump, RepaintFlag, DEFAULT_FPS};

/// Smallest sensible viewport size, in pixels.
pub const MIN_SIZE_HINT: (u32, u32) = (400, 300);

/// Construction parameters for a [`PortholeWidget`].
#[derive(Clone, Copy, Debug)]
pub struct WidgetConfig {
    /// Refresh rate driving the frame pump
    pub fps: u32,
    /// Echo resolved event names to the diagnostic log
    pub debug: bool,
    /// Widget size at construction; the baseline for resize scaling
    pub initial_size: (u32, u32),
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            debug: false,
            initial_size: MIN_SIZE_HINT,
        }
    }
}

/// An engine viewport embedded in a host toolkit's widget tree.
///
/// The widget owns the engine world handle, the frame pump, and the pixel
/// bridge. Input flows host to engine through the dispatcher; pixels flow
/// engine to host through the bridge; the pump keeps the engine stepping
/// between the two.
pub struct PortholeWidget<W: EngineWorld> {
    world: W,
    config: WidgetConfig,
    dispatcher: EventDispatcher,
    pump: FramePump,
    repaint: RepaintFlag,
    bridge: PixelBridge,
    initial_film_size: FilmSize,
}

impl<W: EngineWorld> PortholeWidget<W> {
    /// Build the widget around `world` and start its frame pump.
    ///
    /// The lens film size and widget size at construction become the
    /// baseline that later resizes scale against, so a zero initial size
    /// is rejected here instead of dividing by zero later.
    pub fn new(world: W, config: WidgetConfig) -> Result<Self, WidgetError> {
        let (width, height) = config.initial_size;
        if width == 0 || height == 0 {
            return Err(WidgetError::EmptyInitialSize { width, height });
        }

        let initial_film_size = world.lens().film_size();
        let repaint = RepaintFlag::new();
        let pump = FramePump::new(config.fps, repaint.handle());
        tracing::debug!(
            "Porthole widget created: {}x{} at {} fps",
            width,
            height,
            config.fps.max(1)
        );

        Ok(Self {
            world,
            config,
            dispatcher: EventDispatcher::with_debug(config.debug),
            pump,
            repaint,
            bridge: PixelBridge::new(),
            initial_film_size,
        })
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// The construction parameters, as given.
    pub fn config(&self) -> WidgetConfig {
        self.config
    }

    /// The lens film size snapshotted at construction.
    pub fn initial_film_size(&self) -> FilmSize {
        self.initial_film_size
    }

    // ========================================================================
    // Input callbacks
    // ========================================================================

    pub fn on_mouse_press(&mut self, button: MouseButton, modifiers: Modifiers, x: i32, y: i32) {
        self.handle_input(InputEvent::Mouse(MouseEvent::ButtonPressed {
            button,
            modifiers,
            x,
            y,
        }));
    }

    pub fn on_mouse_move(&mut self, x: i32, y: i32) {
        self.handle_input(InputEvent::Mouse(MouseEvent::Moved { x, y }));
    }

    pub fn on_mouse_release(&mut self, button: MouseButton, modifiers: Modifiers, x: i32, y: i32) {
        self.handle_input(InputEvent::Mouse(MouseEvent::ButtonReleased {
            button,
            modifiers,
            x,
            y,
        }));
    }

    pub fn on_wheel(&mut self, delta: i32, modifiers: Modifiers) {
        self.handle_input(InputEvent::Wheel(WheelEvent { delta, modifiers }));
    }

    pub fn on_key_press(&mut self, key: Key, modifiers: Modifiers) {
        self.handle_input(InputEvent::Keyboard(KeyboardEvent {
            key,
            state: KeyState::Pressed,
            modifiers,
        }));
    }

    pub fn on_key_release(&mut self, key: Key, modifiers: Modifiers) {
        self.handle_input(InputEvent::Keyboard(KeyboardEvent {
            key,
            state: KeyState::Released,
            modifiers,
        }));
    }

    /// Route one host input event onto the engine bus.
    ///
    /// Unmapped input is logged and swallowed here, at the host boundary;
    /// it must never unwind into the toolkit's event loop, and the widget
    /// stays interactive for the next event.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Err(error) = self.dispatcher.dispatch(self.world.bus(), &event) {
            tracing::warn!("Ignoring input without an engine mapping: {}", error);
        }
    }

    // ========================================================================
    // Scheduling
    // ========================================================================

    /// Fire every pump tick due at `now`; each tick steps the engine's
    /// task scheduler once and requests a repaint. Returns the tick count.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Self { pump, world, .. } = self;
        pump.poll(now, || world.step())
    }

    /// When the host should call [`poll`](Self::poll) next, or `None`
    /// while the pump is stopped.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pump.next_deadline()
    }

    /// Check and clear the repaint request raised by pump ticks.
    pub fn take_repaint_request(&self) -> bool {
        self.repaint.take()
    }

    pub fn is_running(&self) -> bool {
        self.pump.is_running()
    }

    /// Stop the pump. The widget keeps dispatching input and painting on
    /// demand; it just no longer steps the engine.
    pub fn stop(&mut self) {
        self.pump.stop();
    }

    /// Restart a stopped pump.
    pub fn start(&mut self) {
        self.pump.start();
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// React to the host resizing the widget to `width` x `height` pixels.
    ///
    /// The lens film size scales proportionally against the construction
    /// baseline, each axis independently, and the off-screen buffer is
    /// resized to the new pixel dimensions. Nothing is clamped or
    /// letterboxed; non-uniform scaling distorts, exactly as asked.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        let (initial_width, initial_height) = self.config.initial_size;
        let film = FilmSize {
            width: self.initial_film_size.width * width as f32 / initial_width as f32,
            height: self.initial_film_size.height * height as f32 / initial_height as f32,
        };
        self.world.lens_mut().set_film_size(film);
        self.world.buffer_mut().resize(width, height);
    }

    /// Smallest size the host layout should shrink the widget to.
    pub fn minimum_size_hint(&self) -> (u32, u32) {
        MIN_SIZE_HINT
    }

    // ========================================================================
    // Painting
    // ========================================================================

    /// Blit the engine's current frame onto `surface`.
    ///
    /// Quietly paints nothing while the engine has not rendered a frame
    /// yet, which is the normal state for the first few events after
    /// construction.
    pub fn paint<S: PaintSurface>(&mut self, surface: &mut S) -> Result<PaintOutcome, WidgetError> {
        self.bridge.present(self.world.buffer(), surface)
    }
}
