//! Capability traits a render engine exposes to its embedder
//!
//! The widget side holds an [`EngineWorld`] and reaches the engine only
//! through these traits, so any engine that can publish named events and
//! surface an off-screen pixel buffer can sit behind a Porthole widget.

use crate::event::EventPayload;

/// Film size of the engine camera's lens, in lens units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilmSize {
    pub width: f32,
    pub height: f32,
}

impl FilmSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Borrowed snapshot of the engine's off-screen render target.
///
/// Layout is the engine's native convention: `height` rows of `width`
/// pixels, 4 bytes per pixel, bottom scanline first. Consumers that need
/// the host toolkit's top-left origin must reorient.
#[derive(Clone, Copy, Debug)]
pub struct PixelFrame<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

/// The engine's global named-event channel.
///
/// Engine-side handlers subscribe to names like `"control-mouse1"` or
/// `"mouse-move"`; the embedding widget publishes into the same namespace
/// without knowing who listens.
pub trait EventBus {
    /// Publish `name` with an optional payload to engine-side handlers.
    fn send(&self, name: &str, payload: Option<EventPayload>);
}

/// Film-size access on the engine camera's lens.
pub trait CameraLens {
    fn film_size(&self) -> FilmSize;
    fn set_film_size(&mut self, size: FilmSize);
}

/// The engine's off-screen render buffer.
pub trait OffscreenBuffer {
    /// Whether a readable pixel snapshot exists yet.
    ///
    /// False until the engine has rendered its first frame into the
    /// buffer; the embedder must not ask for a frame before this is true.
    fn has_frame(&self) -> bool;

    /// Borrow the current pixel snapshot, if any.
    fn frame(&self) -> Option<PixelFrame<'_>>;

    /// Resize the render target to new pixel dimensions.
    fn resize(&mut self, width: u32, height: u32);
}

/// Aggregate handle to the engine world an embedded widget drives.
///
/// The widget owns one of these and never reaches around it; stepping the
/// scheduler, publishing events, and reading frames all go through here.
pub trait EngineWorld {
    type Bus: EventBus;
    type Lens: CameraLens;
    type Buffer: OffscreenBuffer;

    fn bus(&self) -> &Self::Bus;
    fn lens(&self) -> &Self::Lens;
    fn lens_mut(&mut self) -> &mut Self::Lens;
    fn buffer(&self) -> &Self::Buffer;
    fn buffer_mut(&mut self) -> &mut Self::Buffer;

    /// Advance the engine's cooperative task scheduler by one step.
    fn step(&mut self);
}
