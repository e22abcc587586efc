//! The pixel bridge: engine frames onto the widget's paint surface
//!
//! The engine renders bottom scanline first; host toolkits paint row-major
//! from the top-left corner. The bridge flips whole rows with raw byte
//! copies into a reusable destination image, then draws that image through
//! the host's paint surface. No per-pixel format conversion happens here;
//! both sides already agree on 32-bit pixels.

use porthole_core::{OffscreenBuffer, PixelFrame};

use crate::error::{SurfaceError, WidgetError};

/// Bytes per pixel in both the engine frame and the output image.
pub const BYTES_PER_PIXEL: usize = 4;

/// Outcome of a paint pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    /// A frame was reoriented and drawn
    Painted,
    /// The engine has not produced a readable frame yet; nothing was drawn
    NoFrame,
}

/// Host-side drawable surface for one widget.
///
/// Mirrors an immediate-mode painter: acquire the paint context with
/// `begin`, draw, release it with `end`. The bridge guarantees `end` runs
/// exactly once per successful `begin`, draw failures included, so the
/// host's paint context can never leak open.
pub trait PaintSurface {
    /// Acquire the paint context.
    fn begin(&mut self) -> Result<(), SurfaceError>;

    /// Draw `image` with its top-left corner at (`x`, `y`).
    fn draw_image(&mut self, x: i32, y: i32, image: &OutputImage) -> Result<(), SurfaceError>;

    /// Release the paint context. Must tolerate being the only call after
    /// a failed draw.
    fn end(&mut self);
}

/// Reusable destination image the bridge copies engine frames into.
///
/// The backing buffer persists across paints and is reallocated only when
/// the source dimensions change, so steady-state painting allocates
/// nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl OutputImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw 32-bit pixels, row-major from the top-left corner.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True until the first frame has been copied in.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Match the stored dimensions, keeping the existing allocation when
    /// they already agree.
    fn ensure_size(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.data = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
        self.width = width;
        self.height = height;
    }
}

/// Per-widget pixel transfer between the engine buffer and paint surface.
#[derive(Debug, Default)]
pub struct PixelBridge {
    image: OutputImage,
}

impl PixelBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// The image drawn on the most recent paint.
    pub fn image(&self) -> &OutputImage {
        &self.image
    }

    /// Pull the engine's current frame, reorient it, and draw it with its
    /// top-left corner at the widget origin.
    ///
    /// A buffer with no readable frame yet is a quiet no-op; the paint
    /// context is not even acquired. Once acquired, the context is
    /// released on every path out.
    pub fn present<B, S>(
        &mut self,
        buffer: &B,
        surface: &mut S,
    ) -> Result<PaintOutcome, WidgetError>
    where
        B: OffscreenBuffer,
        S: PaintSurface,
    {
        if !buffer.has_frame() {
            return Ok(PaintOutcome::NoFrame);
        }
        let Some(frame) = buffer.frame() else {
            return Ok(PaintOutcome::NoFrame);
        };
        self.reorient(&frame)?;

        let mut scope = PaintScope::begin(surface)?;
        scope.draw_image(0, 0, &self.image)?;
        Ok(PaintOutcome::Painted)
    }

    /// Copy `frame` into the output image, flipping the engine's
    /// bottom-first row order to the toolkit's top-first order.
    fn reorient(&mut self, frame: &PixelFrame<'_>) -> Result<(), WidgetError> {
        let width = frame.width as usize;
        let height = frame.height as usize;
        let expected = width * height * BYTES_PER_PIXEL;
        if frame.data.len() != expected {
            return Err(WidgetError::FrameSize {
                width: frame.width,
                height: frame.height,
                expected,
                actual: frame.data.len(),
            });
        }

        self.image.ensure_size(frame.width, frame.height);
        let stride = width * BYTES_PER_PIXEL;
        for row in 0..height {
            let src = (height - 1 - row) * stride;
            let dst = row * stride;
            self.image.data[dst..dst + stride]
                .copy_from_slice(&frame.data[src..src + stride]);
        }
        Ok(())
    }
}

/// Scope over a begun paint surface; `end` runs on drop.
struct PaintScope<'a, S: PaintSurface> {
    surface: &'a mut S,
}

impl<'a, S: PaintSurface> PaintScope<'a, S> {
    fn begin(surface: &'a mut S) -> Result<Self, SurfaceError> {
        surface.begin()?;
        Ok(Self { surface })
    }

    fn draw_image(&mut self, x: i32, y: i32, image: &OutputImage) -> Result<(), SurfaceError> {
        self.surface.draw_image(x, y, image)
    }
}

impl<S: PaintSurface> Drop for PaintScope<'_, S> {
    fn drop(&mut self) {
        self.surface.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestBuffer {
        width: u32,
        height: u32,
        data: Vec<u8>,
        ready: bool,
    }

    impl TestBuffer {
        fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
            Self {
                width,
                height,
                data,
                ready: true,
            }
        }

        fn not_ready() -> Self {
            Self {
                width: 0,
                height: 0,
                data: Vec::new(),
                ready: false,
            }
        }
    }

    impl OffscreenBuffer for TestBuffer {
        fn has_frame(&self) -> bool {
            self.ready
        }

        fn frame(&self) -> Option<PixelFrame<'_>> {
            self.ready.then(|| PixelFrame {
                data: &self.data,
                width: self.width,
                height: self.height,
            })
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
            self.data = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
        }
    }

    #[derive(Default)]
    struct TestSurface {
        begun: u32,
        ended: u32,
        drawn: Vec<(i32, i32, u32, u32)>,
        open: bool,
        fail_begin: bool,
        fail_draw: bool,
    }

    impl PaintSurface for TestSurface {
        fn begin(&mut self) -> Result<(), SurfaceError> {
            if self.fail_begin {
                return Err(SurfaceError::new("begin refused"));
            }
            self.begun += 1;
            self.open = true;
            Ok(())
        }

        fn draw_image(
            &mut self,
            x: i32,
            y: i32,
            image: &OutputImage,
        ) -> Result<(), SurfaceError> {
            if self.fail_draw {
                return Err(SurfaceError::new("draw refused"));
            }
            self.drawn.push((x, y, image.width(), image.height()));
            Ok(())
        }

        fn end(&mut self) {
            self.ended += 1;
            self.open = false;
        }
    }

    /// A frame with one marker pixel, stored in the engine's
    /// bottom-first row order so the marker sits at scene top-left.
    fn marked_frame(width: u32, height: u32) -> Vec<u8> {
        let stride = width as usize * BYTES_PER_PIXEL;
        let mut data = vec![0u8; stride * height as usize];
        // Scene top row is the last row in memory.
        let top_row = (height as usize - 1) * stride;
        data[top_row..top_row + BYTES_PER_PIXEL].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        data
    }

    #[test]
    fn test_missing_frame_is_a_quiet_noop() {
        let buffer = TestBuffer::not_ready();
        let mut surface = TestSurface::default();
        let mut bridge = PixelBridge::new();

        let outcome = bridge.present(&buffer, &mut surface).unwrap();

        assert_eq!(outcome, PaintOutcome::NoFrame);
        assert_eq!(surface.begun, 0);
        assert!(bridge.image().is_empty());
    }

    #[test]
    fn test_marker_lands_at_top_left() {
        let buffer = TestBuffer::new(3, 2, marked_frame(3, 2));
        let mut surface = TestSurface::default();
        let mut bridge = PixelBridge::new();

        let outcome = bridge.present(&buffer, &mut surface).unwrap();

        assert_eq!(outcome, PaintOutcome::Painted);
        let image = bridge.image();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(&image.data()[..BYTES_PER_PIXEL], &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_rows_are_flipped_not_rotated() {
        // Two rows of distinct bytes; the flip swaps rows but keeps the
        // byte order inside each row.
        let width = 2u32;
        let stride = width as usize * BYTES_PER_PIXEL;
        let mut data = vec![0u8; stride * 2];
        data[..stride].fill(0x11); // bottom scene row, first in memory
        data[stride..].fill(0x22); // top scene row, last in memory

        let buffer = TestBuffer::new(width, 2, data);
        let mut surface = TestSurface::default();
        let mut bridge = PixelBridge::new();
        bridge.present(&buffer, &mut surface).unwrap();

        let image = bridge.image().data();
        assert!(image[..stride].iter().all(|&b| b == 0x22));
        assert!(image[stride..].iter().all(|&b| b == 0x11));
    }

    #[test]
    fn test_output_buffer_is_reused_across_frames() {
        let buffer = TestBuffer::new(4, 4, vec![7; 4 * 4 * BYTES_PER_PIXEL]);
        let mut surface = TestSurface::default();
        let mut bridge = PixelBridge::new();

        bridge.present(&buffer, &mut surface).unwrap();
        let first_ptr = bridge.image().data().as_ptr();

        bridge.present(&buffer, &mut surface).unwrap();
        let second_ptr = bridge.image().data().as_ptr();

        assert_eq!(first_ptr, second_ptr);
        assert_eq!(surface.drawn.len(), 2);
    }

    #[test]
    fn test_dimension_change_reallocates() {
        let mut buffer = TestBuffer::new(4, 4, vec![7; 4 * 4 * BYTES_PER_PIXEL]);
        let mut surface = TestSurface::default();
        let mut bridge = PixelBridge::new();

        bridge.present(&buffer, &mut surface).unwrap();
        assert_eq!(bridge.image().width(), 4);

        buffer.resize(2, 6);
        bridge.present(&buffer, &mut surface).unwrap();

        let image = bridge.image();
        assert_eq!((image.width(), image.height()), (2, 6));
        assert_eq!(image.data().len(), 2 * 6 * BYTES_PER_PIXEL);
    }

    #[test]
    fn test_short_frame_is_rejected_before_painting() {
        let buffer = TestBuffer::new(4, 4, vec![0; 7]);
        let mut surface = TestSurface::default();
        let mut bridge = PixelBridge::new();

        let result = bridge.present(&buffer, &mut surface);

        assert!(matches!(
            result,
            Err(WidgetError::FrameSize {
                width: 4,
                height: 4,
                expected: 64,
                actual: 7,
            })
        ));
        assert_eq!(surface.begun, 0);
    }

    #[test]
    fn test_draw_failure_still_releases_the_context() {
        let buffer = TestBuffer::new(2, 2, vec![0; 2 * 2 * BYTES_PER_PIXEL]);
        let mut surface = TestSurface {
            fail_draw: true,
            ..Default::default()
        };
        let mut bridge = PixelBridge::new();

        let result = bridge.present(&buffer, &mut surface);

        assert!(matches!(result, Err(WidgetError::Surface(_))));
        assert_eq!(surface.begun, 1);
        assert_eq!(surface.ended, 1);
        assert!(!surface.open);
    }

    #[test]
    fn test_begin_failure_never_calls_end() {
        let buffer = TestBuffer::new(2, 2, vec![0; 2 * 2 * BYTES_PER_PIXEL]);
        let mut surface = TestSurface {
            fail_begin: true,
            ..Default::default()
        };
        let mut bridge = PixelBridge::new();

        let result = bridge.present(&buffer, &mut surface);

        assert!(matches!(result, Err(WidgetError::Surface(_))));
        assert_eq!(surface.ended, 0);
    }

    #[test]
    fn test_image_drawn_at_origin() {
        let buffer = TestBuffer::new(2, 2, vec![0; 2 * 2 * BYTES_PER_PIXEL]);
        let mut surface = TestSurface::default();
        let mut bridge = PixelBridge::new();

        bridge.present(&buffer, &mut surface).unwrap();

        assert_eq!(surface.drawn, vec![(0, 0, 2, 2)]);
    }
}
