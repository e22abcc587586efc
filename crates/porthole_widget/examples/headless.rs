//! Headless Viewport Example
//!
//! This example drives an embedded viewport against a scripted engine
//! world, with no GUI toolkit and no real render engine involved. It shows
//! the full widget life cycle in order:
//!
//! - input events translated and published on the engine bus
//! - a resize scaling the lens film size against the construction baseline
//! - pump ticks stepping the world and raising repaint requests
//! - frames flipped through the pixel bridge onto a console "surface"
//!
//! Run with: cargo run -p porthole_widget --example headless

use porthole_core::{
    CameraLens, EngineWorld, EventBus, EventPayload, FilmSize, OffscreenBuffer, PixelFrame,
};
use porthole_input::{Key, Modifiers, MouseButton};
use porthole_widget::{
    OutputImage, PaintOutcome, PaintSurface, PortholeWidget, SurfaceError, WidgetConfig,
    BYTES_PER_PIXEL,
};

/// Engine bus that prints every published event as a JSON line.
struct JsonBus;

impl EventBus for JsonBus {
    fn send(&self, name: &str, payload: Option<EventPayload>) {
        let payload = serde_json::to_string(&payload).expect("payload serializes");
        println!("bus   {name} {payload}");
    }
}

struct DemoLens {
    film: FilmSize,
}

impl CameraLens for DemoLens {
    fn film_size(&self) -> FilmSize {
        self.film
    }

    fn set_film_size(&mut self, size: FilmSize) {
        println!("lens  film size set to {:.2} x {:.2}", size.width, size.height);
        self.film = size;
    }
}

/// Off-screen buffer that fills itself with a row gradient on demand.
struct DemoBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
    rendered: bool,
}

impl DemoBuffer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            rendered: false,
        }
    }

    /// Pretend-render: every row gets its index as a byte value, bottom
    /// scanline first like a real engine target.
    fn render(&mut self) {
        let stride = self.width as usize * BYTES_PER_PIXEL;
        for (row, chunk) in self.data.chunks_mut(stride).enumerate() {
            chunk.fill(row as u8);
        }
        self.rendered = true;
    }
}

impl OffscreenBuffer for DemoBuffer {
    fn has_frame(&self) -> bool {
        self.rendered
    }

    fn frame(&self) -> Option<PixelFrame<'_>> {
        self.rendered.then(|| PixelFrame {
            data: &self.data,
            width: self.width,
            height: self.height,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
        self.rendered = false;
    }
}

struct DemoWorld {
    bus: JsonBus,
    lens: DemoLens,
    buffer: DemoBuffer,
    ticks: u32,
}

impl EngineWorld for DemoWorld {
    type Bus = JsonBus;
    type Lens = DemoLens;
    type Buffer = DemoBuffer;

    fn bus(&self) -> &Self::Bus {
        &self.bus
    }

    fn lens(&self) -> &Self::Lens {
        &self.lens
    }

    fn lens_mut(&mut self) -> &mut Self::Lens {
        &mut self.lens
    }

    fn buffer(&self) -> &Self::Buffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut Self::Buffer {
        &mut self.buffer
    }

    fn step(&mut self) {
        self.ticks += 1;
        self.buffer.render();
    }
}

/// Paint surface that reports draws instead of blitting anywhere.
#[derive(Default)]
struct ConsoleSurface {
    active: bool,
}

impl PaintSurface for ConsoleSurface {
    fn begin(&mut self) -> Result<(), SurfaceError> {
        self.active = true;
        Ok(())
    }

    fn draw_image(&mut self, x: i32, y: i32, image: &OutputImage) -> Result<(), SurfaceError> {
        assert!(self.active, "draw outside begin/end");
        let top = image.data().first().copied().unwrap_or_default();
        println!(
            "paint {}x{} at ({x}, {y}), top-left byte {top}",
            image.width(),
            image.height()
        );
        Ok(())
    }

    fn end(&mut self) {
        self.active = false;
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let world = DemoWorld {
        bus: JsonBus,
        lens: DemoLens {
            film: FilmSize::new(2.0, 1.5),
        },
        buffer: DemoBuffer::new(400, 300),
        ticks: 0,
    };

    let mut widget = PortholeWidget::new(
        world,
        WidgetConfig {
            debug: true,
            ..Default::default()
        },
    )?;

    // A short scripted input session.
    widget.on_mouse_press(MouseButton::Left, Modifiers::CONTROL, 10, 20);
    widget.on_mouse_move(12, 24);
    widget.on_mouse_release(MouseButton::Left, Modifiers::CONTROL, 12, 24);
    widget.on_key_press(Key::A, Modifiers::SHIFT | Modifiers::ALT);
    widget.on_key_release(Key::A, Modifiers::empty());
    widget.on_wheel(120, Modifiers::empty());
    // Unmapped input is logged and swallowed, never fatal.
    widget.on_key_press(Key::Other(0xfe03), Modifiers::empty());

    // Host grows the window; the film scales against the 400x300 baseline.
    widget.on_resize(800, 600);

    // Stand-in for the host's timer loop: jump straight to each deadline.
    let mut surface = ConsoleSurface::default();
    for _ in 0..3 {
        let deadline = widget.next_deadline().expect("pump is running");
        widget.poll(deadline);
        if widget.take_repaint_request() {
            match widget.paint(&mut surface)? {
                PaintOutcome::Painted => {}
                PaintOutcome::NoFrame => println!("paint skipped, no frame yet"),
            }
        }
    }

    println!("world stepped {} times", widget.world().ticks);
    widget.stop();
    assert!(widget.next_deadline().is_none());
    Ok(())
}
