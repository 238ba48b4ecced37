use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;
use thiserror::Error;

use vm8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vm8::FrameBuffer;

/// Window size multiplier used when the caller has no preference.
pub const DEFAULT_SCALE: u32 = 10;

const TITLE: &str = "vm8";

/// SDL2 reports failures as strings; this keeps the step that failed alongside them.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("unable to initialise video: {0}")]
    Video(String),

    #[error("unable to create window: {0}")]
    Window(String),

    #[error("unable to render frame: {0}")]
    Render(String),
}

/// # Display
/// The CHIP-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a flat, row-major array.
/// The display only gets a call to `render` when the machine reports that its frame changed.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::Video)?;
        let window = video_subsystem
            .window(
                TITLE,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| DisplayError::Window(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| DisplayError::Window(e.to_string()))?;

        Ok(Display { canvas })
    }

    /// Formats a FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB
    /// pixels. Since the FrameBuffer is already flat and row-major this:
    /// - Triplicates each cell to represent the RGB values of each pixel
    /// - Multiplies each value by 255 to convert from a binary state to 0-255 intensity
    ///
    /// # Arguments
    /// * `frame` a FrameBuffer of 0/1 cells
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|&cell| std::iter::repeat(cell * 255).take(3))
            .collect()
    }

    /// Formats the FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a FrameBuffer of 0/1 cells
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| DisplayError::Render(e.to_string()))?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&pixels);
            })
            .map_err(DisplayError::Render)?;

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Render)?;
        self.canvas.present();
        Ok(())
    }
}
