use log::warn;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::WindowCanvas;
use thiserror::Error;

use vm8_core::constants::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vm8_core::{Frame, Palette};

use crate::color::parse_color;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl: {0}")]
    Sdl(String),
}

impl From<String> for DisplayError {
    fn from(err: String) -> Self {
        DisplayError::Sdl(err)
    }
}

/// # Display
/// The VM display is composed of 64x32 pixels, each either lit (foreground)
/// or unlit (background).
/// The display only gets a call to `render` when the VM emits a frame.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Creates a new window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "vm8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// Formats a frame as an SDL2 RGB24 texture and renders it.
    pub fn render(&mut self, frame: Frame<'_>) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = frame_to_rgb(frame);
        let row_len = DISPLAY_WIDTH * 3;
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (row, line) in pixels.chunks(row_len).enumerate() {
                buffer[row * pitch..row * pitch + row_len].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

/// Resolves both palette colors, falling back to the defaults for names that
/// don't parse.
fn resolve(palette: &Palette) -> (Color, Color) {
    let pick = |name: &str, fallback: &str| {
        parse_color(name).unwrap_or_else(|| {
            warn!("unknown color {:?}, using {}", name, fallback);
            parse_color(fallback).unwrap_or(Color::RGB(0, 0, 0))
        })
    };
    (
        pick(&palette.foreground, DEFAULT_FOREGROUND),
        pick(&palette.background, DEFAULT_BACKGROUND),
    )
}

/// Formats a frame as the bytes of an RGB24 texture.
///
/// An SDL2 texture is a 1D array of bytes that represent concatenated rows of RGB pixels;
/// each cell becomes the three bytes of either the foreground or background color.
fn frame_to_rgb(frame: Frame<'_>) -> Vec<u8> {
    let (on, off) = resolve(frame.palette);
    frame
        .buffer
        .cells()
        .iter()
        .flat_map(|&cell| {
            let color = if cell == 1 { on } else { off };
            vec![color.r, color.g, color.b]
        })
        .collect()
}
