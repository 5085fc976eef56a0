use anyhow::{Context, Result};
use chip8vm::{Frame, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};

const LIT: u32 = 0x00_7F_FF;
const UNLIT: u32 = 0x00_00_00;

pub struct Screen {
    pixel_buffer: Vec<u32>,
    window: Window,
}

fn scale_from(factor: u8) -> Scale {
    match factor {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        8 => Scale::X8,
        32 => Scale::X32,
        _ => Scale::X16,
    }
}

impl Screen {
    pub fn new(scale: u8) -> Result<Self> {
        let mut window = Window::new(
            "chip8vm - ESC to exit",
            DISPLAY_WIDTH,
            DISPLAY_HEIGHT,
            WindowOptions {
                scale: scale_from(scale),
                ..WindowOptions::default()
            },
        )
        .context("failed to open window")?;
        // Limit to max ~60 fps update rate
        window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));
        Ok(Self {
            pixel_buffer: vec![UNLIT; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            window,
        })
    }

    pub fn is_running(&self) -> bool {
        self.window.is_open() && !self.window.is_key_pressed(Key::Escape, KeyRepeat::No)
    }

    pub fn held_keys(&self) -> Vec<Key> {
        self.window.get_keys()
    }

    pub fn render(&mut self, frame: &Frame) -> Result<()> {
        self.pixel_buffer = frame.to_rgb(LIT, UNLIT);
        self.window
            .update_with_buffer(&self.pixel_buffer, DISPLAY_WIDTH, DISPLAY_HEIGHT)
            .context("failed to present frame")
    }

    /// Pumps window events without redrawing.
    pub fn update(&mut self) {
        self.window.update();
    }
}
