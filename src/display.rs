pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;

type Grid = [[bool; WIDTH]; HEIGHT];

/// Pixel state owned by the interpreter. The host only ever sees [`Frame`]
/// copies of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bit_buffer: Grid,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            bit_buffer: [[false; WIDTH]; HEIGHT],
            dirty: false,
        }
    }

    pub fn clear_buffer(&mut self) {
        self.bit_buffer = [[false; WIDTH]; HEIGHT];
        self.dirty = true;
    }

    /// XORs `sprite` onto the grid, one byte per row and MSB first, starting
    /// at (`x` mod 64, `y` mod 32). Rows and columns wrap around the edges.
    /// Returns true when any lit pixel was switched off.
    pub fn paint(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let (x, y) = (x as usize % WIDTH, y as usize % HEIGHT);
        let mut collision = false;
        for (i, row) in sprite.iter().enumerate() {
            let ny = (y + i) % HEIGHT;
            for j in 0..8 {
                if (row >> (7 - j)) & 1 == 0 {
                    continue;
                }
                let nx = (x + j) % WIDTH;
                let pixel = &mut self.bit_buffer[ny][nx];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        self.dirty = true;
        collision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn frame(&self) -> Frame {
        Frame(self.bit_buffer)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// A read-only snapshot of the 64x32 display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame(Grid);

impl Frame {
    /// Out of range coordinates read as off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.0
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; WIDTH]> {
        self.0.iter()
    }

    pub fn lit(&self) -> usize {
        self.0.iter().flatten().filter(|p| **p).count()
    }

    /// Renders to 0RGB pixels, `on` for lit pixels and `off` for the rest.
    pub fn to_rgb(&self, on: u32, off: u32) -> Vec<u32> {
        self.0
            .iter()
            .flatten()
            .map(|&p| if p { on } else { off })
            .collect()
    }
}
