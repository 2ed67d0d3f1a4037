use bytemuck::{Pod, Zeroable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
    pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
    /// Background color of the tutorial sprite sheets.
    pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// One pixel in the upload format: bytes R, G, B, A in memory order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Compositing formula used when a texture is drawn over existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    None,
    #[default]
    Blend,
    Add,
    Mod,
    Mul,
}

/// Mirror axis applied when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mirror {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl Mirror {
    pub fn horizontal(self) -> bool {
        self == Mirror::Horizontal
    }

    pub fn vertical(self) -> bool {
        self == Mirror::Vertical
    }
}
