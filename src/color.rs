//! RGB565 pixel values and the fixed colour table shared by every program.

use clap::ValueEnum;

/// A 16-bit pixel: 5 bits red, 6 bits green, 5 bits blue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const BLUE: Rgb565 = Rgb565(0x001F);
    pub const GRAY: Rgb565 = Rgb565(0x8410);
    pub const YELLOW: Rgb565 = Rgb565(0xFFE0);
    pub const CYAN: Rgb565 = Rgb565(0x07FF);
    pub const MAGENTA: Rgb565 = Rgb565(0xF81F);
    pub const ORANGE: Rgb565 = Rgb565(0xFC00);
    pub const PURPLE: Rgb565 = Rgb565(0x780F);
    pub const BROWN: Rgb565 = Rgb565(0xA145);
    pub const PINK: Rgb565 = Rgb565(0xF81F);
    pub const LIME: Rgb565 = Rgb565(0x07F0);
    pub const NAVY: Rgb565 = Rgb565(0x000F);
    pub const TEAL: Rgb565 = Rgb565(0x0410);

    // Game palette
    pub const SKY_BLUE: Rgb565 = Rgb565(0x841F);
    pub const LIME_GREEN: Rgb565 = Rgb565(0xAFE5);
    pub const BOARD_BG: Rgb565 = Rgb565(0x10A2);
    pub const PANEL_BG: Rgb565 = Rgb565(0x4208);

    /// Packs 8-bit channels, dropping the low bits of each.
    pub const fn pack(r: u8, g: u8, b: u8) -> Rgb565 {
        Rgb565(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Expands back to 8-bit channels, replicating the high bits into the
    /// low ones so that white stays 255.
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        let r5 = (self.0 >> 11) & 0x1F;
        let g6 = (self.0 >> 5) & 0x3F;
        let b5 = self.0 & 0x1F;
        (
            ((r5 << 3) | (r5 >> 2)) as u8,
            ((g6 << 2) | (g6 >> 4)) as u8,
            ((b5 << 3) | (b5 >> 2)) as u8,
        )
    }
}

/// The colour names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Blue,
    Gray,
    White,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
    Brown,
    Pink,
    Lime,
    Navy,
    Teal,
}

impl NamedColor {
    /// Case-insensitive lookup; `None` for names outside the table.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    pub const fn rgb565(self) -> Rgb565 {
        match self {
            Self::Black => Rgb565::BLACK,
            Self::Red => Rgb565::RED,
            Self::Green => Rgb565::GREEN,
            Self::Blue => Rgb565::BLUE,
            Self::Gray => Rgb565::GRAY,
            Self::White => Rgb565::WHITE,
            Self::Yellow => Rgb565::YELLOW,
            Self::Cyan => Rgb565::CYAN,
            Self::Magenta => Rgb565::MAGENTA,
            Self::Orange => Rgb565::ORANGE,
            Self::Purple => Rgb565::PURPLE,
            Self::Brown => Rgb565::BROWN,
            Self::Pink => Rgb565::PINK,
            Self::Lime => Rgb565::LIME,
            Self::Navy => Rgb565::NAVY,
            Self::Teal => Rgb565::TEAL,
        }
    }
}

impl From<NamedColor> for Rgb565 {
    fn from(c: NamedColor) -> Self {
        c.rgb565()
    }
}
