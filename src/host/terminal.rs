//! Shows the surface in a terminal using half-block cells: each character
//! cell carries two pixels, the top one as foreground of `▀` and the bottom
//! one as background.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, queue,
    style::{self, Color as CColor},
    terminal,
};
use tracing::{debug, warn};

use crate::session::Display;
use crate::surface::PixelSurface;

type Rgb = (u8, u8, u8);

fn ccolor((r, g, b): Rgb) -> CColor {
    CColor::Rgb { r, g, b }
}

/// Scales the surface into a `cols × rows` cell area, keeping its aspect
/// ratio, and encodes it as half-block text.
#[derive(Clone, Debug)]
pub struct HalfBlockRenderer {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl HalfBlockRenderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut r = Self {
            w: 0,
            h: 0,
            px: Vec::new(),
        };
        r.resize(cols, rows);
        r
    }

    /// Pixel area available: one pixel per column, two per row.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.w = cols as usize;
        self.h = rows as usize * 2;
        self.px.clear();
        self.px.resize(self.w * self.h, (0, 0, 0));
    }

    pub fn pixel_size(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    /// Nearest-neighbour scale to the largest area with the surface's
    /// aspect ratio; the rest stays black.
    fn downsample(&mut self, s: &PixelSurface) {
        let (sw, sh) = (s.width(), s.height());
        if sw == 0 || sh == 0 || self.w == 0 || self.h == 0 {
            return;
        }
        let tw = self.w.min(self.h * sw / sh).max(1);
        let th = (tw * sh / sw).clamp(1, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                self.px[y * self.w + x] = if x < tw && y < th {
                    s.row(y * sh / th)[x * sw / tw].to_rgb888()
                } else {
                    (0, 0, 0)
                };
            }
        }
    }

    pub fn render(&mut self, s: &PixelSurface, out: &mut impl Write) -> io::Result<()> {
        self.downsample(s);
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg: Option<Rgb> = None;
        let mut prev_bg: Option<Rgb> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.pixel(col, row * 2);
                let bot = self.pixel(col, row * 2 + 1);

                if prev_bg != Some(bot) {
                    queue!(out, style::SetBackgroundColor(ccolor(bot)))?;
                    prev_bg = Some(bot);
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                    continue;
                }
                if prev_fg != Some(top) {
                    queue!(out, style::SetForegroundColor(ccolor(top)))?;
                    prev_fg = Some(top);
                }
                queue!(out, style::Print('\u{2580}'))?;
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                prev_fg = None;
                prev_bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

/// Raw mode plus alternate screen for the lifetime of the value.
pub struct Terminal {
    out: Stdout,
    renderer: HalfBlockRenderer,
    size: (u16, u16),
    enhanced_keys: bool,
    active: bool,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, dropping `term` undoes whatever has been set up.
        let mut term = Self {
            out: stdout(),
            renderer: HalfBlockRenderer::new(0, 0),
            size: (0, 0),
            enhanced_keys: false,
            active: true,
        };
        execute!(
            term.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        )?;

        // Release events let a held key read as held.
        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                term.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            term.enhanced_keys = true;
        }

        term.size = terminal::size()?;
        term.renderer.resize(term.size.0, term.size.1);
        debug!(size = ?term.size, enhanced_keys = term.enhanced_keys, "terminal ready");
        Ok(term)
    }

    /// Whether the terminal reports key releases.
    pub fn reports_releases(&self) -> bool {
        self.enhanced_keys
    }

    /// Undoes `enter`. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.enhanced_keys {
            execute!(self.out, PopKeyboardEnhancementFlags)?;
        }
        execute!(
            self.out,
            style::ResetColor,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    }
}

impl Display for Terminal {
    fn present(&mut self, surface: &PixelSurface) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.size {
            debug!(?size, "terminal resized");
            self.size = size;
            self.renderer.resize(size.0, size.1);
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }
        self.renderer.render(surface, &mut self.out)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("restoring the terminal failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb565;
    use crate::raster;

    fn split_board() -> PixelSurface {
        let mut s = PixelSurface::board();
        s.fill(Rgb565::RED);
        raster::rect_filled(&mut s, 160, 0, 320, 240, Rgb565::BLUE);
        s
    }

    #[test]
    fn keeps_aspect_and_pads_black() {
        // 80x30 cells = 80x60 pixels; 4:3 fits as 80x60 exactly.
        let mut r = HalfBlockRenderer::new(80, 30);
        assert_eq!(r.pixel_size(), (80, 60));
        r.render(&split_board(), &mut Vec::new()).unwrap();
        assert_eq!(r.pixel(0, 0), (255, 0, 0));
        assert_eq!(r.pixel(79, 59), (0, 0, 255));

        // Wider terminal: the picture keeps 80x60 and the right is black.
        let mut r = HalfBlockRenderer::new(120, 30);
        r.render(&split_board(), &mut Vec::new()).unwrap();
        assert_eq!(r.pixel(79, 0), (0, 0, 255));
        assert_eq!(r.pixel(80, 0), (0, 0, 0));
    }

    #[test]
    fn encodes_half_blocks() {
        let mut s = PixelSurface::board();
        s.fill(Rgb565::BLACK);
        raster::rect_filled(&mut s, 0, 0, 320, 60, Rgb565::WHITE);

        // 4x2 cells give 4x4 pixels, of which 4x3 hold the picture.
        let mut r = HalfBlockRenderer::new(4, 2);
        let mut out = Vec::new();
        r.render(&s, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{2580}'));
        assert!(text.contains("\r\n"));
    }

    #[test]
    fn empty_area_renders_nothing_visible() {
        let mut r = HalfBlockRenderer::new(0, 0);
        let mut out = Vec::new();
        r.render(&PixelSurface::board(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\u{2580}'));
    }
}
