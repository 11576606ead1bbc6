//! Drawing primitives. Everything here goes through [`PixelSurface::write`],
//! so any part of a shape that falls off the surface is simply dropped.

use crate::color::Rgb565;
use crate::surface::PixelSurface;

// ── Lines ───────────────────────────────────────────────────────────────────

/// Walks the Bresenham path from `(x0, y0)` to `(x1, y1)`, both ends
/// included, calling `plot` once per pixel in order.
pub fn trace_line(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = (x1 - x0).signum();
    let sy = (y1 - y0).signum();
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

pub fn line(s: &mut PixelSurface, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgb565) {
    trace_line(x0, y0, x1, y1, |x, y| s.write(x, y, c));
}

// ── Circles ─────────────────────────────────────────────────────────────────

/// Midpoint circle: walks the octant from (r, 0) up to the diagonal and
/// mirrors each step into the other seven. Negative radii trace nothing.
pub fn trace_circle(xc: i32, yc: i32, r: i32, mut plot: impl FnMut(i32, i32)) {
    if r < 0 {
        return;
    }
    let mut x = r;
    let mut y = 0;
    let mut d = 1 - r;
    while x >= y {
        plot(xc + x, yc + y);
        plot(xc - x, yc + y);
        plot(xc + x, yc - y);
        plot(xc - x, yc - y);
        plot(xc + y, yc + x);
        plot(xc - y, yc + x);
        plot(xc + y, yc - x);
        plot(xc - y, yc - x);
        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
}

pub fn circle_outline(s: &mut PixelSurface, xc: i32, yc: i32, r: i32, c: Rgb565) {
    trace_circle(xc, yc, r, |x, y| s.write(x, y, c));
}

/// Every pixel within distance `r` of the centre.
pub fn circle_filled(s: &mut PixelSurface, xc: i32, yc: i32, r: i32, c: Rgb565) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                s.write(xc + dx, yc + dy, c);
            }
        }
    }
}

// ── Rectangles ──────────────────────────────────────────────────────────────

/// Fills `[x0, x1) × [y0, y1)`. An empty or inverted box draws nothing.
pub fn rect_filled(s: &mut PixelSurface, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgb565) {
    for y in y0..y1 {
        for x in x0..x1 {
            s.write(x, y, c);
        }
    }
}

/// Closed outline through all four corners, in any corner order.
pub fn rect_outline(s: &mut PixelSurface, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgb565) {
    line(s, x0, y0, x1, y0, c);
    line(s, x1, y0, x1, y1, c);
    line(s, x1, y1, x0, y1, c);
    line(s, x0, y1, x0, y0, c);
}

// ── 3x5 bitmap digits ──────────────────────────────────────────────────────

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
pub const SCORE_SCALE: i32 = 2;
pub const SCORE_GAP: i32 = 2;

#[rustfmt::skip]
const GLYPHS: [[u8; 15]; 16] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1], // A
    [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0], // B
    [1,1,1, 1,0,0, 1,0,0, 1,0,0, 1,1,1], // C
    [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,1,0], // D
    [1,1,1, 1,0,0, 1,1,1, 1,0,0, 1,1,1], // E
    [1,1,1, 1,0,0, 1,1,1, 1,0,0, 1,0,0], // F
];

/// Draws glyph `d` (0-15) with its top-left at `(x, y)`, each font cell
/// blown up to a `scale × scale` block.
pub fn glyph_digit(s: &mut PixelSurface, d: u8, x: i32, y: i32, c: Rgb565, scale: i32) {
    let Some(glyph) = GLYPHS.get(d as usize) else {
        return;
    };
    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            if glyph[(row * GLYPH_WIDTH + col) as usize] == 1 {
                let px = x + col * scale;
                let py = y + row * scale;
                rect_filled(s, px, py, px + scale, py + scale, c);
            }
        }
    }
}

/// Lays out `value` in decimal leftwards from `right`, which is the right
/// edge of the last digit. Returns the left edge of the first digit.
pub fn text_number(
    s: &mut PixelSurface,
    value: u32,
    right: i32,
    y: i32,
    c: Rgb565,
    scale: i32,
    gap: i32,
) -> i32 {
    let digits = value.to_string();
    let char_w = GLYPH_WIDTH * scale;
    let mut x = right;
    for ch in digits.bytes().rev() {
        x -= char_w;
        glyph_digit(s, ch - b'0', x, y, c, scale);
        x -= gap;
    }
    x + gap
}

/// The score counter used by the games: scale 2, two pixels between digits.
pub fn text_score(s: &mut PixelSurface, value: u32, right: i32, y: i32, c: Rgb565) -> i32 {
    text_number(s, value, right, y, c, SCORE_SCALE, SCORE_GAP)
}
