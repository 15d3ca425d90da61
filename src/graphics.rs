//! Primitive rasterization
//!
//! Every routine bottoms out in [`Rasterizer::set_pixel`], so whatever
//! implements the trait decides how a colour lands in memory. Coordinates
//! are signed. Lines clamp their endpoints onto the panel, rectangles
//! saturate at the panel edge, and circles drop the pixels that fall off.

use crate::color::Color;

/// Drawing surface. Implementors provide size, pixel write and fill; all
/// primitives come for free.
pub trait Rasterizer {
    /// Panel width and height in pixels
    fn panel_size(&self) -> (u32, u32);

    /// Paint one pixel. Off-panel coordinates are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Set every pixel byte to all-on or all-off
    fn fill(&mut self, color: Color);

    /// Straight line between two points, endpoints included
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let Some((max_x, max_y)) = last_index(self.panel_size()) else {
            return;
        };
        let (mut x0, mut y0) = (x0.clamp(0, max_x), y0.clamp(0, max_y));
        let (x1, y1) = (x1.clamp(0, max_x), y1.clamp(0, max_y));

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        if dx == 0 {
            for y in y0.min(y1)..=y0.max(y1) {
                self.set_pixel(x0, y, color);
            }
            return;
        }
        if dy == 0 {
            for x in x0.min(x1)..=x0.max(x1) {
                self.set_pixel(x, y0, color);
            }
            return;
        }

        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = (if dx > dy { dx } else { -dy }) / 2;
        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x0 += sx;
            }
            if e2 < dy {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Outline from `(x, y)` to `(x + w, y + h)`, clipped to the panel
    fn draw_rectangle(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let Some((x2, y2)) = clip_box(self.panel_size(), x, y, w, h) else {
            return;
        };
        self.draw_line(x, y, x2, y, color);
        self.draw_line(x, y2, x2, y2, color);
        self.draw_line(x, y, x, y2, color);
        self.draw_line(x2, y, x2, y2, color);
    }

    /// Solid box from `(x, y)` to `(x + w, y + h)`, clipped to the panel
    fn draw_filled_rectangle(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let Some((x2, y2)) = clip_box(self.panel_size(), x, y, w, h) else {
            return;
        };
        for row in y..=y2 {
            self.draw_line(x, row, x2, row, color);
        }
    }

    /// Triangle outline
    #[allow(clippy::too_many_arguments)]
    fn draw_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x3, y3, color);
        self.draw_line(x3, y3, x1, y1, color);
    }

    /// Filled triangle.
    ///
    /// Walks the edge from the first to the second vertex with a DDA and
    /// draws a line from every step to the third vertex. This is a fan, not
    /// a scanline fill: very flat triangles can show gaps or overdraw.
    /// Vertices clamp onto the panel like line endpoints do.
    #[allow(clippy::too_many_arguments)]
    fn draw_filled_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Color,
    ) {
        let Some((max_x, max_y)) = last_index(self.panel_size()) else {
            return;
        };
        let (x1, y1) = (x1.clamp(0, max_x), y1.clamp(0, max_y));
        let (x2, y2) = (x2.clamp(0, max_x), y2.clamp(0, max_y));

        let deltax = (x2 - x1).abs();
        let deltay = (y2 - y1).abs();
        let (mut x, mut y) = (x1, y1);

        let (mut xinc1, mut xinc2) = if x2 >= x1 { (1, 1) } else { (-1, -1) };
        let (mut yinc1, mut yinc2) = if y2 >= y1 { (1, 1) } else { (-1, -1) };

        let (den, mut num, numadd, numpixels) = if deltax >= deltay {
            xinc1 = 0;
            yinc2 = 0;
            (deltax, deltax / 2, deltay, deltax)
        } else {
            xinc2 = 0;
            yinc1 = 0;
            (deltay, deltay / 2, deltax, deltay)
        };

        for _ in 0..=numpixels {
            self.draw_line(x, y, x3, y3, color);
            num += numadd;
            if num >= den {
                num -= den;
                x += xinc1;
                y += yinc1;
            }
            x += xinc2;
            y += yinc2;
        }
    }

    /// Circle outline (midpoint algorithm). Pixels off the panel are
    /// dropped; a ring that cannot touch the panel is skipped.
    fn draw_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        if r < 0 || ring_reach(self.panel_size(), x0, y0, r) != Reach::Crosses {
            return;
        }
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));
        plot(self, x0, y0 + r, color);
        plot(self, x0, y0 - r, color);
        plot(self, x0 + r, y0, color);
        plot(self, x0 - r, y0, color);

        for (x, y) in Midpoint::new(r) {
            plot(self, x0 + x, y0 + y, color);
            plot(self, x0 - x, y0 + y, color);
            plot(self, x0 + x, y0 - y, color);
            plot(self, x0 - x, y0 - y, color);
            plot(self, x0 + y, y0 + x, color);
            plot(self, x0 - y, y0 + x, color);
            plot(self, x0 + y, y0 - x, color);
            plot(self, x0 - y, y0 - x, color);
        }
    }

    /// Solid disc: horizontal spans between mirrored points of the outline
    fn draw_filled_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        match ring_reach(self.panel_size(), x0, y0, r) {
            Reach::Outside => return,
            Reach::Inside => {
                let (width, height) = self.panel_size();
                for row in 0..i64::from(height) {
                    span(self, row, 0, i64::from(width) - 1, color);
                }
                return;
            }
            Reach::Crosses => {}
        }
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));
        plot(self, x0, y0 + r, color);
        plot(self, x0, y0 - r, color);
        plot(self, x0 + r, y0, color);
        plot(self, x0 - r, y0, color);
        span(self, y0, x0 - r, x0 + r, color);

        for (x, y) in Midpoint::new(r) {
            span(self, y0 + y, x0 - x, x0 + x, color);
            span(self, y0 - y, x0 + x, x0 - x, color);
            span(self, y0 + x, x0 + y, x0 - y, color);
            span(self, y0 - x, x0 + y, x0 - y, color);
        }
    }
}

/// Largest valid x and y, `None` for an empty panel
fn last_index((width, height): (u32, u32)) -> Option<(i32, i32)> {
    if width == 0 || height == 0 {
        return None;
    }
    Some((width as i32 - 1, height as i32 - 1))
}

/// Far corner of a box whose origin is on the panel, saturated at the edge
fn clip_box(size: (u32, u32), x: i32, y: i32, w: u32, h: u32) -> Option<(i32, i32)> {
    let (max_x, max_y) = last_index(size)?;
    if x < 0 || y < 0 || x > max_x || y > max_y {
        return None;
    }
    let x2 = (i64::from(x) + i64::from(w)).min(i64::from(max_x)) as i32;
    let y2 = (i64::from(y) + i64::from(h)).min(i64::from(max_y)) as i32;
    Some((x2, y2))
}

/// Pixel at 64-bit coordinates; anything outside `i32` is off the panel
fn plot<R: Rasterizer + ?Sized>(target: &mut R, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        target.set_pixel(x, y, color);
    }
}

/// Horizontal run for the disc fill. Rows and runs entirely off the panel
/// are skipped instead of being clamped onto the edge.
fn span<R: Rasterizer + ?Sized>(target: &mut R, y: i64, xa: i64, xb: i64, color: Color) {
    let Some((max_x, max_y)) = last_index(target.panel_size()) else {
        return;
    };
    let (max_x, max_y) = (i64::from(max_x), i64::from(max_y));
    let (left, right) = (xa.min(xb), xa.max(xb));
    if y < 0 || y > max_y || right < 0 || left > max_x {
        return;
    }
    target.draw_line(left.max(0) as i32, y as i32, right.min(max_x) as i32, y as i32, color);
}

/// Where a circle's outline lies relative to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    /// Every panel pixel is farther than the outline
    Outside,
    /// The whole panel sits strictly within the outline
    Inside,
    /// The outline may put pixels on the panel
    Crosses,
}

/// Compare squared distances from the centre to the nearest and farthest
/// panel pixel against the radius, with one pixel of slack either side
fn ring_reach(size: (u32, u32), x0: i32, y0: i32, r: i32) -> Reach {
    let Some((max_x, max_y)) = last_index(size) else {
        return Reach::Outside;
    };
    let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));
    let (max_x, max_y) = (i64::from(max_x), i64::from(max_y));

    let dist2 = |dx: i64, dy: i64| dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy));
    let near = dist2(x0.clamp(0, max_x) - x0, y0.clamp(0, max_y) - y0);
    let far = dist2(x0.abs().max((max_x - x0).abs()), y0.abs().max((max_y - y0).abs()));

    if near > (r + 1) * (r + 1) {
        Reach::Outside
    } else if r > 1 && far < (r - 1) * (r - 1) {
        Reach::Inside
    } else {
        Reach::Crosses
    }
}

/// One octant of the midpoint circle walk, yielding `(x, y)` with `x <= y`
struct Midpoint {
    f: i64,
    ddf_x: i64,
    ddf_y: i64,
    x: i64,
    y: i64,
}

impl Midpoint {
    fn new(r: i64) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }
}

impl Iterator for Midpoint {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}
