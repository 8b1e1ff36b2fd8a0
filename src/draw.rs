// Software rasterizer for the shape descriptors in `types`.
// Visual effects provided here:
// 1) Solid or translucent rectangles (stone blocks, bricks).
// 2) Hairline or banded straight lines (cracks, mortar).
// 3) Solid or translucent ellipses (moss stains, shadow patches).
// Everything clips silently: pixels that fall off the canvas are skipped,
// and any i32 bounds are accepted, however far outside the canvas they lie.

use crate::types::{PixelBuffer, Rgba, Shape};

/// Rasterize one shape onto the buffer.
/// Visual: the shape appears on top of whatever was painted before it.
pub fn draw(buf: &mut PixelBuffer, shape: &Shape) {
    match *shape {
        Shape::Rect { x0, y0, x1, y1, color } => fill_rect(buf, x0, y0, x1, y1, color),
        Shape::Line { x0, y0, x1, y1, color, width } => draw_line(buf, x0, y0, x1, y1, color, width),
        Shape::Ellipse { x0, y0, x1, y1, color } => fill_ellipse(buf, x0, y0, x1, y1, color),
    }
}

/* ---------- Compositing ---------- */

/// Mix `src` over `dst` in place: `src*a + dst*(1-a)` per channel.
/// Visual: opaque sources replace the pixel, alpha 0 leaves it untouched,
/// anything in between tints what is underneath.
#[inline]
pub fn composite(dst: &mut Rgba, src: Rgba) {
    if src.is_opaque() {
        *dst = src;
        return;
    }
    if src.a == 0 {
        return;
    }

    let a = src.a as u32;
    let inv = 255 - a;
    // Integer form of round(s*a/255 + d*(255-a)/255); never exceeds 255.
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
    dst.r = mix(src.r, dst.r);
    dst.g = mix(src.g, dst.g);
    dst.b = mix(src.b, dst.b);
    dst.a = ((a * 255 + dst.a as u32 * inv + 127) / 255) as u8;
}

/// Composite a single pixel if (x,y) is on the canvas.
#[inline]
fn plot(buf: &mut PixelBuffer, x: i64, y: i64, color: Rgba) {
    let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else { return };
    if let Some(px) = buf.get_mut(x, y) {
        composite(px, color);
    }
}

/// Canvas extent as a signed coordinate bound.
#[inline]
fn extent(len: usize) -> i64 {
    len.min(i32::MAX as usize) as i64
}

/// Clamp an inclusive span to [0, len-1]. `None` when nothing is left.
fn clip_span(a: i64, b: i64, len: usize) -> Option<(i64, i64)> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let (lo, hi) = (lo.max(0), hi.min(extent(len) - 1));
    (lo <= hi).then_some((lo, hi))
}

/* ---------- Primitives ---------- */

/// Fill every pixel of the inclusive box (x0,y0)-(x1,y1).
/// Visual: a solid (or see-through) block; corners may come in either order.
pub fn fill_rect(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    fill_box(buf, x0.into(), y0.into(), x1.into(), y1.into(), color);
}

fn fill_box(buf: &mut PixelBuffer, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba) {
    let Some((xa, xb)) = clip_span(x0, x1, buf.width()) else { return };
    let Some((ya, yb)) = clip_span(y0, y1, buf.height()) else { return };
    for y in ya..=yb {
        for x in xa..=xb {
            plot(buf, x, y, color);
        }
    }
}

/// Straight line from (x0,y0) to (x1,y1), both endpoints included.
/// `width` > 1 stamps a width x width square centered on each step.
/// Visual: one pixel per step along the longer axis, the same staircase
/// Bresenham produces; 45-degree lines come out as a clean diagonal.
pub fn draw_line(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba, width: u32) {
    let w = i64::from(width.max(1));
    let lo = -(w - 1) / 2; // band offsets, e.g. w=3 -> -1..=1, w=2 -> 0..=1
    let hi = w / 2;
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let (cw, ch) = (extent(buf.width()), extent(buf.height()));

    /* --- 1) Whole band misses the canvas: nothing to do --- */
    if x0.max(x1) + hi < 0 || x0.min(x1) + lo >= cw || y0.max(y1) + hi < 0 || y0.min(y1) + lo >= ch {
        return;
    }

    /* --- 2) Walk the longer axis; the shorter one follows by rounding --- */
    let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
    let sx = if x0 <= x1 { 1 } else { -1 };
    let sy = if y0 <= y1 { 1 } else { -1 };
    let steps = dx.max(dy);
    let x_major = dx >= dy;
    let (major0, s_major, minor0, s_minor, d_minor, major_len) =
        if x_major { (x0, sx, y0, sy, dy, cw) } else { (y0, sy, x0, sx, dx, ch) };

    /* --- 3) Only the steps whose band can land on the canvas --- */
    let (first, last) = visible_steps(major0, s_major, steps, lo, hi, major_len);
    for i in first..=last {
        let major = major0 + s_major * i;
        let minor = minor0 + s_minor * minor_offset(i, d_minor, steps);
        let (x, y) = if x_major { (major, minor) } else { (minor, major) };
        if w == 1 {
            plot(buf, x, y, color);
        } else {
            fill_box(buf, x + lo, y + lo, x + hi, y + hi, color);
        }
    }
}

/// Minor-axis offset at step `i` of `steps`: round(i * d / steps), ties up.
#[inline]
fn minor_offset(i: i64, d: i64, steps: i64) -> i64 {
    if steps == 0 {
        return 0;
    }
    let (i, d, n) = (i128::from(i), i128::from(d), i128::from(steps));
    ((2 * i * d + n) / (2 * n)) as i64
}

/// Step range `[first, last]` (within `0..=steps`) whose major coordinate
/// keeps the band `lo..=hi` inside `[0, len)`. Empty when `first > last`.
fn visible_steps(start: i64, dir: i64, steps: i64, lo: i64, hi: i64, len: i64) -> (i64, i64) {
    let (min_major, max_major) = (-hi, len - 1 - lo);
    let (a, b) = if dir > 0 {
        (min_major - start, max_major - start)
    } else {
        (start - max_major, start - min_major)
    };
    (a.max(0), b.min(steps))
}

/// Fill the ellipse inscribed in the inclusive box (x0,y0)-(x1,y1).
/// A pixel is inside when its center lies within the ellipse that touches
/// the outer edges of the box.
/// Visual: a round blob; the box corners themselves stay unpainted.
pub fn fill_ellipse(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let (xa, xb) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    let (ya, yb) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

    let cx = (xa + xb + 1) as f64 * 0.5;
    let cy = (ya + yb + 1) as f64 * 0.5;
    let rx = (xb - xa + 1) as f64 * 0.5;
    let ry = (yb - ya + 1) as f64 * 0.5;

    // Scan just the part of the bounding box that is on the canvas.
    let Some((cxa, cxb)) = clip_span(xa, xb, buf.width()) else { return };
    let Some((cya, cyb)) = clip_span(ya, yb, buf.height()) else { return };
    for y in cya..=cyb {
        let ny = (y as f64 + 0.5 - cy) / ry;
        for x in cxa..=cxb {
            let nx = (x as f64 + 0.5 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                plot(buf, x, y, color);
            }
        }
    }
}
