// The two texture generators: the prison floor/background and the wall tile.
// Both paint onto a fresh `PixelBuffer` with randomized shapes; the random
// source is always handed in, so a seeded generator reproduces a texture
// byte for byte.

use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::draw::draw;
use crate::error::Error;
use crate::types::{PixelBuffer, Rgba, Shape};

/* ---------- Background parameters ---------- */

pub const BACKGROUND_SIZE: usize = 1200;
pub const BACKGROUND_BASE: Rgba = Rgba::gray(40);
pub const STONE_BLOCK: usize = 60;          // 20 x 20 blocks over the canvas
pub const STONE_GRAY: RangeInclusive<u8> = 50..=70;
pub const CRACKS_PER_BLOCK: usize = 5;
pub const STONE_CRACK_LEN: RangeInclusive<i32> = 5..=15;

pub const MOSS_STAINS: usize = 20;
pub const MOSS_DIAMETER: RangeInclusive<i32> = 20..=40;
pub const MOSS_COLOR: Rgba = Rgba::rgba(30, 50, 30, 50);

pub const SHADOW_PATCHES: usize = 10;
pub const SHADOW_DIAMETER: RangeInclusive<i32> = 50..=100;
pub const SHADOW_COLOR: Rgba = Rgba::rgba(20, 20, 20, 100);

/* ---------- Wall tile parameters ---------- */

pub const WALL_SIZE: usize = 40;
pub const WALL_BASE: Rgba = Rgba::gray(60);
pub const BRICK_WIDTH: usize = 20;
pub const BRICK_HEIGHT: usize = 10;
pub const BRICK_INSET: i32 = 2;             // gap left on the right/bottom of each brick
pub const BRICK_GRAY: RangeInclusive<u8> = 50..=70;
pub const MORTAR_COLOR: Rgba = Rgba::gray(40);
pub const WALL_CRACKS: usize = 5;
pub const WALL_CRACK_LEN: RangeInclusive<i32> = 5..=10;

pub const CRACK_COLOR: Rgba = Rgba::gray(30);

/// 1200x1200 stone wall with moss stains and shadow patches.
/// Visual: a dark dungeon floor of 60px stones, each a slightly different
/// gray, hairline cracks everywhere, greenish smudges and darker pools.
pub fn generate_background<R: Rng + ?Sized>(rng: &mut R) -> Result<PixelBuffer, Error> {
    let mut buf = lay_stone_blocks(rng)?;
    stain_background(&mut buf, rng);
    Ok(buf)
}

/// Base fill, the grid of stone blocks and the cracks inside each block.
/// Visual: a clean stone grid with no stains yet.
pub fn lay_stone_blocks<R: Rng + ?Sized>(rng: &mut R) -> Result<PixelBuffer, Error> {
    /* 1) Dark base; the stones cover all of it. */
    let mut buf = PixelBuffer::new(BACKGROUND_SIZE, BACKGROUND_SIZE, BACKGROUND_BASE)?;
    let side = STONE_BLOCK as i32;

    /* 2) Stones row by row, each followed by its own cracks.
       A crack may run past its stone; the next stone drawn paints over the spill. */
    for y in (0..BACKGROUND_SIZE as i32).step_by(STONE_BLOCK) {
        for x in (0..BACKGROUND_SIZE as i32).step_by(STONE_BLOCK) {
            let color = Rgba::gray(rng.gen_range(STONE_GRAY));
            draw(&mut buf, &Shape::Rect { x0: x, y0: y, x1: x + side - 1, y1: y + side - 1, color });

            for _ in 0..CRACKS_PER_BLOCK {
                let cx = x + rng.gen_range(0..side);
                let cy = y + rng.gen_range(0..side);
                draw(&mut buf, &crack(cx, cy, rng.gen_range(STONE_CRACK_LEN)));
            }
        }
    }

    debug!("laid {} stone blocks", (BACKGROUND_SIZE / STONE_BLOCK).pow(2));
    Ok(buf)
}

/// Translucent moss stains first, then the darker shadow patches on top.
/// Visual: the stones show through; shadows land over moss where they overlap.
pub fn stain_background<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    scatter_ellipses(buf, rng, MOSS_STAINS, MOSS_DIAMETER, MOSS_COLOR);
    scatter_ellipses(buf, rng, SHADOW_PATCHES, SHADOW_DIAMETER, SHADOW_COLOR);
}

/// 40x40 brick tile that repeats seamlessly.
pub fn generate_wall<R: Rng + ?Sized>(rng: &mut R) -> Result<PixelBuffer, Error> {
    let mut buf = lay_bricks(rng)?;
    crack_wall(&mut buf, rng);
    Ok(buf)
}

/// Base fill plus the bricks and their mortar, row by row.
/// Visual: 2 x 4 bricks with a dark top/left mortar line and a
/// base-colored 1px gap on the right/bottom, so neighbouring tiles meet cleanly.
pub fn lay_bricks<R: Rng + ?Sized>(rng: &mut R) -> Result<PixelBuffer, Error> {
    let mut buf = PixelBuffer::new(WALL_SIZE, WALL_SIZE, WALL_BASE)?;
    let (bw, bh) = (BRICK_WIDTH as i32, BRICK_HEIGHT as i32);

    for y in (0..WALL_SIZE as i32).step_by(BRICK_HEIGHT) {
        for x in (0..WALL_SIZE as i32).step_by(BRICK_WIDTH) {
            let right = x + bw - BRICK_INSET;
            let bottom = y + bh - BRICK_INSET;
            let color = Rgba::gray(rng.gen_range(BRICK_GRAY));
            draw(&mut buf, &Shape::Rect { x0: x, y0: y, x1: right, y1: bottom, color });

            // Mortar along the top and left edges of the brick.
            draw(&mut buf, &Shape::Line { x0: x, y0: y, x1: right, y1: y, color: MORTAR_COLOR, width: 1 });
            draw(&mut buf, &Shape::Line { x0: x, y0: y, x1: x, y1: bottom, color: MORTAR_COLOR, width: 1 });
        }
    }

    Ok(buf)
}

/// A handful of cracks anywhere on the tile.
pub fn crack_wall<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    let size = WALL_SIZE as i32;
    for _ in 0..WALL_CRACKS {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        draw(buf, &crack(x, y, rng.gen_range(WALL_CRACK_LEN)));
    }
}

/// 45-degree hairline running down-right from (x, y).
fn crack(x: i32, y: i32, len: i32) -> Shape {
    Shape::Line { x0: x, y0: y, x1: x + len, y1: y + len, color: CRACK_COLOR, width: 1 }
}

/// Drop `count` circles of random diameter at random origins on the canvas.
fn scatter_ellipses<R: Rng + ?Sized>(
    buf: &mut PixelBuffer,
    rng: &mut R,
    count: usize,
    diameter: RangeInclusive<i32>,
    color: Rgba,
) {
    let (w, h) = (buf.width() as i32, buf.height() as i32);
    for _ in 0..count {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        let d = rng.gen_range(diameter.clone());
        // Origin is the top-left of the box, so blobs may hang off the right/bottom.
        draw(buf, &Shape::Ellipse { x0: x, y0: y, x1: x + d - 1, y1: y + d - 1, color });
    }
}
