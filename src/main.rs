// Generates the two map textures used by the game:
// • assets/maps/prison.png — 1200x1200 stone background with moss and shadows
// • assets/maps/wall.png   — 40x40 brick tile meant to be repeated
// Every run draws with fresh randomness, so the textures differ each time.
// The output directory must already exist.

mod draw;
mod error;
mod sink;
mod texture;
mod types;

use env_logger::Env;
use error::Error;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;

pub const OUTPUT_DIR: &str = "assets/maps";
pub const BACKGROUND_FILE: &str = "prison.png";
pub const WALL_FILE: &str = "wall.png";

fn main() -> Result<(), Error> {
    /* --- Logging ---
       Visual: one "wrote ..." line per texture on stderr (RUST_LOG=debug for more). */
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    /* --- Randomness ---
       One generator per texture; nothing random is shared between them. */
    let mut background_rng = ChaCha8Rng::from_entropy();
    let mut wall_rng = ChaCha8Rng::from_entropy();

    /* --- Generate + persist ---
       Visual: both PNGs appear under assets/maps; a missing folder stops the run. */
    write_background(Path::new(OUTPUT_DIR), &mut background_rng)?;
    write_wall(Path::new(OUTPUT_DIR), &mut wall_rng)?;

    info!("textures written to {OUTPUT_DIR}");
    Ok(())
}

/// Generate the prison background and persist it as `dir/prison.png`.
fn write_background<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Result<(), Error> {
    let buf = texture::generate_background(rng)?;
    sink::save_png(&sink::output_path(dir, BACKGROUND_FILE), &buf)
}

/// Generate the wall tile and persist it as `dir/wall.png`.
fn write_wall<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Result<(), Error> {
    let buf = texture::generate_wall(rng)?;
    sink::save_png(&sink::output_path(dir, WALL_FILE), &buf)
}
