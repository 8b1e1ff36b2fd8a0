// Persists a finished texture as an RGBA PNG.
// The target directory must already exist; a missing directory, a permission
// problem or a full disk all surface as `Error::Sink`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use log::info;

use crate::error::Error;
use crate::types::PixelBuffer;

/// `dir/name`, e.g. `assets/maps` + `wall.png`.
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Encode `buf` losslessly and write it to `path`, replacing any old file.
/// Visual: the PNG opens with exactly the pixels the generator painted,
/// translucent alpha included.
pub fn save_png(path: &Path, buf: &PixelBuffer) -> Result<(), Error> {
    let (width, height) = dimensions(buf)?;
    let data = buf.as_raw_bytes(); // always width * height * 4 bytes

    let file = File::create(path).map_err(|e| Error::Sink(format!("{}: {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut out, CompressionType::Default, FilterType::Adaptive)
        .write_image(&data, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| Error::Encode(format!("{}: {e}", path.display())))?;
    out.flush().map_err(|e| Error::Sink(format!("{}: {e}", path.display())))?;

    info!("wrote {}x{} texture to {}", width, height, path.display());
    Ok(())
}

/// PNG headers store u32 sizes.
fn dimensions(buf: &PixelBuffer) -> Result<(u32, u32), Error> {
    let w = u32::try_from(buf.width()).map_err(|_| Error::Encode(format!("width {} too large for PNG", buf.width())))?;
    let h = u32::try_from(buf.height()).map_err(|_| Error::Encode(format!("height {} too large for PNG", buf.height())))?;
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    /// Fresh per-test directory under the system temp dir.
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("prison-textures-sink-{}-{tag}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn png_keeps_every_rgba_value() {
        let dir = scratch_dir("roundtrip");
        let mut buf = PixelBuffer::new(3, 2, Rgba::rgba(40, 40, 40, 255)).unwrap();
        *buf.get_mut(2, 1).unwrap() = Rgba::rgba(30, 50, 30, 50);
        *buf.get_mut(0, 1).unwrap() = Rgba::rgba(1, 2, 3, 0);

        let path = output_path(&dir, "tiny.png");
        save_png(&path, &buf).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgba8);
        let rgba = img.to_rgba8();
        assert_eq!(rgba.dimensions(), (3, 2));
        assert_eq!(rgba.into_raw(), buf.as_raw_bytes());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_canvas_is_an_encode_error() {
        let dir = scratch_dir("empty");
        let buf = PixelBuffer::new(0, 0, Rgba::gray(0)).unwrap();

        let err = save_png(&output_path(&dir, "empty.png"), &buf).unwrap_err();
        assert!(matches!(err, Error::Encode(_)), "got {err}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_a_sink_error() {
        let dir = scratch_dir("missing").join("does-not-exist");
        let buf = PixelBuffer::new(1, 1, Rgba::gray(0)).unwrap();

        let err = save_png(&output_path(&dir, "x.png"), &buf).unwrap_err();
        assert!(matches!(err, Error::Sink(_)), "got {err}");
        assert!(!dir.exists());
    }
}
