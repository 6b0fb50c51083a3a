use crate::utils::pixel::RGB;
use image::{
    ImageBuffer, Rgba, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};
use std::path::Path;

/// Canvas of the given size filled with a single color.
pub fn filled_canvas(width: u32, height: u32, color: RGB) -> RgbaImage {
    ImageBuffer::from_pixel(width, height, Rgba::from(color))
}

/// Encode to PNG and write to `path`, replacing any existing file.
pub fn write_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> crate::error::Result {
    write_png_with_quality(
        image,
        path.as_ref(),
        CompressionType::Default,
        FilterType::Adaptive,
    )
}

pub(crate) fn write_png_with_quality(
    image: &RgbaImage,
    path: &Path,
    compression: CompressionType,
    filtering: FilterType,
) -> crate::error::Result {
    let file = &mut std::io::BufWriter::new(std::fs::File::create(path)?);
    let encoder = PngEncoder::new_with_quality(file, compression, filtering);
    image.write_with_encoder(encoder)?;
    log::debug!(
        "wrote {}x{} png to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Decode an image from disk as RGBA8.
pub fn read_rgba<P: AsRef<Path>>(path: P) -> crate::error::Result<RgbaImage> {
    let image = image::ImageReader::open(path)?.decode()?.to_rgba8();
    Ok(image)
}
