use anyhow::{bail, Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

pub const IMAGE_EXTENSION: &str = "png";

/// `<value>.png`, where `value` is the first input's current value. Path
/// separators and NUL become `_`; a missing or blank value uses `fallback`.
pub fn export_file_name(first_input_value: Option<&str>, fallback: &str) -> String {
    let stem = first_input_value
        .map(|value| {
            value
                .chars()
                .map(|ch| match ch {
                    '/' | '\\' | '\0' => '_',
                    other => other,
                })
                .collect::<String>()
        })
        .filter(|stem| !stem.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    format!("{stem}.{IMAGE_EXTENSION}")
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        bail!(
            "cannot encode a {}x{} heat-map",
            image.width(),
            image.height()
        );
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("failed to encode heat-map as PNG")?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn names_file_after_first_input_value() {
        assert_eq!(export_file_name(Some("alice"), "heatmap"), "alice.png");
    }

    #[test]
    fn falls_back_when_value_missing_or_blank() {
        assert_eq!(export_file_name(None, "heatmap"), "heatmap.png");
        assert_eq!(export_file_name(Some(""), "heatmap"), "heatmap.png");
        assert_eq!(export_file_name(Some("   "), "session"), "session.png");
    }

    #[test]
    fn strips_path_separators() {
        assert_eq!(export_file_name(Some("../etc/x"), "heatmap"), ".._etc_x.png");
        assert_eq!(export_file_name(Some("a\\b"), "heatmap"), "a_b.png");
    }

    #[test]
    fn encodes_decodable_png() {
        let mut image = RgbaImage::new(4, 2);
        image.put_pixel(3, 1, Rgba([1, 2, 3, 255]));

        let bytes = encode_png(&image).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .to_rgba8();

        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.get_pixel(3, 1).0, [1, 2, 3, 255]);
    }

    #[test]
    fn refuses_empty_image() {
        assert!(encode_png(&RgbaImage::new(0, 10)).is_err());
    }
}
