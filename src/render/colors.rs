use image::Rgba;

use crate::model::{Degradation, Degraded};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Parse a text color, falling back to white
///
/// Accepts any CSS color: hex forms, `rgb()`/`rgba()`, `hsl()`/`hsla()`,
/// `hwb()` and the full list of named colors.
pub fn parse_color(value: &str) -> Degraded<Rgba<u8>> {
    match csscolorparser::parse(value.trim()) {
        Ok(color) => Degraded::clean(Rgba(color.to_rgba8())),
        Err(e) => {
            log::debug!("text color {:?}: {}", value, e);
            let mut color = Degraded::clean(WHITE);
            color.degrade(Degradation::ColorFallback {
                value: value.to_string(),
            });
            color
        }
    }
}
