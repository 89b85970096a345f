/// 8-bit-per-channel RGBA color, as authored.
///
/// The GPU clear op wants normalized f64 channels; `to_f64_channels` does the
/// conversion at the handoff point so everything upstream stays in u8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Background while the space bar is held.
pub const PURPLE: Rgba8 = Rgba8::new(200, 122, 255, 255);

/// Background while the space bar is released.
pub const SKY_BLUE: Rgba8 = Rgba8::new(102, 191, 255, 255);

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels normalized to [0.0, 1.0], in RGBA order.
    pub fn to_f64_channels(self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_two_backgrounds_are_distinct() {
        assert_ne!(PURPLE, SKY_BLUE);
    }

    #[test]
    fn channels_normalize_into_unit_range() {
        for color in [PURPLE, SKY_BLUE] {
            for channel in color.to_f64_channels() {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn both_backgrounds_are_opaque() {
        assert_eq!(PURPLE.a, 255);
        assert_eq!(SKY_BLUE.a, 255);
        assert!((PURPLE.to_f64_channels()[3] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn white_normalizes_to_ones() {
        let white = Rgba8::new(255, 255, 255, 255);
        for channel in white.to_f64_channels() {
            assert!((channel - 1.0).abs() < f64::EPSILON);
        }
    }
}
