/// HSLA color descriptor.
///
/// Hue is in degrees (wrapped into `[0, 360)` on conversion); saturation,
/// lightness and alpha are in `[0, 1]`. The core only ever manipulates
/// colors in HSL space; conversion to RGBA happens at the renderer boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Converts to 8-bit non-premultiplied RGBA using the standard
    /// HSL → RGB mapping.
    pub fn to_rgba(&self) -> [u8; 4] {
        let h = self.h.rem_euclid(360.0);
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = self.l - c / 2.0;
        [
            ((r1 + m) * 255.0).round() as u8,
            ((g1 + m) * 255.0).round() as u8,
            ((b1 + m) * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert_exactly() {
        assert_eq!(Hsla::new(0.0, 1.0, 0.5, 1.0).to_rgba(), [255, 0, 0, 255]);
        assert_eq!(Hsla::new(120.0, 1.0, 0.5, 1.0).to_rgba(), [0, 255, 0, 255]);
        assert_eq!(Hsla::new(240.0, 1.0, 0.5, 1.0).to_rgba(), [0, 0, 255, 255]);
    }

    #[test]
    fn lightness_extremes_are_black_and_white() {
        assert_eq!(Hsla::new(200.0, 1.0, 0.0, 1.0).to_rgba(), [0, 0, 0, 255]);
        assert_eq!(
            Hsla::new(200.0, 1.0, 1.0, 1.0).to_rgba(),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn alpha_scales_independently() {
        let [_, _, _, a] = Hsla::new(0.0, 1.0, 0.5, 0.5).to_rgba();
        assert_eq!(a, 128);
    }

    #[test]
    fn hue_wraps_past_360() {
        // 480 degrees is the same hue as 120 degrees (green).
        assert_eq!(
            Hsla::new(480.0, 1.0, 0.5, 1.0).to_rgba(),
            Hsla::new(120.0, 1.0, 0.5, 1.0).to_rgba()
        );
    }
}
