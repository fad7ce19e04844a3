//! Clear colour behind the swarm

use serde::{Deserialize, Serialize};

/// How the frame is cleared before sprites are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Opaque white every frame
    #[default]
    White,
    /// Slowly cycling colour driven by sine waves of elapsed time
    Pulse,
}

impl Background {
    /// RGBA8 colour at `t` seconds since start
    pub fn color_at(self, t: f32) -> [u8; 4] {
        match self {
            Background::White => [255, 255, 255, 255],
            Background::Pulse => {
                let s = t.sin();
                let red = (s + 1.0) / 2.0 * 255.0;
                let green = ((t / 2.0).sin() + 1.0) / 2.0 * 255.0;
                let blue = (s * 2.0 + 1.0) / 2.0 * 255.0;
                // `as u8` saturates, blue swings past both ends
                [red as u8, green as u8, blue as u8, 255]
            }
        }
    }

    /// Colour at `t` as linear floats, ready for a GPU clear on an sRGB
    /// surface. Alpha stays linear.
    pub fn clear_color_at(self, t: f32) -> [f64; 4] {
        let [r, g, b, a] = self.color_at(t);
        [
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f64 / 255.0,
        ]
    }
}

/// sRGB transfer function, 8-bit encoded to linear
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl std::str::FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Background::White),
            "pulse" => Ok(Background::Pulse),
            other => Err(format!("unknown background '{other}' (expected white or pulse)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_constant() {
        assert_eq!(Background::White.color_at(0.0), [255; 4]);
        assert_eq!(Background::White.color_at(123.4), [255; 4]);
    }

    #[test]
    fn test_pulse_at_zero() {
        assert_eq!(Background::Pulse.color_at(0.0), [127, 127, 127, 255]);
    }

    #[test]
    fn test_pulse_saturates_blue_high() {
        let [_, _, blue, _] = Background::Pulse.color_at(std::f32::consts::FRAC_PI_2);
        assert_eq!(blue, 255);
    }

    #[test]
    fn test_pulse_saturates_blue_low() {
        // sin = -1 drives blue to -127.5, which saturates at 0
        let t = 3.0 * std::f32::consts::FRAC_PI_2;
        let [red, _, blue, alpha] = Background::Pulse.color_at(t);
        assert_eq!(red, 0);
        assert_eq!(blue, 0);
        assert_eq!(alpha, 255);
    }

    #[test]
    fn test_clear_color_is_linear() {
        let [r, g, b, a] = Background::Pulse.clear_color_at(0.0);
        // sRGB 127 is about 0.2122 linear
        for channel in [r, g, b] {
            assert!((channel - 0.2122).abs() < 1e-3, "got {channel}");
        }
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_white_clear_is_full() {
        for channel in Background::White.clear_color_at(5.0) {
            assert!((channel - 1.0).abs() < 1e-9, "got {channel}");
        }
        assert_eq!(srgb_to_linear(0), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Pulse".parse::<Background>(), Ok(Background::Pulse));
        assert_eq!("white".parse::<Background>(), Ok(Background::White));
        assert!("plaid".parse::<Background>().is_err());
    }
}
