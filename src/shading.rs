// src/shading.rs

/// Depth shading model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShadeType {
    /// No distance darkening.
    None,
    /// Darkening grows linearly with distance up to the fog distance.
    Linear,
    /// Darkening follows a downward parabola that peaks at the fog distance.
    #[default]
    Quadratic,
}

impl ShadeType {
    /// Decodes the integer selector used by the engine's packed config (0/1/2).
    /// Unknown values fall back to `None`.
    pub fn from_selector(selector: i32) -> Self {
        match selector {
            1 => ShadeType::Linear,
            2 => ShadeType::Quadratic,
            _ => ShadeType::None,
        }
    }

    pub fn selector(self) -> i32 {
        match self {
            ShadeType::None => 0,
            ShadeType::Linear => 1,
            ShadeType::Quadratic => 2,
        }
    }
}

#[inline]
pub fn unpack_rgb(color: u32) -> (i32, i32, i32) {
    (
        ((color >> 16) & 0xFF) as i32,
        ((color >> 8) & 0xFF) as i32,
        (color & 0xFF) as i32,
    )
}

#[inline]
pub fn pack_rgb(red: i32, green: i32, blue: i32) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | (blue as u32)
}

#[inline]
fn darken_channel(channel: i32, amount: f32) -> i32 {
    let reduced = channel as f32 - amount;
    if reduced >= 0.0 {
        reduced.min(255.0) as i32
    } else {
        0
    }
}

/// Subtracts `amount` from each 8-bit channel of a packed 24-bit color.
/// Channels stay within `0..=255`; the fractional part of a reduced channel is
/// truncated.
#[inline]
pub fn darken(color: u32, amount: f32) -> u32 {
    let (red, green, blue) = unpack_rgb(color);
    pack_rgb(
        darken_channel(red, amount),
        darken_channel(green, amount),
        darken_channel(blue, amount),
    )
}

/// Darkening amount for a hit at `distance` under the given model.
pub fn shade_amount(
    shade_type: ShadeType,
    full_fog_distance: f32,
    shade_threshold: i32,
    distance: f32,
) -> f32 {
    match shade_type {
        ShadeType::None => 0.0,
        ShadeType::Linear => {
            let norm = distance / full_fog_distance;
            norm.min(1.0) * shade_threshold as f32
        }
        ShadeType::Quadratic => {
            let x = distance.min(full_fog_distance);
            let a = shade_threshold as f32 / 100.0;
            let b = 2.0 * full_fog_distance;
            -(a * x) * (x - b)
        }
    }
}

/// Applies distance-based darkening to `color`.
pub fn shade(
    shade_type: ShadeType,
    full_fog_distance: f32,
    shade_threshold: i32,
    distance: f32,
    color: u32,
) -> u32 {
    let amount = shade_amount(shade_type, full_fog_distance, shade_threshold, distance);
    darken(color, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const GREY: u32 = 0x80_80_80;

    #[test]
    fn zero_distance_keeps_color() {
        for shade_type in [ShadeType::None, ShadeType::Linear, ShadeType::Quadratic] {
            assert_eq!(shade(shade_type, 10.0, 75, 0.0, 0xAB_CD_EF), 0xAB_CD_EF);
        }
    }

    #[test]
    fn quadratic_peaks_at_fog_distance() {
        let at_fog = shade_amount(ShadeType::Quadratic, 10.0, 75, 10.0);
        let beyond = shade_amount(ShadeType::Quadratic, 10.0, 75, 50.0);
        let half = shade_amount(ShadeType::Quadratic, 10.0, 75, 5.0);

        assert_relative_eq!(at_fog, 75.0);
        assert_relative_eq!(beyond, at_fog);
        assert_relative_eq!(half, 0.75 * 5.0 * 15.0);
    }

    #[test]
    fn linear_saturates_at_threshold() {
        assert_relative_eq!(shade_amount(ShadeType::Linear, 10.0, 200, 5.0), 100.0);
        assert_relative_eq!(shade_amount(ShadeType::Linear, 10.0, 200, 30.0), 200.0);
    }

    #[test]
    fn none_never_darkens() {
        assert_eq!(shade(ShadeType::None, 10.0, 200, 1000.0, GREY), GREY);
    }

    #[test]
    fn channels_clamp_at_zero() {
        assert_eq!(darken(0x10_80_FF, 0x20 as f32), pack_rgb(0, 0x60, 0xDF));
        assert_eq!(shade(ShadeType::Linear, 1.0, 255, 100.0, 0xFF_FF_FF), 0);
    }

    #[test]
    fn negative_darken_saturates_without_bleeding() {
        assert_eq!(darken(0x00_00_F0, -32.0), 0x20_20_FF);
        assert_eq!(darken(0xFF_FF_FF, -1.0), 0xFF_FF_FF);
    }

    #[test]
    fn fractional_darken_truncates() {
        assert_eq!(darken(pack_rgb(10, 10, 10), 2.5), pack_rgb(7, 7, 7));
    }

    #[test]
    fn selector_round_trip() {
        for shade_type in [ShadeType::None, ShadeType::Linear, ShadeType::Quadratic] {
            assert_eq!(ShadeType::from_selector(shade_type.selector()), shade_type);
        }
        assert_eq!(ShadeType::from_selector(9), ShadeType::None);
    }
}
