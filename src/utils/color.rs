/// Parses `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

pub fn to_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Stable color for a champion id that has no hand-picked one.
///
/// Hue comes from a 31-multiplier string hash, with saturation 70% and
/// lightness 60%.
pub fn fallback_color(id: &str) -> String {
    let hash = id
        .chars()
        .fold(0i32, |hash, c| (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash)));
    let hue = (hash % 360) as f32;
    to_hex_color(hsl_to_rgb(hue, 0.7, 0.6))
}

/// `h` in degrees (negative values wrap), `s` and `l` in 0..=1.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let h = h.rem_euclid(360.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f32| {
        let k = (n + h / 30.0) % 12.0;
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * color).round().clamp(0.0, 255.0) as u8
    };
    [f(0.0), f(8.0), f(4.0)]
}
