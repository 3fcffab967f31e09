//! Packed ARGB8888 colors.

pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;
pub const RED: u32 = 0xFFFF_0000;
pub const GREEN: u32 = 0xFF00_FF00;
pub const BLUE: u32 = 0xFF00_00FF;
pub const YELLOW: u32 = 0xFFFF_FF00;
pub const MAGENTA: u32 = 0xFFFF_00FF;
pub const CYAN: u32 = 0xFF00_FFFF;

/// Default face color for meshes that carry no material color.
pub const FILL: u32 = WHITE;

/// Scales the RGB channels of `color` by `factor`, keeping alpha.
///
/// The factor is clamped to [0, 1] so over-bright or back-lit faces saturate
/// instead of wrapping.
pub fn apply_intensity(color: u32, factor: f32) -> u32 {
    let factor = factor.clamp(0.0, 1.0);
    let scale = |shift: u32| ((((color >> shift) & 0xFF) as f32 * factor) as u32) << shift;

    (color & 0xFF00_0000) | scale(16) | scale(8) | scale(0)
}
