//! Color value helpers.
//!
//! Colors are `palette::Srgb<f32>` with channels nominally in 0.0-1.0. Scaling is
//! plain linear multiplication; conversion to 8-bit channels only happens when a
//! driver emits a color to hardware.

use palette::Srgb;
use rand::Rng;

/// All channels off.
pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Multiplies every channel by `factor`.
///
/// The result is not clamped. Factors outside 0.0-1.0 pass through and are left
/// for the driver to clamp (see [`to_rgb8`]).
#[inline]
pub fn scale(color: Srgb, factor: f32) -> Srgb {
    Srgb::new(color.red * factor, color.green * factor, color.blue * factor)
}

/// Picks a color with each 8-bit channel drawn uniformly from 0-255.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Srgb {
    let rgb8 = Srgb::new(rng.r#gen::<u8>(), rng.r#gen::<u8>(), rng.r#gen::<u8>());
    rgb8.into_format()
}

/// Converts to 8-bit channels, clamping to 0-255 and rounding.
#[inline]
pub fn to_rgb8(color: Srgb) -> Srgb<u8> {
    color.into_format()
}
