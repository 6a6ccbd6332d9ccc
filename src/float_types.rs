//! Scalar type shared by the whole crate, chosen by the `f64` / `f32` features.

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_follow_the_selected_scalar() {
        assert_eq!(TAU, 2.0 * PI);
        assert_eq!(core::mem::size_of::<Real>(), core::mem::size_of_val(&PI));
    }
}
