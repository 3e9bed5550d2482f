use crate::Vec3;

/// Per-component threshold below which a vector counts as degenerate.
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Extra vector queries the path tracer needs on top of glam.
pub trait Vec3Ext {
    /// True if every component is smaller in magnitude than [`NEAR_ZERO_EPSILON`].
    fn near_zero(&self) -> bool;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.abs().cmplt(Vec3::splat(NEAR_ZERO_EPSILON)).all()
    }
}

/// Reflect a vector about a normal: `v - 2 (v . n) n`.
#[inline]
pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    v - 2.0 * v.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::new(1e-9, -1e-9, 0.0).near_zero());
        assert!(!Vec3::new(1e-9, 0.0, 1e-3).near_zero());
        assert!(!Vec3::new(-1e-7, 0.0, 0.0).near_zero());
    }

    #[test]
    fn test_reflect() {
        // Incoming diagonally onto a floor facing +Y
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));

        // Head-on reverses the direction
        assert_eq!(reflect(Vec3::NEG_Z, Vec3::Z), Vec3::Z);

        // Parallel to the surface is unchanged
        assert_eq!(reflect(Vec3::X, Vec3::Y), Vec3::X);
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = Vec3::new(0.3, -2.0, 1.1);
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();

        assert!((reflect(v, n).length() - v.length()).abs() < 1e-5);
    }
}
