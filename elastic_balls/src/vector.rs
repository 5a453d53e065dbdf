//! 2D vector math

use glam::DVec2;
use std::ops::{Add, Mul, Neg, Sub};

/// Immutable 2D vector; every operation returns a new value.
///
/// Arithmetic is done by [`DVec2`]; this type pins down the zero-length
/// normalization and the unit-normal reflection the collisions rely on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `(x, y)`, or zero if that has no length
    pub fn normalized(x: f64, y: f64) -> Self {
        DVec2::new(x, y).normalize_or_zero().into()
    }

    pub fn add(self, u: Self) -> Self {
        (DVec2::from(self) + DVec2::from(u)).into()
    }

    pub fn sub(self, u: Self) -> Self {
        (DVec2::from(self) - DVec2::from(u)).into()
    }

    pub fn multiply(self, a: f64) -> Self {
        (DVec2::from(self) * a).into()
    }

    pub fn entrywise_product(self, u: Self) -> Self {
        (DVec2::from(self) * DVec2::from(u)).into()
    }

    pub fn dot_product(self, u: Self) -> f64 {
        DVec2::from(self).dot(u.into())
    }

    pub fn normalize(self) -> Self {
        Self::normalized(self.x, self.y)
    }

    pub fn length(self) -> f64 {
        DVec2::from(self).length()
    }

    pub fn length_squared(self) -> f64 {
        DVec2::from(self).length_squared()
    }

    /// Mirror this vector about the line perpendicular to `n`.
    ///
    /// Only a true reflection when `n` has unit length.
    pub fn reflect(self, n: Self) -> Self {
        self.sub(n.multiply(2.0 * self.dot_product(n)))
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.multiply(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.multiply(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vector::ZERO.normalize(), Vector::ZERO);
        assert_eq!(Vector::normalized(0.0, 0.0), Vector::ZERO);
    }

    #[test]
    fn normalized_vectors_have_unit_length() {
        for v in [
            Vector::new(3.0, 4.0),
            Vector::new(-1e-8, 2e-9),
            Vector::new(1e9, -7.0),
            Vector::new(0.0, -0.5),
        ] {
            assert!((v.normalize().length() - 1.0).abs() < EPS, "{v:?}");
        }
    }

    #[test]
    fn converts_to_and_from_dvec2() {
        let v = Vector::new(1.5, -2.25);
        let d = DVec2::from(v);
        assert_eq!(d, DVec2::new(1.5, -2.25));
        assert_eq!(Vector::from(d), v);
        assert_eq!(v.dot_product(v), d.dot(d));
    }

    #[test]
    fn arithmetic() {
        let v = Vector::new(1.0, 2.0);
        let u = Vector::new(3.0, -4.0);
        assert_eq!(v + u, Vector::new(4.0, -2.0));
        assert_eq!(v - u, Vector::new(-2.0, 6.0));
        assert_eq!(v * 2.0, Vector::new(2.0, 4.0));
        assert_eq!(-v, Vector::new(-1.0, -2.0));
        assert_eq!(v.entrywise_product(u), Vector::new(3.0, -8.0));
        assert_eq!(v.dot_product(u), -5.0);
        assert_eq!(u.length(), 5.0);
        assert_eq!(u.length_squared(), 25.0);
    }

    #[test]
    fn reflect_about_unit_normal() {
        let v = Vector::new(3.0, -2.0);
        assert_eq!(v.reflect(Vector::new(0.0, 1.0)), Vector::new(3.0, 2.0));
        assert_eq!(v.reflect(Vector::new(1.0, 0.0)), Vector::new(-3.0, -2.0));

        let diagonal = Vector::normalized(1.0, 1.0);
        let r = Vector::new(1.0, 0.0).reflect(diagonal);
        assert!((r - Vector::new(0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn reflect_about_long_normal_changes_length() {
        // reflect assumes a unit normal; a longer one scales the result
        let v = Vector::new(1.0, 0.0);
        let r = v.reflect(Vector::new(2.0, 0.0));
        assert_eq!(r, Vector::new(-7.0, 0.0));
        assert!(r.length() > v.length());
    }
}
