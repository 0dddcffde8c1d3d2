//! Three-component vectors of fractions.
//!
//! Components stay exact through addition, scaling, dot and cross products, projections and
//! plane equations. Lengths and angles need square roots and come out as `f64`.

use crate::series::{self, DEFAULT_TERMS};
use crate::{Fraction, FractionError, Operand};
use num_traits::Zero;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: Fraction,
    pub y: Fraction,
    pub z: Fraction,
}

impl Vector {
    pub fn new<X, Y, Z>(x: X, y: Y, z: Z) -> Result<Self, FractionError>
    where
        X: Into<Operand>,
        Y: Into<Operand>,
        Z: Into<Operand>,
    {
        Ok(Vector {
            x: x.into().into_fraction()?,
            y: y.into().into_fraction()?,
            z: z.into().into_fraction()?,
        })
    }

    /// A vector in the xy-plane.
    pub fn planar<X, Y>(x: X, y: Y) -> Result<Self, FractionError>
    where
        X: Into<Operand>,
        Y: Into<Operand>,
    {
        Self::new(x, y, 0)
    }

    /// A vector in the xy-plane with the given magnitude, at `angle` from the positive x-axis.
    ///
    /// The angle is in radians, or degrees if `degrees` is set. Its sine and cosine are computed
    /// by [series] and rounded to `f64` before scaling.
    pub fn from_angle<M, A>(magnitude: M, angle: A, degrees: bool) -> Result<Self, FractionError>
    where
        M: Into<Operand>,
        A: Into<Operand>,
    {
        let magnitude = magnitude.into().into_fraction()?;
        let mut angle = angle.into().into_fraction()?;
        if degrees {
            angle = series::to_radians(&angle);
        }
        let cos = Fraction::try_from(series::cos(&angle, DEFAULT_TERMS).to_f64())?;
        let sin = Fraction::try_from(series::sin(&angle, DEFAULT_TERMS).to_f64())?;
        Ok(Vector {
            x: &magnitude * cos,
            y: magnitude * sin,
            z: Fraction::zero(),
        })
    }

    /// Every component multiplied by `k`.
    pub fn scale<K: Into<Operand>>(&self, k: K) -> Result<Vector, FractionError> {
        let k = k.into().into_fraction()?;
        Ok(self * &k)
    }

    pub fn dot(&self, other: &Vector) -> Fraction {
        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: &self.y * &other.z - &self.z * &other.y,
            y: &self.z * &other.x - &self.x * &other.z,
            z: &self.x * &other.y - &self.y * &other.x,
        }
    }

    /// `|v|²`, which unlike the magnitude is exact.
    pub fn magnitude_squared(&self) -> Fraction {
        self.dot(self)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().to_f64().sqrt()
    }

    /// `v / |v|`. Fails for the zero vector.
    pub fn unit_vector(&self) -> Result<Vector, FractionError> {
        let magnitude = Fraction::try_from(self.magnitude())?;
        let inverse = magnitude.inverse()?;
        Ok(self * &inverse)
    }

    /// The angle between two vectors in radians, in `[0, π]`.
    pub fn angle_between(&self, other: &Vector) -> Result<f64, FractionError> {
        let lengths = self.magnitude_squared() * other.magnitude_squared();
        if lengths.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let cos = self.dot(other).to_f64() / lengths.to_f64().sqrt();
        Ok(cos.max(-1.).min(1.).acos())
    }

    pub fn angle_between_degrees(&self, other: &Vector) -> Result<f64, FractionError> {
        Ok(self.angle_between(other)?.to_degrees())
    }

    /// The scalar projection of `other` onto `self`, `self · other / |self|`.
    pub fn comp(&self, other: &Vector) -> Result<Fraction, FractionError> {
        let magnitude = Fraction::try_from(self.magnitude())?;
        self.dot(other).checked_div(magnitude)
    }

    /// The vector projection of `other` onto `self`, `self · (self · other) / |self|²`.
    pub fn projection(&self, other: &Vector) -> Result<Vector, FractionError> {
        let factor = self.dot(other).checked_div(self.magnitude_squared())?;
        Ok(self * &factor)
    }

    /// The volume of the parallelepiped spanned by `self`, `b` and `c`, `|self · (b × c)|`.
    pub fn volume_of_parallelepiped(&self, b: &Vector, c: &Vector) -> Fraction {
        self.dot(&b.cross(c)).abs()
    }

    fn nonzero_components(&self) -> usize {
        [&self.x, &self.y, &self.z]
            .iter()
            .filter(|component| !component.is_zero())
            .count()
    }

    /// Exactly one non-zero component.
    pub fn is_r1(&self) -> bool {
        self.nonzero_components() == 1
    }

    /// Exactly two non-zero components.
    pub fn is_r2(&self) -> bool {
        self.nonzero_components() == 2
    }

    /// All three components non-zero.
    pub fn is_r3(&self) -> bool {
        self.nonzero_components() == 3
    }

    /// The plane through the point `self` with the given normal, as `ax + by + cz = d`.
    pub fn scalar_equation_of_plane(&self, normal: &Vector) -> String {
        format!(
            "{}x + {}y + {}z = {}",
            normal.x,
            normal.y,
            normal.z,
            normal.dot(self)
        )
    }

    /// The plane through the points `self`, `q` and `r`, as `ax + by + cz = d`.
    pub fn equation_of_plane(&self, q: &Vector, r: &Vector) -> String {
        let normal = (q - self).cross(&(r - self));
        self.scalar_equation_of_plane(&normal)
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, other: &'b Vector) -> Vector {
        Vector {
            x: &self.x + &other.x,
            y: &self.y + &other.y,
            z: &self.z + &other.z,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        &self + &other
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, other: &'b Vector) -> Vector {
        Vector {
            x: &self.x - &other.x,
            y: &self.y - &other.y,
            z: &self.z - &other.z,
        }
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        &self - &other
    }
}

impl<'a, 'b> Mul<&'b Fraction> for &'a Vector {
    type Output = Vector;

    fn mul(self, k: &'b Fraction) -> Vector {
        Vector {
            x: &self.x * k,
            y: &self.y * k,
            z: &self.z * k,
        }
    }
}

impl<'a> Neg for &'a Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            x: -&self.x,
            y: -&self.y,
            z: -&self.z,
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
