use std::{
    f64::consts::{FRAC_PI_2, LOG10_E},
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

/// `0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// Represents a complex number with `f64` real and imaginary parts.
///
/// This is the widest numeric alternative of a
/// [`Value`](crate::interpreter::value::core::Value) and the storage type of
/// `c128` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

/// A complex number with `f32` parts, the storage type of `c64` fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex32 {
    /// The real part of the number.
    pub real:      f32,
    /// The imaginary part of the number.
    pub imaginary: f32,
}

impl Complex32 {
    /// Constructs a new `Complex32` from its parts.
    #[must_use]
    pub const fn new(real: f32, imaginary: f32) -> Self {
        Self { real, imaginary }
    }
}

impl From<Complex32> for ComplexNumber {
    fn from(value: Complex32) -> Self {
        Self { real:      f64::from(value.real),
               imaginary: f64::from(value.imaginary), }
    }
}

impl Display for Complex32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ComplexNumber::from(*self).fmt(f)
    }
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.imaginary.is_sign_negative() && !self.imaginary.is_nan() {
            write!(f, "({}-{}i)", self.real, -self.imaginary)
        } else {
            write!(f, "({}+{}i)", self.real, self.imaginary)
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` if both parts are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns `true` if either part is infinite.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.real.is_infinite() || self.imaginary.is_infinite()
    }

    /// Returns `true` if either part is `NaN` and neither part is infinite.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        !self.is_infinite() && (self.real.is_nan() || self.imaginary.is_nan())
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Multiplies both parts by a real scalar.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self { real:      self.real * factor,
               imaginary: self.imaginary * factor, }
    }

    /// Multiplies by `i`.
    #[must_use]
    const fn mul_i(self) -> Self {
        Self { real:      -self.imaginary,
               imaginary: self.real, }
    }

    /// Multiplies by `-i`.
    #[must_use]
    const fn mul_neg_i(self) -> Self {
        Self { real:      self.imaginary,
               imaginary: -self.real, }
    }

    /// Raises the complex number to a complex power.
    ///
    /// A zero base yields `1` for a zero exponent, `0` for an exponent with a
    /// positive real part and an infinity for a negative real part.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(4.0, 0.0);
    /// let res = c.pow(ComplexNumber::new(0.5, 0.0));
    /// assert!((res.real - 2.0).abs() < 1e-10);
    /// assert!(res.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn pow(self, exp: Self) -> Self {
        if self.is_zero() {
            if exp.is_zero() {
                return ONE;
            }
            if exp.real < 0.0 {
                if exp.imaginary == 0.0 {
                    return Self::new(f64::INFINITY, 0.0);
                }
                return Self::new(f64::INFINITY, f64::INFINITY);
            }
            if exp.real > 0.0 {
                return ZERO;
            }
            return Self::new(f64::NAN, f64::NAN);
        }

        let modulus = self.abs();
        let mut r = modulus.powf(exp.real);
        let arg = self.arg();
        let mut theta = exp.real * arg;
        if exp.imaginary != 0.0 {
            r *= (-exp.imaginary * arg).exp();
            theta += exp.imaginary * modulus.ln();
        }

        let (sin, cos) = theta.sin_cos();
        Self { real:      r * cos,
               imaginary: r * sin, }
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::value::complex::ComplexNumber;
    /// let s = ComplexNumber::new(-4.0, 0.0).sqrt();
    /// assert_eq!(s, ComplexNumber::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;

        if b == 0.0 {
            if a == 0.0 {
                return Self::new(0.0, b);
            }
            if a < 0.0 {
                return Self::new(0.0, (-a).sqrt().copysign(b));
            }
            return Self::new(a.sqrt(), b);
        }

        let r = a.hypot(b);
        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(b);

        Self { real, imaginary }
    }

    /// Returns the sine of the complex number.
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine of the complex number.
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    /// Returns the tangent of the complex number.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Returns the hyperbolic sine of the complex number.
    #[must_use]
    pub fn sinh(self) -> Self {
        Self { real:      self.real.sinh() * self.imaginary.cos(),
               imaginary: self.real.cosh() * self.imaginary.sin(), }
    }

    /// Returns the hyperbolic cosine of the complex number.
    #[must_use]
    pub fn cosh(self) -> Self {
        Self { real:      self.real.cosh() * self.imaginary.cos(),
               imaginary: self.real.sinh() * self.imaginary.sin(), }
    }

    /// Returns the hyperbolic tangent of the complex number.
    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// Returns the inverse sine of the complex number.
    ///
    /// Real arguments inside `[-1, 1]` stay on the real axis.
    #[must_use]
    pub fn asin(self) -> Self {
        if self.imaginary == 0.0 && self.real.abs() <= 1.0 {
            return Self::new(self.real.asin(), self.imaginary);
        }
        let squared = self * self;
        let root = Self::new(1.0 - squared.real, -squared.imaginary).sqrt();
        (self.mul_i() + root).ln().mul_neg_i()
    }

    /// Returns the inverse cosine of the complex number.
    #[must_use]
    pub fn acos(self) -> Self {
        let w = self.asin();
        Self::new(FRAC_PI_2 - w.real, -w.imaginary)
    }

    /// Returns the inverse tangent of the complex number.
    #[must_use]
    pub fn atan(self) -> Self {
        if self.imaginary == 0.0 {
            return Self::new(self.real.atan(), self.imaginary);
        }
        let iz = self.mul_i();
        ((ONE - iz).ln() - (ONE + iz).ln()).mul_i().scale(0.5)
    }

    /// Returns the inverse hyperbolic sine of the complex number.
    #[must_use]
    pub fn asinh(self) -> Self {
        if self.imaginary == 0.0 && self.real.abs() <= 1.0 {
            return Self::new(self.real.asinh(), self.imaginary);
        }
        let squared = self * self;
        let root = Self::new(1.0 + squared.real, squared.imaginary).sqrt();
        (self + root).ln()
    }

    /// Returns the inverse hyperbolic cosine of the complex number.
    #[must_use]
    pub fn acosh(self) -> Self {
        if self.is_zero() {
            return Self::new(0.0, FRAC_PI_2.copysign(self.imaginary));
        }
        let w = self.acos();
        if w.imaginary <= 0.0 {
            w.mul_i()
        } else {
            w.mul_neg_i()
        }
    }

    /// Returns the inverse hyperbolic tangent of the complex number.
    #[must_use]
    pub fn atanh(self) -> Self {
        self.mul_i().atan().mul_neg_i()
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use fieldenum::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 0.0);
    /// assert!((z.exp().real - 1.0).abs() < 1e-10);
    /// assert!(z.exp().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the natural logarithm of the complex number.
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }

    /// Returns the base-10 logarithm of the complex number.
    #[must_use]
    pub fn log10(self) -> Self {
        self.ln().scale(LOG10_E)
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real * rhs.real - self.imaginary * rhs.imaginary,
               imaginary: self.real * rhs.imaginary + self.imaginary * rhs.real, }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    /// Smith's division, with the C99 Annex G recovery of infinities and
    /// zeros when the straightforward result is `NaN + NaN i`.
    fn div(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.real, self.imaginary);
        let (c, d) = (rhs.real, rhs.imaginary);

        let (mut e, mut f) = if c.abs() >= d.abs() {
            let ratio = d / c;
            let denom = c + ratio * d;
            ((a + b * ratio) / denom, (b - a * ratio) / denom)
        } else {
            let ratio = c / d;
            let denom = d + ratio * c;
            ((a * ratio + b) / denom, (b * ratio - a) / denom)
        };

        if e.is_nan() && f.is_nan() {
            let unit = |x: f64| if x.is_infinite() { 1.0_f64 } else { 0.0 };

            if rhs.is_zero() && (!a.is_nan() || !b.is_nan()) {
                e = f64::INFINITY.copysign(c) * a;
                f = f64::INFINITY.copysign(c) * b;
            } else if (a.is_infinite() || b.is_infinite()) && c.is_finite() && d.is_finite() {
                let a = unit(a).copysign(a);
                let b = unit(b).copysign(b);
                e = f64::INFINITY * (a * c + b * d);
                f = f64::INFINITY * (b * c - a * d);
            } else if (c.is_infinite() || d.is_infinite()) && a.is_finite() && b.is_finite() {
                let c = unit(c).copysign(c);
                let d = unit(d).copysign(d);
                e = 0.0 * (a * c + b * d);
                f = 0.0 * (b * c - a * d);
            }
        }

        Self { real:      e,
               imaginary: f, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
