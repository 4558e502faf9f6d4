#[macro_use]
extern crate failure;
use std::fmt;

pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// Assert that two floats (or slices of floats) are approximately equal.
///
/// Accepts optional leading `rel=`/`abs=` tolerance arguments; a value
/// passes when it is within the relative tolerance of the larger operand
/// OR within the absolute tolerance. The default is a pure relative
/// comparison, which rejects any comparison against an exact zero, so
/// pass `abs=` when zeros are expected.
#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $a:expr, $b:expr $(,)*) => {{
        let a = $a;
        let b = $b;
        let tol = $crate::Tolerances { rel: $rel, abs: $abs };
        if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
            panic!(
                "not nearly equal! (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                tol.rel, tol.abs, a, b, e);
        }
    }};
    (rel=$rel:expr, $a:expr, $b:expr $(,)*) => {
        assert_close!(rel=$rel, abs=0.0, $a, $b)
    };
    (abs=$abs:expr, $a:expr, $b:expr $(,)*) => {
        assert_close!(rel=$crate::DEFAULT_REL_TOL, abs=$abs, $a, $b)
    };
    ($a:expr, $b:expr $(,)*) => {
        assert_close!(rel=$crate::DEFAULT_REL_TOL, abs=0.0, $a, $b)
    };
}

#[derive(Debug, Copy, Clone)]
pub struct Tolerances {
    pub rel: f64,
    pub abs: f64,
}

#[derive(Debug, Fail)]
pub struct CheckCloseError {
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { rel, abs }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // equal values (and infinities of the same sign) short-circuit
    if a == b {
        return true;
    }
    // infinities of opposite sign, and NaN
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= f64::max(rel * f64::max(a.abs(), b.abs()), abs)
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of `self` and `other` are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        if is_close(*self, *other, tol) {
            Ok(())
        } else {
            Err(CheckCloseError { values: (*self, *other), tol })
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl CheckClose for [f64] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len(), "length mismatch in assert_close!");
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl CheckClose for Vec<f64> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (&self[..]).check_close(&other[..], tol) }
}

impl CheckClose<[f64]> for Vec<f64> {
    fn check_close(&self, other: &[f64], tol: Tolerances) -> Result<(), CheckCloseError>
    { (&self[..]).check_close(other, tol) }
}

impl CheckClose<Vec<f64>> for [f64] {
    fn check_close(&self, other: &Vec<f64>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.check_close(&other[..], tol) }
}
