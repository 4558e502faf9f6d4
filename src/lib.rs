#[macro_use] extern crate failure;
#[macro_use] extern crate log;
extern crate num_traits;

#[cfg(test)] #[macro_use] extern crate stridemat_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

#[cfg(test)]
macro_rules! assert_matches {
    ($pat:pat, $expr:expr $(,)*)
    => {
        match $expr {
            $pat => {},
            ref actual => panic!(
                "assertion failed: expected {}, got {:?}",
                stringify!($pat), actual),
        }
    };
}

/// Error kind for matrix and vector operations.
///
/// Every fallible operation in this crate reports exactly one of these;
/// there is no boxed context chain to unwrap, so callers can match on
/// the kind directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Fail)]
pub enum MatError {
    #[fail(display = "a required matrix argument is empty")]
    EmptyArgument,
    #[fail(display = "matrix is neither a single row nor a single column")]
    NotAVector,
    #[fail(display = "element index is out of range for the vector")]
    IndexOutOfRange,
    #[fail(display = "vectors have incompatible lengths")]
    IncompatibleShapes,
    #[fail(display = "operation is only defined for vectors of length 3")]
    UndefinedForShape,
    #[fail(display = "cannot reshape a matrix that borrows its storage")]
    NotOwningMatrix,
    #[fail(display = "allocation failed while reshaping a matrix")]
    OutOfMemory,
}

mod mat;
pub mod vec;

pub use crate::mat::Mat;
