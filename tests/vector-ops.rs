extern crate stridemat;
#[macro_use] extern crate stridemat_assert_close;
extern crate rand;

use stridemat::{vec, Mat, MatError};

use rand::Rng;

fn col(data: &[f64]) -> Mat<'static> {
    Mat::from_row_major_data((data.len(), 1), data.to_vec())
}

fn random_col(n: usize) -> Mat<'static> {
    let mut rng = rand::thread_rng();
    let data = (0..n).map(|_| rng.gen_range(-10.0, 10.0)).collect();
    Mat::from_row_major_data((n, 1), data)
}

#[test]
fn worked_example() {
    let a = col(&[1.0, 2.0, 3.0]);
    let b = col(&[4.0, 5.0, 6.0]);
    assert_eq!(vec::dot(&a, &b), Ok(32.0));

    let mut c = Mat::zeros((3, 1));
    vec::cross(&mut c, &a, &b).unwrap();
    assert_eq!(c.row_major_data(), &[-3.0, 6.0, -3.0]);

    // the cross product is orthogonal to both inputs
    assert_close!(abs=1e-12, vec::dot(&c, &a).unwrap(), 0.0);
    assert_close!(abs=1e-12, vec::dot(&c, &b).unwrap(), 0.0);

    assert_eq!(vec::sqnorm(&col(&[3.0, 4.0])), Ok(25.0));
}

#[test]
fn dot_commutes() {
    for _ in 0..10 {
        let n: usize = rand::thread_rng().gen_range(1, 8);
        let a = random_col(n);
        let b = random_col(n);
        assert_eq!(vec::dot(&a, &b), vec::dot(&b, &a));
    }
}

#[test]
fn cross_anticommutes() {
    for _ in 0..10 {
        let a = random_col(3);
        let b = random_col(3);
        let mut ab = Mat::zeros((3, 1));
        let mut ba = Mat::zeros((3, 1));
        vec::cross(&mut ab, &a, &b).unwrap();
        vec::cross(&mut ba, &b, &a).unwrap();
        for k in 0..3 {
            assert_close!(abs=1e-12,
                vec::get(&ab, k).unwrap(),
                -vec::get(&ba, k).unwrap());
        }
    }
}

#[test]
fn normalize_yields_unit_norm() {
    for _ in 0..10 {
        let mut v = random_col(5);
        if vec::sqnorm(&v).unwrap() == 0.0 {
            continue; // astronomically unlikely, but the zero vector is a no-op
        }
        vec::normalize(&mut v).unwrap();
        assert_close!(vec::sqnorm(&v).unwrap(), 1.0);
    }
}

#[test]
fn views_behave_like_owners() {
    // a 3x1 slice of a larger matrix sees the same math as a packed copy
    let mut big = Mat::from_row_major_data((3, 4), vec![
        0.0, 1.5, 0.0, 0.0,
        0.0, -2.0, 0.0, 0.0,
        0.0, 0.25, 0.0, 0.0,
    ]);
    let packed = col(&[1.5, -2.0, 0.25]);
    let other = col(&[2.0, 0.5, -1.0]);

    {
        let strided = big.col_view(1);
        assert_eq!(vec::len(&strided), 3);
        assert_eq!(vec::dot(&strided, &other), vec::dot(&packed, &other));
        assert_eq!(vec::sqnorm(&strided), vec::sqnorm(&packed));
    }

    {
        let mut strided = big.col_view(1);
        vec::normalize(&mut strided).unwrap();
        assert_close!(vec::sqnorm(&strided).unwrap(), 1.0);
    }
    // elements outside the viewed column were not touched
    assert_eq!(*big.at(0, 0), 0.0);
    assert_eq!(*big.at(2, 3), 0.0);
}

#[test]
fn cross_destination_policies() {
    let a = col(&[1.0, 0.0, 0.0]);
    let b = col(&[0.0, 1.0, 0.0]);

    // an owning destination of the wrong shape is reshaped in place
    let mut dest = Mat::zeros((2, 2));
    vec::cross(&mut dest, &a, &b).unwrap();
    assert_eq!(dest.dims(), (3, 1));
    assert_eq!(&dest.row_major_data()[..3], &[0.0, 0.0, 1.0]);

    // an undersized borrowed view cannot be reshaped
    let mut backing = Mat::zeros((1, 2));
    {
        let mut view = backing.row_view(0);
        assert_eq!(
            vec::cross(&mut view, &a, &b),
            Err(MatError::NotOwningMatrix));
        assert_eq!(view.dims(), (1, 2));
    }

    // a borrowed view that is already a 3-vector is written in place
    let mut backing = Mat::zeros((4, 2));
    {
        let mut view = backing.slice((1, 0), (3, 1));
        vec::cross(&mut view, &a, &b).unwrap();
    }
    assert_eq!(*backing.at(3, 0), 1.0);
    assert_eq!(*backing.at(0, 0), 0.0);
}

#[test]
fn error_kinds_are_reportable() {
    // each kind formats to something human-readable through Display
    let errors = [
        MatError::EmptyArgument,
        MatError::NotAVector,
        MatError::IndexOutOfRange,
        MatError::IncompatibleShapes,
        MatError::UndefinedForShape,
        MatError::NotOwningMatrix,
        MatError::OutOfMemory,
    ];
    for e in &errors {
        assert!(!e.to_string().is_empty());
    }

    // and they box cleanly into the catch-all result alias
    fn chained() -> stridemat::FailResult<f64> {
        let out = vec::dot(&col(&[1.0]), &col(&[1.0, 2.0]))?;
        Ok(out)
    }
    assert!(chained().is_err());
}
