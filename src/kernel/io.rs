use super::ConstraintError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use ndarray::{Array1, ArrayView1};

/// Adapter trait for reading a signal as a contiguous 1D sample slice.
pub trait Signal1D<T> {
    /// Borrow the underlying samples as a contiguous slice.
    fn samples(&self) -> Result<&[T], ConstraintError>;
}

impl<T> Signal1D<T> for [T] {
    fn samples(&self) -> Result<&[T], ConstraintError> {
        Ok(self)
    }
}

impl<T, const N: usize> Signal1D<T> for [T; N] {
    fn samples(&self) -> Result<&[T], ConstraintError> {
        Ok(self)
    }
}

#[cfg(feature = "alloc")]
impl<T> Signal1D<T> for Vec<T> {
    fn samples(&self) -> Result<&[T], ConstraintError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T> Signal1D<T> for Array1<T> {
    fn samples(&self) -> Result<&[T], ConstraintError> {
        self.as_slice()
            .ok_or(ConstraintError::NonContiguous { arg: "signal" })
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> Signal1D<T> for ArrayView1<'a, T> {
    fn samples(&self) -> Result<&[T], ConstraintError> {
        self.as_slice()
            .ok_or(ConstraintError::NonContiguous { arg: "signal" })
    }
}

#[cfg(test)]
mod tests {
    use super::Signal1D;

    #[test]
    fn slice_and_array_adapters() {
        let a = [1.0f32, 2.0, 3.0];
        assert_eq!(a.samples().expect("array adapter").len(), 3);

        let s: &[f32] = &a;
        assert_eq!(s.samples().expect("slice adapter")[1], 2.0);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn vec_adapter() {
        let v = vec![1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(v.samples().expect("vec adapter"), [1.0, 2.0, 3.0, 4.0]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn ndarray_adapters() {
        use super::ConstraintError;
        use ndarray::{s, Array1};

        let arr = Array1::from(vec![1.0f64, 2.0, 3.0, 4.0]);
        assert_eq!(arr.samples().expect("array1 read")[2], 3.0);
        assert_eq!(arr.view().samples().expect("view read").len(), 4);

        // A strided view has no contiguous slice to borrow.
        let strided = arr.slice(s![..;2]);
        assert_eq!(
            strided.samples().expect_err("strided view"),
            ConstraintError::NonContiguous { arg: "signal" }
        );
    }
}
