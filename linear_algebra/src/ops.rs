/// Primitive integers accepted as matrix sizes and coordinates.
///
/// Signed types let callers pass negative values, which are rejected by the
/// matrix instead of wrapping around.
pub trait Integral: Copy {
    fn to_i128(self) -> i128;
}

macro_rules! impl_integral {
    ($($t:ty),*) => {
        $(
            impl Integral for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Converts `value` into a position in `0..bound`.
pub(crate) fn checked_position(value: impl Integral, bound: usize) -> Option<usize> {
    let value = value.to_i128();
    (0 <= value && value < bound as i128).then_some(value as usize)
}

/// Bounds required of matrix elements by the row-parallel code paths.
#[cfg(feature = "parallel")]
pub trait Element: Send + Sync {}
#[cfg(feature = "parallel")]
impl<R: Send + Sync> Element for R {}

/// Bounds required of matrix elements by the row-parallel code paths.
#[cfg(not(feature = "parallel"))]
pub trait Element {}
#[cfg(not(feature = "parallel"))]
impl<R> Element for R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_position() {
        assert_eq!(checked_position(0u8, 3), Some(0));
        assert_eq!(checked_position(2i64, 3), Some(2));
        assert_eq!(checked_position(3usize, 3), None);
        assert_eq!(checked_position(-1i32, 3), None);
        assert_eq!(checked_position(isize::MIN, 3), None);
        assert_eq!(checked_position(0, 0), None);
    }

    #[test]
    fn test_integral_widening() {
        assert_eq!(u64::MAX.to_i128(), u64::MAX as i128);
        assert_eq!((-5i8).to_i128(), -5);
    }
}
