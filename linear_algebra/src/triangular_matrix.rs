use crate::{
    ops::{checked_position, Element, Integral},
    MatrixError, MAX_MATRIX_SIZE,
};
use ark_std::{
    fmt,
    iter,
    ops::{Add, Index, IndexMut, MulAssign, Sub},
    rand::Rng,
    vec::*,
    UniformRand, Zero,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Square matrix of dimension `size` storing only the entries on and above
/// the diagonal.
///
/// Row `i` holds the logical columns `i..size`, so `rows[i][k]` is the entry
/// at `(i, i + k)`.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct UpperTriangularMatrix<R> {
    size: usize,
    rows: Vec<Vec<R>>,
}

impl<R> UpperTriangularMatrix<R> {
    /// Matrix of size `0`, a placeholder to be overwritten by assignment.
    pub fn empty() -> Self {
        Self {
            size: 0,
            rows: vec![],
        }
    }

    /// Builds a matrix of dimension `size`, filling the stored entry at
    /// `(i, j)` with `f(i, j)`.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> R,
    {
        let size = Self::check_size(size)?;
        log::trace!("allocating upper-triangular matrix of size {size}");

        let mut rows = Vec::with_capacity(size);
        for i in 0..size {
            let mut row = Vec::with_capacity(size - i);
            for j in i..size {
                row.push(f(i, j));
            }
            rows.push(row);
        }

        Ok(Self { size, rows })
    }

    fn check_size(size: impl Integral) -> Result<usize, MatrixError> {
        let requested = size.to_i128();
        if requested < 0 {
            log::debug!("rejected negative matrix size {requested}");
            return Err(MatrixError::InvalidSize(requested));
        }
        if requested > MAX_MATRIX_SIZE as i128 {
            log::debug!("rejected matrix size {requested} above {MAX_MATRIX_SIZE}");
            return Err(MatrixError::SizeTooLarge {
                size: usize::try_from(requested).unwrap_or(usize::MAX),
                max: MAX_MATRIX_SIZE,
            });
        }
        Ok(requested as usize)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Maps a logical coordinate to `(row, offset)` in the row storage.
    fn locate(&self, row: impl Integral, col: impl Integral) -> Result<(usize, usize), MatrixError> {
        match (
            checked_position(row, self.size),
            checked_position(col, self.size),
        ) {
            (Some(i), Some(j)) if i <= j => Ok((i, j - i)),
            _ => Err(MatrixError::IndexOutOfRange {
                row: row.to_i128(),
                col: col.to_i128(),
                size: self.size,
            }),
        }
    }

    /// Reference to the entry at `(row, col)`.
    ///
    /// Fails with [`MatrixError::IndexOutOfRange`] unless
    /// `0 <= row <= col < size`; entries below the diagonal are not stored.
    pub fn get(&self, row: impl Integral, col: impl Integral) -> Result<&R, MatrixError> {
        let (i, k) = self.locate(row, col)?;
        Ok(&self.rows[i][k])
    }

    pub fn get_mut(&mut self, row: impl Integral, col: impl Integral) -> Result<&mut R, MatrixError> {
        let (i, k) = self.locate(row, col)?;
        Ok(&mut self.rows[i][k])
    }

    pub fn set(&mut self, row: impl Integral, col: impl Integral, value: R) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Stored part of row `row`, i.e. the columns `row..size`.
    pub fn row(&self, row: impl Integral) -> Result<&[R], MatrixError> {
        checked_position(row, self.size)
            .map(|i| self.rows[i].as_slice())
            .ok_or(MatrixError::IndexOutOfRange {
                row: row.to_i128(),
                col: row.to_i128(),
                size: self.size,
            })
    }

    /// Iterates over the stored entries in row-major order, together with
    /// their logical coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &R)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(k, value)| ((i, i + k), value))
        })
    }
}

impl<R: Clone + Zero> UpperTriangularMatrix<R> {
    /// Creates a zero matrix from a possibly negative `size`.
    pub fn new(size: impl Integral) -> Result<Self, MatrixError> {
        Self::zero(Self::check_size(size)?)
    }

    pub fn zero(size: usize) -> Result<Self, MatrixError> {
        let size = Self::check_size(size)?;
        log::trace!("allocating upper-triangular matrix of size {size}");

        Ok(Self {
            size,
            rows: (0..size).map(|i| vec![R::zero(); size - i]).collect(),
        })
    }

    /// Value of the logical entry at `(row, col)`, zero below the diagonal.
    pub fn entry(&self, row: impl Integral, col: impl Integral) -> Result<R, MatrixError> {
        match (
            checked_position(row, self.size),
            checked_position(col, self.size),
        ) {
            (Some(i), Some(j)) if j < i => Ok(R::zero()),
            _ => self.get(row, col).cloned(),
        }
    }

    /// The full square matrix, with zeroes below the diagonal.
    pub fn to_dense(&self) -> Vec<Vec<R>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut dense = Vec::with_capacity(self.size);
                dense.resize(i, R::zero());
                dense.extend_from_slice(row);
                dense
            })
            .collect()
    }
}

impl<R: UniformRand> UpperTriangularMatrix<R> {
    pub fn rand<RND: Rng>(rng: &mut RND, size: usize) -> Result<Self, MatrixError> {
        Self::from_fn(size, |_, _| R::rand(rng))
    }
}

impl<R: Clone> UpperTriangularMatrix<R> {
    /// Replaces `self` with a deep copy of `other`, adopting its size.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

impl<R: Clone> Clone for UpperTriangularMatrix<R> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        self.rows.clone_from(&source.rows);
    }
}

/// Keeps the upper triangle of a square dense matrix.
impl<R> TryFrom<Vec<Vec<R>>> for UpperTriangularMatrix<R> {
    type Error = MatrixError;

    fn try_from(vecs: Vec<Vec<R>>) -> Result<Self, MatrixError> {
        let size = Self::check_size(vecs.len())?;
        if let Some(row) = vecs.iter().find(|row| row.len() != size) {
            return Err(MatrixError::DimensionMismatch(size, row.len()));
        }

        let rows = vecs
            .into_iter()
            .enumerate()
            .map(|(i, mut row)| {
                row.drain(..i);
                row
            })
            .collect();
        Ok(Self { size, rows })
    }
}

impl<R: Clone + Element> UpperTriangularMatrix<R> {
    fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self, MatrixError>
    where
        F: Fn(&R, &R) -> R + Send + Sync,
    {
        if self.size != other.size {
            log::debug!(
                "rejected elementwise operation on sizes {} and {}",
                self.size,
                other.size
            );
            return Err(MatrixError::DimensionMismatch(self.size, other.size));
        }

        let rows = cfg_iter!(self.rows)
            .zip(cfg_iter!(other.rows))
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| f(x, y)).collect::<Vec<R>>())
            .collect::<Vec<Vec<R>>>();
        Ok(Self {
            size: self.size,
            rows,
        })
    }
}

impl<R: Clone + Element + for<'a> Add<&'a R, Output = R>> UpperTriangularMatrix<R> {
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.try_add(other).ok()
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_with(other, |a, b| a.clone() + b)
    }
}

impl<R: Clone + Element + for<'a> Sub<&'a R, Output = R>> UpperTriangularMatrix<R> {
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.try_sub(other).ok()
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.zip_with(other, |a, b| a.clone() - b)
    }
}

impl<R: Clone + Element + for<'a> Add<&'a R, Output = R>> Add<&UpperTriangularMatrix<R>>
    for &UpperTriangularMatrix<R>
{
    type Output = Result<UpperTriangularMatrix<R>, MatrixError>;

    fn add(self, other: &UpperTriangularMatrix<R>) -> Self::Output {
        self.try_add(other)
    }
}

impl<R: Clone + Element + for<'a> Sub<&'a R, Output = R>> Sub<&UpperTriangularMatrix<R>>
    for &UpperTriangularMatrix<R>
{
    type Output = Result<UpperTriangularMatrix<R>, MatrixError>;

    fn sub(self, other: &UpperTriangularMatrix<R>) -> Self::Output {
        self.try_sub(other)
    }
}

impl<R: Element + for<'a> MulAssign<&'a R>> MulAssign<&R> for UpperTriangularMatrix<R> {
    fn mul_assign(&mut self, r: &R) {
        cfg_iter_mut!(self.rows).for_each(|row| row.iter_mut().for_each(|r_m| *r_m *= r))
    }
}

/// Panics with [`MatrixError::IndexOutOfRange`] outside the stored region.
impl<R> Index<(usize, usize)> for UpperTriangularMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &R {
        match self.get(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R> IndexMut<(usize, usize)> for UpperTriangularMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut R {
        match self.get_mut(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R: fmt::Display + Zero> fmt::Display for UpperTriangularMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = R::zero();
        for (i, row) in self.rows.iter().enumerate() {
            let cells = iter::repeat(&zero).take(i).chain(row);
            for (j, value) in cells.enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
