//! Exact linear algebra over big rationals.

use num_rational::BigRational;
use num_traits::Zero;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("matrix is singular, no pivot for column {column}")]
pub struct Singular {
    pub column: usize,
}

/// Solves `a x = b` by Gauss-Jordan elimination.
pub fn solve<const N: usize>(
    mut a: [[BigRational; N]; N],
    mut b: [BigRational; N],
) -> Result<[BigRational; N], Singular> {
    for column in 0..N {
        // any non-zero pivot will do since there is no rounding to worry about
        let pivot = (column..N)
            .find(|&row| !a[row][column].is_zero())
            .ok_or(Singular { column })?;

        a.swap(column, pivot);
        b.swap(column, pivot);

        let divisor = a[column][column].clone();
        for value in a[column].iter_mut().skip(column) {
            *value /= &divisor;
        }
        b[column] /= &divisor;

        let pivot_row = a[column].clone();
        let pivot_rhs = b[column].clone();

        for (index, (row, rhs)) in a.iter_mut().zip(b.iter_mut()).enumerate() {
            if index == column || row[column].is_zero() {
                continue;
            }
            let factor = row[column].clone();
            for (value, p) in row.iter_mut().zip(pivot_row.iter()).skip(column) {
                *value -= &factor * p;
            }
            *rhs -= &factor * &pivot_rhs;
        }

        tracing::trace!(column, pivot, "eliminated");
    }

    Ok(b)
}
