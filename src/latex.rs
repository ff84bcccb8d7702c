//! LaTeX-friendly matrix output
//!
//! Matrices are printed one row per line with entries separated by `& ` and
//! rows terminated by ` \\`, so a block can be pasted directly into an
//! amsmath `bmatrix` environment. The last row ends with a trailing space
//! instead of the row separator.

use nalgebra::storage::RawStorage;
use nalgebra::{Dim, Matrix, Scalar};
use std::fmt::Display;
use std::io::{self, Write};

/// Formats the matrix in the bmatrix-ready layout.
pub fn matrix_to_string<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> String
where
    T: Scalar + Display,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (nrows, ncols) = matrix.shape();
    let mut out = String::new();
    for i in 0..nrows {
        for j in 0..ncols - 1 {
            out.push_str(&format!("{} & ", matrix[(i, j)]));
        }
        let terminator = if i == nrows - 1 { " " } else { " \\\\" };
        out.push_str(&format!("{}{}\n", matrix[(i, ncols - 1)], terminator));
    }
    out
}

/// Writes the matrix in the bmatrix-ready layout.
pub fn write_matrix<T, R, C, S, W>(out: &mut W, matrix: &Matrix<T, R, C, S>) -> io::Result<()>
where
    T: Scalar + Display,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
    W: Write,
{
    out.write_all(matrix_to_string(matrix).as_bytes())
}
