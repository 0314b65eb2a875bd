//! A wrapper around [`nalgebra::Matrix2xX`] interpreting it as a particle's trajectory.

use crate::error::{Result, StreamlineError};
use nalgebra::{Matrix2xX, Vector2};

/// A straight line between two consecutive positions
pub type Segment = [Vector2<f64>; 2];

/// Positions of a particle at subsequent time steps.
///
/// The positions are stored as the matrix' columns, ordered by time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory(pub Matrix2xX<f64>);

impl Trajectory {
    /// Pair up x and y coordinates into positions.
    ///
    /// Fails if the coordinates differ in length or there are fewer than two of them.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(StreamlineError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(StreamlineError::TooFewPoints(x.len()));
        }
        let matrix = Matrix2xX::from_iterator(
            x.len(),
            x.iter().zip(y.iter()).flat_map(|(&x, &y)| [x, y]),
        );
        Ok(Trajectory(matrix))
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.0.ncols()
    }

    /// Always `false` for a trajectory constructed by [`Trajectory::from_xy`]
    pub fn is_empty(&self) -> bool {
        self.0.ncols() == 0
    }

    /// Get the position at index `i`
    pub fn point(&self, i: usize) -> Vector2<f64> {
        self.0.column(i).clone_owned()
    }

    /// Iterate over the positions in order
    pub fn points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.0.column_iter().map(|column| column.clone_owned())
    }

    /// Consecutive positions paired into `len() - 1` segments
    pub fn segments(&self) -> Vec<Segment> {
        self.0
            .column_iter()
            .zip(self.0.column_iter().skip(1))
            .map(|(p, q)| [p.clone_owned(), q.clone_owned()])
            .collect()
    }
}
