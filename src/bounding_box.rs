//! Axis aligned bounding boxes used as data limits.

use nalgebra::{RealField, Vector2};

/// Axis aligned box spanned by its two extreme corners
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox<T: RealField> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,
    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Constructs the smallest box containing all points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_iter<Iter: Iterator<Item = Vector2<T>>>(mut points: Iter) -> Option<Self> {
        let mut min = points.next()?;
        let mut max = min.clone();
        for p in points {
            for i in 0..2 {
                if min[i] > p[i] {
                    min[i] = p[i].clone();
                }
                if max[i] < p[i] {
                    max[i] = p[i].clone();
                }
            }
        }
        Some(BoundingBox { min, max })
    }

    /// Smallest box containing both `self` and `other`
    pub fn union(&self, other: &Self) -> Self {
        BoundingBox {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Width and height
    pub fn size(&self) -> Vector2<T> {
        &self.max - &self.min
    }

    /// Checks whether a point lies inside or on the border
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Grow the box by `margin` in every direction
    pub fn expand(&self, margin: T) -> Self {
        let margin = Vector2::new(margin.clone(), margin);
        BoundingBox {
            min: &self.min - &margin,
            max: &self.max + &margin,
        }
    }
}

impl<T: RealField> From<[Vector2<T>; 2]> for BoundingBox<T> {
    fn from([min, max]: [Vector2<T>; 2]) -> Self {
        BoundingBox { min, max }
    }
}
