//! 2-D Points

#![allow(dead_code)]
use crate::pbrt::*;
use num_traits::{Num, Zero};
use std::ops::{Index, IndexMut};

/// A 2-D point containing numeric values. Also used to carry pairs of
/// uniform random samples and surface (u, v) coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;

impl<T: Num> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new 2-D zero point.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;

    /// Index the point by coordinate axis.
    ///
    /// * `axis` - 0 for x and 1 for y.
    fn index(&self, axis: usize) -> &Self::Output {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid axis for Point2 {}", axis),
        }
    }
}

impl<T> IndexMut<usize> for Point2<T> {
    /// Index the point by coordinate axis.
    ///
    /// * `axis` - 0 for x and 1 for y.
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Invalid axis for Point2 {}", axis),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
