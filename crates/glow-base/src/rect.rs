use std::ops::{Add, Sub};

use crate::Vec2;

/// Axis-aligned rectangle, half-open on the max side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub const fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Sub<Output = T> + Copy> Rect<T> {
    pub fn from_min_max(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn min(&self) -> Vec2<T> {
        self.origin
    }

    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: Add<Output = T> + Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn contains_rect(&self, other: Rect<T>) -> bool {
        let self_max = self.max();
        let other_max = other.max();
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other_max.x <= self_max.x
            && other_max.y <= self_max.y
    }

    /// Overlapping part of both rectangles, `None` if they do not overlap.
    pub fn intersection(&self, other: Rect<T>) -> Option<Rect<T>> {
        let self_max = self.max();
        let other_max = other.max();
        let min = Vec2::new(
            partial_max(self.origin.x, other.origin.x),
            partial_max(self.origin.y, other.origin.y),
        );
        let max = Vec2::new(
            partial_min(self_max.x, other_max.x),
            partial_min(self_max.y, other_max.y),
        );
        if min.x < max.x && min.y < max.y {
            Some(Rect::from_min_max(min, max))
        } else {
            None
        }
    }
}

impl Rect<usize> {
    /// Rectangle covering a whole image of the given size.
    pub fn full(size: Vec2<usize>) -> Self {
        Self::new(Vec2::zero(), size)
    }

    pub fn area(&self) -> usize {
        self.size.area()
    }

    pub fn is_empty(&self) -> bool {
        self.size.x == 0 || self.size.y == 0
    }
}

fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}
