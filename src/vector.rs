//! A minimal 2D vector type for Node positions and movement directions.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D point or direction in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// horizontal component
    pub x: f32,
    /// vertical component
    pub y: f32,
}

impl Vec2 {
    /// the origin / zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new vector from its components.
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns the length of this vector.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the Euclidean distance between two points.
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Returns the point halfway between two points.
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Returns this vector scaled to length 1.
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.x, self.y)
    }
}
