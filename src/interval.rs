/*

    Closed scalar range [min, max].

    An Aabb is three of these, one slab per axis; containment and
    box overlap reduce to per-slab checks.

    @date: Sept 2025
*/

use crate::numeric::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Strictly positive width. NaN bounds are never valid.
    pub fn validate(&self) -> bool {
        self.max > self.min
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}


pub trait FloatConst: Copy {
    const INF: Self;
    const NEG_INF: Self;
}

impl FloatConst for f64 {
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let i = Interval::new(1.0, 7.0);
        assert!(i.contains(1.0) && i.contains(7.0) && i.contains(4.0));
        assert!(!i.contains(0.999) && !i.contains(7.001));
    }

    #[test]
    fn zero_width_and_nan_do_not_validate() {
        assert!(!Interval::new(3.0, 3.0).validate());
        assert!(!Interval::new(4.0, 3.0).validate());
        assert!(!Interval::new(Float::NAN, 3.0).validate());
        assert!(Interval::new(Float::NEG_INF, Float::INF).validate());
    }

    #[test]
    fn overlap_counts_touching_ends() {
        let a = Interval::new(0.0, 2.0);
        assert!(a.overlaps(&Interval::new(2.0, 5.0)));
        assert!(Interval::new(2.0, 5.0).overlaps(&a));
        assert!(!a.overlaps(&Interval::new(2.5, 5.0)));
    }
}
