use realm_coords::Coordinate;

use super::CartesianBound;
use crate::error::BoundError;

/// n×n bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SquareBound(CartesianBound);

impl SquareBound {
    pub fn new(bound: CartesianBound) -> Result<Self, BoundError> {
        let (width, height) = (bound.width(), bound.height());
        if width != height {
            return Err(BoundError::NotSquare { width, height });
        }
        Ok(Self(bound))
    }

    pub fn from_midpoint(center: Coordinate, radius: f64) -> Result<Self, BoundError> {
        Self::new(CartesianBound::from_midpoint(center, radius)?)
    }

    #[inline]
    pub fn side(self) -> f64 {
        self.0.width()
    }

    #[inline]
    pub fn as_bound(self) -> CartesianBound {
        self.0
    }
}

/// n×n bound where n is even, so its centre falls on a grid line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SquareEvenBound(SquareBound);

impl SquareEvenBound {
    pub fn new(bound: CartesianBound) -> Result<Self, BoundError> {
        let square = SquareBound::new(bound)?;
        let side = square.side();
        if side % 2.0 != 0.0 {
            return Err(BoundError::OddSide { side });
        }
        Ok(Self(square))
    }

    pub fn from_midpoint(center: Coordinate, radius: f64) -> Result<Self, BoundError> {
        Self::new(CartesianBound::from_midpoint(center, radius)?)
    }

    #[inline]
    pub fn side(self) -> f64 {
        self.0.side()
    }

    /// Half the side length. Always integral.
    #[inline]
    pub fn half_side(self) -> f64 {
        self.side() / 2.0
    }

    #[inline]
    pub fn as_square(self) -> SquareBound {
        self.0
    }

    #[inline]
    pub fn as_bound(self) -> CartesianBound {
        self.0.as_bound()
    }
}

impl From<SquareBound> for CartesianBound {
    fn from(square: SquareBound) -> Self {
        square.as_bound()
    }
}

impl From<SquareEvenBound> for SquareBound {
    fn from(square: SquareEvenBound) -> Self {
        square.as_square()
    }
}

impl From<SquareEvenBound> for CartesianBound {
    fn from(square: SquareEvenBound) -> Self {
        square.as_bound()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::of(x, y).unwrap()
    }

    fn rect(w: f64, h: f64) -> CartesianBound {
        CartesianBound::from_corners(Coordinate::ORIGIN, c(w, h)).unwrap()
    }

    #[test]
    fn square_accepts_equal_sides() {
        let square = SquareBound::new(rect(3.0, 3.0)).unwrap();
        assert_eq!(square.side(), 3.0);
        assert_eq!(CartesianBound::from(square), rect(3.0, 3.0));
    }

    #[test]
    fn square_rejects_rectangle() {
        assert_eq!(
            SquareBound::new(rect(4.0, 2.0)).unwrap_err(),
            BoundError::NotSquare { width: 4.0, height: 2.0 }
        );
    }

    #[test]
    fn even_accepts_even_side() {
        let even = SquareEvenBound::new(rect(4.0, 4.0)).unwrap();
        assert_eq!(even.side(), 4.0);
        assert_eq!(even.half_side(), 2.0);
    }

    #[test]
    fn even_rejects_odd_and_fractional_sides() {
        assert_eq!(SquareEvenBound::new(rect(3.0, 3.0)).unwrap_err(), BoundError::OddSide { side: 3.0 });
        assert_eq!(SquareEvenBound::new(rect(2.5, 2.5)).unwrap_err(), BoundError::OddSide { side: 2.5 });
    }

    #[test]
    fn even_checks_squareness_first() {
        assert!(matches!(SquareEvenBound::new(rect(4.0, 2.0)), Err(BoundError::NotSquare { .. })));
    }

    #[test]
    fn even_from_midpoint_with_integral_radius() {
        let even = SquareEvenBound::from_midpoint(c(5.0, 5.0), 3.0).unwrap();
        assert_eq!(even.side(), 6.0);
        assert_eq!(even.as_bound().midpoint(), c(5.0, 5.0));
        assert!(SquareEvenBound::from_midpoint(c(5.0, 5.0), 1.5).is_err());
    }
}
