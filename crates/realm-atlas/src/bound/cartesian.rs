use realm_coords::{non_decimal, Coordinate};

use crate::error::{BoundError, BoundRule};

/// Axis-aligned n×k bound on a two-dimensional Cartesian plane.
///
/// ```text
///                    y
///                    ▲
///          tl        │       tr
///           ┌────────┼──────┐
///           │        │      │
/// ──────────┼────────┼──────┼────────────► x
///           │        │      │
///           └────────┼──────┘
///          bl        │       br
/// ```
///
/// Y grows upward. The four corners are kept exactly as supplied; construction
/// checks every [`BoundRule`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CartesianBound {
    tr: Coordinate,
    br: Coordinate,
    tl: Coordinate,
    bl: Coordinate,
}

impl CartesianBound {
    pub fn new(
        tr: Coordinate,
        br: Coordinate,
        tl: Coordinate,
        bl: Coordinate,
    ) -> Result<Self, BoundError> {
        let rules = [
            (BoundRule::RightEdgeVertical, tr.x() == br.x()),
            (BoundRule::TopEdgeHorizontal, tr.y() == tl.y()),
            (BoundRule::LeftEdgeVertical, bl.x() == tl.x()),
            (BoundRule::BottomEdgeHorizontal, bl.y() == br.y()),
            (BoundRule::TopEdgeOrdered, tr.x() > tl.x()),
            (BoundRule::RightEdgeOrdered, tr.y() > br.y()),
            (BoundRule::BottomEdgeOrdered, br.x() > bl.x()),
            (BoundRule::LeftEdgeOrdered, tl.y() > bl.y()),
        ];

        if let Some((rule, _)) = rules.into_iter().find(|(_, holds)| !holds) {
            return Err(BoundError::Violated(rule));
        }

        log::trace!("bound created: bl={bl} tr={tr}");
        Ok(Self { tr, br, tl, bl })
    }

    /// Builds a bound from its bottom-left and top-right corners.
    pub fn from_corners(bottom_left: Coordinate, top_right: Coordinate) -> Result<Self, BoundError> {
        let br = Coordinate::of(top_right.x(), bottom_left.y())?;
        let tl = Coordinate::of(bottom_left.x(), top_right.y())?;
        Self::new(top_right, br, tl, bottom_left)
    }

    /// Square bound extending `radius` from `center` in every direction.
    pub fn from_midpoint(center: Coordinate, radius: f64) -> Result<Self, BoundError> {
        Self::from_midpoint_with_radii(center, radius, radius)
    }

    /// Bound extending `horizontal_radius` along x and `vertical_radius` along y.
    pub fn from_midpoint_with_radii(
        center: Coordinate,
        horizontal_radius: f64,
        vertical_radius: f64,
    ) -> Result<Self, BoundError> {
        check_radius("horizontal_radius", horizontal_radius)?;
        check_radius("vertical_radius", vertical_radius)?;

        let (h, v) = (horizontal_radius, vertical_radius);
        Self::new(
            center.translate(h, v)?,
            center.translate(h, -v)?,
            center.translate(-h, v)?,
            center.translate(-h, -v)?,
        )
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.tr.x() - self.tl.x()
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.tr.y() - self.br.y()
    }

    #[inline]
    pub fn area(self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn top_left(self) -> Coordinate {
        self.tl
    }

    #[inline]
    pub fn top_right(self) -> Coordinate {
        self.tr
    }

    #[inline]
    pub fn bottom_left(self) -> Coordinate {
        self.bl
    }

    #[inline]
    pub fn bottom_right(self) -> Coordinate {
        self.br
    }

    /// Exact centre of the bound.
    #[inline]
    pub fn midpoint(self) -> Coordinate {
        self.bl.midpoint(self.tr)
    }

    /// Centre of the bound rounded down onto the grid.
    #[inline]
    pub fn midpoint_floored(self) -> Coordinate {
        self.midpoint().floor()
    }

    /// Closed containment: every edge is inside.
    #[inline]
    pub fn contains(self, p: Coordinate) -> bool {
        p.x() >= self.bl.x() && p.x() <= self.tr.x() && p.y() >= self.bl.y() && p.y() <= self.tr.y()
    }

    /// Every integral coordinate inside the bound, top row first, left to right.
    ///
    /// Cost is proportional to the area. Bounds with an edge beyond ±2^53 yield
    /// nothing, since adjacent integers there are no longer distinct `f64`s.
    pub fn cells(self) -> impl Iterator<Item = Coordinate> {
        let edges = [self.bl.x(), self.bl.y(), self.tr.x(), self.tr.y()];
        let (x0, x1, y0, y1) = if edges.iter().all(|v| v.abs() <= MAX_EXACT_INTEGER) {
            (
                self.bl.x().ceil() as i64,
                self.tr.x().floor() as i64,
                self.bl.y().ceil() as i64,
                self.tr.y().floor() as i64,
            )
        } else {
            log::debug!("bound {} .. {} is too far out to enumerate cells", self.bl, self.tr);
            (0, -1, 0, -1)
        };

        (y0..=y1)
            .rev()
            .flat_map(move |y| (x0..=x1).map(move |x| non_decimal::from_grid(x, y)))
            .filter(move |&cell| self.contains(cell))
    }
}

/// 2^53, the largest magnitude below which every integer is an exact `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn check_radius(name: &'static str, value: f64) -> Result<(), BoundError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BoundError::InvalidRadius { name, value })
    }
}
