use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use std::fmt;
use std::str::FromStr;

use crate::error::{Axis, InvalidCoordinateError, ParseCoordinateError};

/// Immutable position in a 2D space (world space, tile space, chunk space).
///
/// Components are always finite. `-0.0` is stored as `0.0`, which lets the
/// type implement `Eq`, `Hash` and `Ord` and be used as a map or set key.
///
/// Operations never mutate the receiver; every transform returns a new value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    x: f64,
    y: f64,
}

impl Coordinate {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    /// Constructs a coordinate from two finite components.
    ///
    /// `x` is checked before `y`; the first non-finite component is reported.
    pub fn of(x: f64, y: f64) -> Result<Self, InvalidCoordinateError> {
        if !x.is_finite() {
            return Err(InvalidCoordinateError::NonFinite { axis: Axis::X, x, y });
        }
        if !y.is_finite() {
            return Err(InvalidCoordinateError::NonFinite { axis: Axis::Y, x, y });
        }
        Ok(Self::from_finite(x, y))
    }

    /// Caller guarantees both components are finite.
    #[inline]
    pub(crate) fn from_finite(x: f64, y: f64) -> Self {
        debug_assert!(x.is_finite() && y.is_finite());
        // Adding positive zero folds -0.0 into 0.0.
        Self { x: x + 0.0, y: y + 0.0 }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Whether both components have no fractional part.
    #[inline]
    pub fn is_integral(self) -> bool {
        self.x.fract() == 0.0 && self.y.fract() == 0.0
    }

    /// Moves the coordinate by `(dx, dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Result<Self, InvalidCoordinateError> {
        Self::of(self.x + dx, self.y + dy)
    }

    /// Component-wise sum.
    pub fn offset(self, other: Coordinate) -> Result<Self, InvalidCoordinateError> {
        self.translate(other.x, other.y)
    }

    /// Component-wise `self - other`.
    pub fn difference(self, other: Coordinate) -> Result<Self, InvalidCoordinateError> {
        Self::of(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Result<Self, InvalidCoordinateError> {
        Self::of(self.x * factor, self.y * factor)
    }

    /// Halfway point between two coordinates.
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Self {
        // Halving first keeps the sum finite.
        Self::from_finite(self.x / 2.0 + other.x / 2.0, self.y / 2.0 + other.y / 2.0)
    }

    #[inline]
    pub fn distance(self, other: Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn distance_squared(self, other: Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn manhattan_distance(self, other: Coordinate) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Rounds both components toward negative infinity.
    #[inline]
    pub fn floor(self) -> Self {
        Self::from_finite(self.x.floor(), self.y.floor())
    }

    /// Rounds both components toward positive infinity.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::from_finite(self.x.ceil(), self.y.ceil())
    }

    /// Rounds both components to the nearest integer, halves toward positive infinity.
    #[inline]
    pub fn round(self) -> Self {
        Self::from_finite(round_half_up(self.x), round_half_up(self.y))
    }

    /// Integer grid indices, if the coordinate is integral and fits in `i64`.
    pub fn to_grid(self) -> Option<(i64, i64)> {
        Some((grid_index(self.x)?, grid_index(self.y)?))
    }

    /// Signed Cantor pairing of an integral coordinate.
    ///
    /// Maps every integral coordinate to a distinct non-negative integer, which
    /// makes it usable as a sparse key for chunk tables. Returns `None` for
    /// non-integral coordinates or when the result does not fit in `u128`.
    pub fn cantor_pair_signed(self) -> Option<u128> {
        let (x, y) = self.to_grid()?;
        let a = fold_signed(x);
        let b = fold_signed(y);

        let sum = a.checked_add(b)?;
        let triangle = sum.checked_mul(sum.checked_add(1)?)? / 2;
        triangle.checked_add(b)
    }
}

fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

fn grid_index(v: f64) -> Option<i64> {
    // i64::MAX as f64 is 2^63, which is itself out of range.
    if v.fract() != 0.0 || v < i64::MIN as f64 || v >= i64::MAX as f64 {
        return None;
    }
    Some(v as i64)
}

/// Interleaves signed integers onto the naturals: 0, -1, 1, -2, 2 -> 0, 1, 2, 3, 4.
fn fold_signed(v: i64) -> u128 {
    let v = i128::from(v);
    if v >= 0 { (2 * v) as u128 } else { (-2 * v - 1) as u128 }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

/// Lexicographic: `x` first, then `y`.
impl Ord for Coordinate {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.total_cmp(&other.x).then_with(|| self.y.total_cmp(&other.y))
    }
}

impl PartialOrd for Coordinate {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::from_finite(f64::from(x), f64::from(y))
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = InvalidCoordinateError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Self::of(x, y)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Accepts `(x, y)` and `x, y`, with arbitrary surrounding whitespace.
impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseCoordinateError::Malformed(s.to_string());

        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(malformed)?,
            None => trimmed,
        };
        let (xs, ys) = inner.split_once(',').ok_or_else(malformed)?;

        let component = |text: &str, axis| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| ParseCoordinateError::Component { input: s.to_string(), axis })
        };
        let x = component(xs, Axis::X)?;
        let y = component(ys, Axis::Y)?;

        Ok(Self::of(x, y)?)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    x: f64,
    y: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::of(raw.x, raw.y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::of(x, y).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn of_keeps_components() {
        let p = c(4.0, 5.0);
        assert_eq!(p.x(), 4.0);
        assert_eq!(p.y(), 5.0);
    }

    #[test]
    fn of_accepts_decimals() {
        let p = c(0.25, -7.5);
        assert_eq!((p.x(), p.y()), (0.25, -7.5));
        assert!(!p.is_integral());
    }

    #[test]
    fn of_rejects_nan_on_x_first() {
        let e = Coordinate::of(f64::NAN, f64::INFINITY).unwrap_err();
        assert_eq!(e.axis(), Axis::X);
    }

    #[test]
    fn of_rejects_infinite_y() {
        let e = Coordinate::of(1.0, f64::NEG_INFINITY).unwrap_err();
        assert!(matches!(e, InvalidCoordinateError::NonFinite { axis: Axis::Y, .. }));
    }

    #[test]
    fn origin_is_default() {
        assert_eq!(Coordinate::default(), Coordinate::ORIGIN);
        assert_eq!(Coordinate::ORIGIN, c(0.0, 0.0));
    }

    // ── value semantics ───────────────────────────────────────────────────

    #[test]
    fn equal_values_are_interchangeable() {
        assert_eq!(c(1.0, 2.0), c(1.0, 2.0));
        assert_ne!(c(1.0, 2.0), c(2.0, 1.0));
    }

    #[test]
    fn negative_zero_is_zero() {
        let a = c(-0.0, 0.0);
        let b = c(0.0, -0.0);
        assert_eq!(a, b);
        assert!(a.x().is_sign_positive());

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordering_is_x_then_y() {
        let set: BTreeSet<_> = [c(1.0, 5.0), c(0.0, 9.0), c(1.0, -1.0)].into_iter().collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(ordered, vec![c(0.0, 9.0), c(1.0, -1.0), c(1.0, 5.0)]);
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn translate_returns_new_value() {
        let p = c(1.0, 1.0);
        let q = p.translate(2.0, -3.0).unwrap();
        assert_eq!(q, c(3.0, -2.0));
        assert_eq!(p, c(1.0, 1.0));
    }

    #[test]
    fn offset_and_difference_are_inverse() {
        let a = c(3.5, -2.0);
        let b = c(1.0, 4.0);
        assert_eq!(a.offset(b).unwrap().difference(b).unwrap(), a);
    }

    #[test]
    fn scale_overflow_is_rejected() {
        assert!(c(f64::MAX, 0.0).scale(2.0).is_err());
        assert_eq!(c(2.0, -3.0).scale(0.5).unwrap(), c(1.0, -1.5));
    }

    #[test]
    fn midpoint_does_not_overflow() {
        let m = c(f64::MAX, 0.0).midpoint(c(f64::MAX, 2.0));
        assert_eq!(m, c(f64::MAX, 1.0));
    }

    #[test]
    fn distances() {
        let a = c(0.0, 0.0);
        let b = c(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.manhattan_distance(b), 7.0);
    }

    // ── rounding ──────────────────────────────────────────────────────────

    #[test]
    fn floor_ceil_round() {
        let p = c(1.5, -1.5);
        assert_eq!(p.floor(), c(1.0, -2.0));
        assert_eq!(p.ceil(), c(2.0, -1.0));
        assert_eq!(p.round(), c(2.0, -1.0));
        assert!(p.round().is_integral());
    }

    #[test]
    fn ceil_of_small_negative_is_positive_zero() {
        let p = c(-0.25, 0.0).ceil();
        assert!(p.x().is_sign_positive());
    }

    // ── grid and pairing ──────────────────────────────────────────────────

    #[test]
    fn to_grid_requires_integral() {
        assert_eq!(c(-3.0, 7.0).to_grid(), Some((-3, 7)));
        assert_eq!(c(0.5, 7.0).to_grid(), None);
        assert_eq!(c(1e300, 0.0).to_grid(), None);
    }

    #[test]
    fn cantor_pairing_known_values() {
        assert_eq!(c(0.0, 0.0).cantor_pair_signed(), Some(0));
        // (-1, 0) folds to (1, 0): (1 * 2) / 2 + 0
        assert_eq!(c(-1.0, 0.0).cantor_pair_signed(), Some(1));
        // (0, -1) folds to (0, 1): (1 * 2) / 2 + 1
        assert_eq!(c(0.0, -1.0).cantor_pair_signed(), Some(2));
        assert_eq!(c(0.5, 0.0).cantor_pair_signed(), None);
    }

    #[test]
    fn cantor_pairing_is_injective_on_small_grid() {
        let mut seen = HashSet::new();
        for x in -20..=20 {
            for y in -20..=20 {
                let key = Coordinate::from((x, y)).cantor_pair_signed().unwrap();
                assert!(seen.insert(key), "collision at ({x}, {y})");
            }
        }
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn display_and_parse_agree() {
        let p = c(-3.0, 0.125);
        assert_eq!(p.to_string(), "(-3, 0.125)");
        assert_eq!(p.to_string().parse::<Coordinate>().unwrap(), p);
    }

    #[test]
    fn parse_without_parens() {
        assert_eq!(" 4 , 5 ".parse::<Coordinate>().unwrap(), c(4.0, 5.0));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("(4, 5".parse::<Coordinate>(), Err(ParseCoordinateError::Malformed(_))));
        assert!(matches!("4 5".parse::<Coordinate>(), Err(ParseCoordinateError::Malformed(_))));
        assert!(matches!(
            "(4, five)".parse::<Coordinate>(),
            Err(ParseCoordinateError::Component { axis: Axis::Y, .. })
        ));
        assert!(matches!("(NaN, 1)".parse::<Coordinate>(), Err(ParseCoordinateError::Invalid(_))));
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn tuple_conversions() {
        let p = Coordinate::from((2, -9));
        assert_eq!(<(f64, f64)>::from(p), (2.0, -9.0));
        assert!(Coordinate::try_from((1.0, f64::NAN)).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_on_deserialize() {
        let p = c(1.5, 2.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":2.0}"#);
        assert_eq!(serde_json::from_str::<Coordinate>(&json).unwrap(), p);
        assert!(serde_json::from_str::<Coordinate>(r#"{"x":1e999,"y":0}"#).is_err());
    }
}
