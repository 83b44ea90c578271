use std::fmt;

/// Coordinate axis, used to report which component failed validation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A coordinate could not be constructed from the supplied components.
///
/// Both variants carry the full `(x, y)` pair as supplied by the caller so the
/// failing call site can be identified from the message alone.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidCoordinateError {
    /// The component is NaN or infinite.
    NonFinite { axis: Axis, x: f64, y: f64 },
    /// The component has a fractional part where an integral value was required.
    NonDecimal { axis: Axis, x: f64, y: f64 },
}

impl InvalidCoordinateError {
    /// The component that failed validation.
    pub fn axis(&self) -> Axis {
        match *self {
            Self::NonFinite { axis, .. } | Self::NonDecimal { axis, .. } => axis,
        }
    }

    /// The `(x, y)` pair that was rejected.
    pub fn components(&self) -> (f64, f64) {
        match *self {
            Self::NonFinite { x, y, .. } | Self::NonDecimal { x, y, .. } => (x, y),
        }
    }
}

impl fmt::Display for InvalidCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { axis, x, y } => {
                write!(f, "Coordinate#{axis} must be finite {{x={x}, y={y}}}")
            }
            Self::NonDecimal { axis, x, y } => {
                write!(f, "Coordinate#{axis} must be a non-decimal {{x={x}, y={y}}}")
            }
        }
    }
}

impl std::error::Error for InvalidCoordinateError {}

/// Failure to parse a coordinate from text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseCoordinateError {
    /// The input is not of the form `(x, y)` or `x, y`.
    Malformed(String),
    /// A component is not a number.
    Component { input: String, axis: Axis },
    /// Both components parsed but do not form a valid coordinate.
    Invalid(InvalidCoordinateError),
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(f, "malformed coordinate: {input:?}"),
            Self::Component { input, axis } => {
                write!(f, "coordinate {input:?} has a non-numeric {axis} component")
            }
            Self::Invalid(e) => write!(f, "invalid coordinate: {e}"),
        }
    }
}

impl std::error::Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidCoordinateError> for ParseCoordinateError {
    fn from(e: InvalidCoordinateError) -> Self {
        Self::Invalid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_axis_and_pair() {
        let e = InvalidCoordinateError::NonDecimal { axis: Axis::Y, x: 4.0, y: 5.1 };
        assert_eq!(e.to_string(), "Coordinate#y must be a non-decimal {x=4, y=5.1}");
    }

    #[test]
    fn accessors_echo_input() {
        let e = InvalidCoordinateError::NonFinite { axis: Axis::X, x: f64::INFINITY, y: 1.0 };
        assert_eq!(e.axis(), Axis::X);
        assert_eq!(e.components(), (f64::INFINITY, 1.0));
    }

    #[test]
    fn parse_error_chains_source() {
        use std::error::Error;

        let inner = InvalidCoordinateError::NonFinite { axis: Axis::X, x: f64::NAN, y: 0.0 };
        let e = ParseCoordinateError::from(inner);
        assert!(e.source().is_some());
        assert!(ParseCoordinateError::Malformed("?".into()).source().is_none());
    }
}
