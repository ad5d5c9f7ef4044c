use std::fmt;

use crate::error::DimensionError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 64;

/// Board size in columns (`width`) and rows (`height`).
///
/// Both axes are always in `1..=MAX_DIMENSION`. Boards smaller than 4 on an
/// axis are playable; they just cannot produce a win along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Validate a width and height.
    pub fn new(width: i64, height: i64) -> Result<Self, DimensionError> {
        Ok(Dimensions {
            width: check_axis("width", width)?,
            height: check_axis("height", height)?,
        })
    }

    /// Like [`Dimensions::new`], but each invalid axis is replaced by its
    /// default (7 columns, 6 rows) instead of failing.
    pub fn or_default(width: i64, height: i64) -> Self {
        Dimensions {
            width: axis_or_default("width", width, DEFAULT_WIDTH),
            height: axis_or_default("height", height, DEFAULT_HEIGHT),
        }
    }

    /// Build dimensions from raw user text (e.g. CLI arguments or a form).
    ///
    /// Empty, non-numeric, non-positive and oversize values fall back to the
    /// default for that axis. Surrounding whitespace is ignored.
    pub fn from_input(width: &str, height: &str) -> Self {
        Dimensions {
            width: parse_axis("width", width, DEFAULT_WIDTH),
            height: parse_axis("height", height, DEFAULT_HEIGHT),
        }
    }

    /// Replace the axes given as raw user text, keeping the others.
    ///
    /// An override that does not parse to a valid size falls back to the
    /// default for that axis, not to the current value.
    pub fn with_overrides(self, width: Option<&str>, height: Option<&str>) -> Self {
        Dimensions {
            width: width.map_or(self.width, |raw| parse_axis("width", raw, DEFAULT_WIDTH)),
            height: height.map_or(self.height, |raw| parse_axis("height", raw, DEFAULT_HEIGHT)),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn check_axis(axis: &'static str, value: i64) -> Result<usize, DimensionError> {
    match usize::try_from(value) {
        Ok(v) if (1..=MAX_DIMENSION).contains(&v) => Ok(v),
        _ => Err(DimensionError::OutOfRange {
            axis,
            value,
            max: MAX_DIMENSION,
        }),
    }
}

fn axis_or_default(axis: &'static str, value: i64, default: usize) -> usize {
    check_axis(axis, value).unwrap_or_else(|err| {
        tracing::warn!(%err, default, "invalid board {axis}, using default");
        default
    })
}

fn parse_axis(axis: &'static str, raw: &str, default: usize) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(value) => axis_or_default(axis, value, default),
        Err(_) => {
            tracing::warn!(input = raw, default, "board {axis} is not a number, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seven_by_six() {
        let dims = Dimensions::default();
        assert_eq!((dims.width(), dims.height()), (7, 6));
        assert_eq!(dims.area(), 42);
        assert_eq!(dims.to_string(), "7x6");
    }

    #[test]
    fn test_new_accepts_small_boards() {
        let dims = Dimensions::new(1, 1).unwrap();
        assert_eq!((dims.width(), dims.height()), (1, 1));
        assert!(Dimensions::new(64, 64).is_ok());
    }

    #[test]
    fn test_new_rejects_degenerate_sizes() {
        assert_eq!(
            Dimensions::new(0, 6),
            Err(DimensionError::OutOfRange {
                axis: "width",
                value: 0,
                max: MAX_DIMENSION,
            })
        );
        assert!(Dimensions::new(7, -1).is_err());
        assert!(Dimensions::new(65, 6).is_err());
    }

    #[test]
    fn test_or_default_replaces_only_bad_axis() {
        let dims = Dimensions::or_default(-4, 10);
        assert_eq!((dims.width(), dims.height()), (7, 10));

        let dims = Dimensions::or_default(9, 0);
        assert_eq!((dims.width(), dims.height()), (9, 6));
    }

    #[test]
    fn test_from_input_parses_numbers() {
        let dims = Dimensions::from_input(" 10 ", "8");
        assert_eq!((dims.width(), dims.height()), (10, 8));
    }

    #[test]
    fn test_from_input_falls_back_on_garbage() {
        assert_eq!(Dimensions::from_input("", ""), Dimensions::default());
        assert_eq!(Dimensions::from_input("abc", "4.5"), Dimensions::default());
        assert_eq!(Dimensions::from_input("-2", "0"), Dimensions::default());
        assert_eq!(
            Dimensions::from_input("1000", "3"),
            Dimensions::new(7, 3).unwrap()
        );
    }

    #[test]
    fn test_with_overrides() {
        let base = Dimensions::new(10, 9).unwrap();
        assert_eq!(base.with_overrides(None, None), base);
        assert_eq!(
            base.with_overrides(Some("5"), None),
            Dimensions::new(5, 9).unwrap()
        );
        assert_eq!(
            base.with_overrides(None, Some("tall")),
            Dimensions::new(10, 6).unwrap()
        );
    }
}
