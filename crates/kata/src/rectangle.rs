//! Rectangle factory.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::json::{self, Reconstruct};
use crate::result::KataResult;

/// A width/height pair with a derived area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Width
    #[serde(serialize_with = "serialize_dimension")]
    pub width: f64,
    /// Height
    #[serde(serialize_with = "serialize_dimension")]
    pub height: f64,
}

/// Largest magnitude below which every whole `f64` is an exact integer (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole dimensions are written as JSON integers (`10`, not `10.0`)
#[allow(clippy::cast_possible_truncation, clippy::trivially_copy_pass_by_ref)]
fn serialize_dimension<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Rectangle {
    /// Create a new rectangle
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`, computed from the current field values
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Reconstruct for Rectangle {
    const FIELDS: &'static [&'static str] = &["width", "height"];

    fn from_values(values: Vec<Value>) -> KataResult<Self> {
        let [width, height] = json::take_exact::<2>(values)?;
        Ok(Self::new(json::convert(width)?, json::convert(height)?))
    }
}

/// Build a rectangle
#[must_use]
pub const fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}
