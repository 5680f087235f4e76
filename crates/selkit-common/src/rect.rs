//! A plain rectangle value.

use serde::Serialize;
use serde_json::Value;

use crate::json::{FillFields, JsonError, number_field};

/// Width and height, with the area derived on demand.
///
/// No validation is applied: negative or non-finite sizes are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its two sides.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl FillFields for Rect {
    const TYPE_NAME: &'static str = "Rect";

    fn fill_field(&mut self, name: &str, value: Value) -> Result<bool, JsonError> {
        match name {
            "width" => self.width = number_field(name, &value)?,
            "height" => self.height = number_field(name, &value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
