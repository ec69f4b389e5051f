use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::ScalarValue;

/// A `(key, value)` pair.
///
/// Inside a specimen (row) the key names the predictor the value belongs to;
/// inside a column-oriented cell block it is the key of the specimen. The
/// type is the same in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub key: u64,
    pub value: ScalarValue,
}

impl Cell {
    pub fn new(key: u64, value: ScalarValue) -> Self {
        Self { key, value }
    }

    /// Alias for [`Cell::key`] in row context.
    pub fn name(&self) -> u64 {
        self.key
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn value(&self) -> ScalarValue {
        self.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cell:")?;
        writeln!(f, "  key={}", self.key)?;
        writeln!(f, "  value={}", self.value)
    }
}
