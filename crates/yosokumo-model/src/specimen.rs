use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::{ModelError, Result};
use crate::sequence;
use crate::value::ScalarValue;

/// Whether a specimen takes part in model building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecimenStatus {
    #[default]
    Active,
    Inactive,
}

impl SpecimenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecimenStatus::Active => "Active",
            SpecimenStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for SpecimenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecimenStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(SpecimenStatus::Active),
            "inactive" => Ok(SpecimenStatus::Inactive),
            _ => Err(format!("unknown SpecimenStatus: {s}")),
        }
    }
}

/// One row of a study's table: a predictand and the cells that explain it.
///
/// Cells are kept in insertion order. Each cell's key is the name of the
/// predictor it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpecimenRecord", into = "SpecimenRecord")]
pub struct Specimen {
    pub key: u64,
    pub status: SpecimenStatus,
    weight: u64,
    pub predictand: ScalarValue,
    cells: Vec<Cell>,
}

impl Default for Specimen {
    fn default() -> Self {
        Self {
            key: 0,
            status: SpecimenStatus::Active,
            weight: 1,
            predictand: ScalarValue::Empty,
            cells: Vec::new(),
        }
    }
}

impl Specimen {
    /// Active specimen with weight 1, an empty predictand and no cells.
    pub fn new(key: u64) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    /// Replaces the predictand, builder style.
    #[must_use]
    pub fn with_predictand(mut self, predictand: ScalarValue) -> Self {
        self.predictand = predictand;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: SpecimenStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the weight, builder style.
    pub fn with_weight(mut self, weight: u64) -> Result<Self> {
        self.set_weight(weight)?;
        Ok(self)
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: u64) -> Result<()> {
        if weight == 0 {
            return Err(ModelError::InvalidWeight(weight));
        }
        self.weight = weight;
        Ok(())
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Appends cells in order; true if at least one was added.
    pub fn add_cells(&mut self, cells: impl IntoIterator<Item = Cell>) -> bool {
        sequence::extend_counting(&mut self.cells, cells)
    }

    /// Removes up to `n` cells from the end of the sequence.
    pub fn remove_cells(&mut self, n: usize) -> bool {
        sequence::remove_from_end(&mut self.cells, n)
    }

    pub fn clear_cells(&mut self) {
        self.cells.clear();
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for Specimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Specimen:")?;
        writeln!(f, "  key={}", self.key)?;
        writeln!(f, "  status={}", self.status)?;
        writeln!(f, "  weight={}", self.weight)?;
        writeln!(f, "  predictand={}", self.predictand)?;
        writeln!(f, "  cells={}", self.cells.len())?;
        for cell in &self.cells {
            writeln!(f, "    {}={}", cell.key, cell.value)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct SpecimenRecord {
    key: u64,
    status: SpecimenStatus,
    weight: u64,
    predictand: ScalarValue,
    #[serde(default)]
    cells: Vec<Cell>,
}

impl TryFrom<SpecimenRecord> for Specimen {
    type Error = ModelError;

    fn try_from(record: SpecimenRecord) -> Result<Self> {
        let mut specimen = Specimen::new(record.key)
            .with_status(record.status)
            .with_predictand(record.predictand)
            .with_weight(record.weight)?;
        specimen.cells = record.cells;
        Ok(specimen)
    }
}

impl From<Specimen> for SpecimenRecord {
    fn from(specimen: Specimen) -> Self {
        Self {
            key: specimen.key,
            status: specimen.status,
            weight: specimen.weight,
            predictand: specimen.predictand,
            cells: specimen.cells,
        }
    }
}
