//! Transport envelopes.
//!
//! A [`Block`] carries one kind of payload for one study: nothing, a run of
//! predictors, a run of specimens or a run of cells. Callers fill a block,
//! hand it to the codec, and drop it. Each variant type only exposes the
//! operations for its own payload, so a block can never hold two kinds.
//!
//! [`SpecimenBlock`] borrows the specimens it carries. Specimens are often
//! large and are owned by the caller's table; the `'a` lifetime ties the block
//! to that storage.
//!
//! ```
//! use yosokumo_model::{Block, Specimen, SpecimenBlock};
//!
//! let rows = vec![Specimen::new(1), Specimen::new(2)];
//! let mut block = SpecimenBlock::new("8AB3D1C0");
//! block.add_specimens(&rows);
//! let block = Block::from(block);
//! assert_eq!(block.len(), 2);
//! ```

use std::fmt;

use crate::cell::Cell;
use crate::predictor::Predictor;
use crate::sequence;
use crate::specimen::Specimen;

/// Payload kind of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Empty,
    Predictor,
    Specimen,
    Cell,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Empty => "Empty",
            BlockKind::Predictor => "Predictor",
            BlockKind::Specimen => "Specimen",
            BlockKind::Cell => "Cell",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A block without payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmptyBlock {
    pub study_identifier: String,
}

impl EmptyBlock {
    pub fn new(study_identifier: impl Into<String>) -> Self {
        Self {
            study_identifier: study_identifier.into(),
        }
    }
}

/// A run of predictors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredictorBlock {
    pub study_identifier: String,
    predictors: Vec<Predictor>,
}

impl PredictorBlock {
    pub fn new(study_identifier: impl Into<String>) -> Self {
        Self {
            study_identifier: study_identifier.into(),
            predictors: Vec::new(),
        }
    }

    pub fn with_predictors(
        study_identifier: impl Into<String>,
        predictors: impl IntoIterator<Item = Predictor>,
    ) -> Self {
        let mut block = Self::new(study_identifier);
        block.add_predictors(predictors);
        block
    }

    pub fn add_predictor(&mut self, predictor: Predictor) {
        self.predictors.push(predictor);
    }

    /// Appends predictors; true if at least one was added.
    pub fn add_predictors(&mut self, predictors: impl IntoIterator<Item = Predictor>) -> bool {
        sequence::extend_counting(&mut self.predictors, predictors)
    }

    /// Removes up to `n` predictors from the end.
    pub fn remove_predictors(&mut self, n: usize) -> bool {
        sequence::remove_from_end(&mut self.predictors, n)
    }

    pub fn clear_predictors(&mut self) {
        self.predictors.clear();
    }

    pub fn predictors(&self) -> &[Predictor] {
        &self.predictors
    }

    pub fn len(&self) -> usize {
        self.predictors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictors.is_empty()
    }
}

/// A run of borrowed specimens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecimenBlock<'a> {
    pub study_identifier: String,
    specimens: Vec<&'a Specimen>,
}

impl<'a> SpecimenBlock<'a> {
    pub fn new(study_identifier: impl Into<String>) -> Self {
        Self {
            study_identifier: study_identifier.into(),
            specimens: Vec::new(),
        }
    }

    pub fn with_specimens(
        study_identifier: impl Into<String>,
        specimens: impl IntoIterator<Item = &'a Specimen>,
    ) -> Self {
        let mut block = Self::new(study_identifier);
        block.add_specimens(specimens);
        block
    }

    pub fn add_specimen(&mut self, specimen: &'a Specimen) {
        self.specimens.push(specimen);
    }

    /// Appends specimens; true if at least one was added.
    pub fn add_specimens(&mut self, specimens: impl IntoIterator<Item = &'a Specimen>) -> bool {
        sequence::extend_counting(&mut self.specimens, specimens)
    }

    /// Removes up to `n` specimens from the end.
    pub fn remove_specimens(&mut self, n: usize) -> bool {
        sequence::remove_from_end(&mut self.specimens, n)
    }

    pub fn clear_specimens(&mut self) {
        self.specimens.clear();
    }

    pub fn specimens(&self) -> &[&'a Specimen] {
        &self.specimens
    }

    pub fn len(&self) -> usize {
        self.specimens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specimens.is_empty()
    }
}

/// A run of cells, each keyed by specimen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellBlock {
    pub study_identifier: String,
    cells: Vec<Cell>,
}

impl CellBlock {
    pub fn new(study_identifier: impl Into<String>) -> Self {
        Self {
            study_identifier: study_identifier.into(),
            cells: Vec::new(),
        }
    }

    pub fn with_cells(
        study_identifier: impl Into<String>,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Self {
        let mut block = Self::new(study_identifier);
        block.add_cells(cells);
        block
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Appends cells; true if at least one was added.
    pub fn add_cells(&mut self, cells: impl IntoIterator<Item = Cell>) -> bool {
        sequence::extend_counting(&mut self.cells, cells)
    }

    /// Removes up to `n` cells from the end.
    pub fn remove_cells(&mut self, n: usize) -> bool {
        sequence::remove_from_end(&mut self.cells, n)
    }

    pub fn clear_cells(&mut self) {
        self.cells.clear();
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// One transport envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    Empty(EmptyBlock),
    Predictors(PredictorBlock),
    Specimens(SpecimenBlock<'a>),
    Cells(CellBlock),
}

impl Block<'_> {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Empty(_) => BlockKind::Empty,
            Block::Predictors(_) => BlockKind::Predictor,
            Block::Specimens(_) => BlockKind::Specimen,
            Block::Cells(_) => BlockKind::Cell,
        }
    }

    pub fn study_identifier(&self) -> &str {
        match self {
            Block::Empty(b) => &b.study_identifier,
            Block::Predictors(b) => &b.study_identifier,
            Block::Specimens(b) => &b.study_identifier,
            Block::Cells(b) => &b.study_identifier,
        }
    }

    /// Number of items in the active payload.
    pub fn len(&self) -> usize {
        match self {
            Block::Empty(_) => 0,
            Block::Predictors(b) => b.len(),
            Block::Specimens(b) => b.len(),
            Block::Cells(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<EmptyBlock> for Block<'_> {
    fn from(block: EmptyBlock) -> Self {
        Block::Empty(block)
    }
}

impl From<PredictorBlock> for Block<'_> {
    fn from(block: PredictorBlock) -> Self {
        Block::Predictors(block)
    }
}

impl<'a> From<SpecimenBlock<'a>> for Block<'a> {
    fn from(block: SpecimenBlock<'a>) -> Self {
        Block::Specimens(block)
    }
}

impl From<CellBlock> for Block<'_> {
    fn from(block: CellBlock) -> Self {
        Block::Cells(block)
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block:")?;
        writeln!(f, "  study_identifier={}", self.study_identifier())?;
        writeln!(f, "  kind={}", self.kind())?;
        writeln!(f, "  size={}", self.len())?;
        match self {
            Block::Empty(_) => {}
            Block::Predictors(b) => {
                for p in b.predictors() {
                    writeln!(
                        f,
                        "    {} {} {} {}",
                        p.name(),
                        p.status,
                        p.predictor_type,
                        p.level
                    )?;
                }
            }
            Block::Specimens(b) => {
                for s in b.specimens() {
                    writeln!(f, "    {} {} cells={}", s.key, s.predictand, s.len())?;
                }
            }
            Block::Cells(b) => {
                for c in b.cells() {
                    writeln!(f, "    {}={}", c.key, c.value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ScalarValue;

    fn names(block: &PredictorBlock) -> Vec<u64> {
        block.predictors().iter().map(Predictor::name).collect()
    }

    fn four_predictors() -> PredictorBlock {
        let predictors = (1..=4).map(|n| Predictor::new(n).expect("valid name"));
        PredictorBlock::with_predictors("S1", predictors)
    }

    #[test]
    fn remove_predictors_from_end() {
        let mut block = four_predictors();
        assert!(block.remove_predictors(2));
        assert_eq!(names(&block), vec![1, 2]);

        assert!(!block.remove_predictors(0));
        assert_eq!(names(&block), vec![1, 2]);

        assert!(block.remove_predictors(100));
        assert!(block.is_empty());
        assert!(!block.remove_predictors(100));
    }

    #[test]
    fn add_predictors_reports_change() {
        let mut block = PredictorBlock::new("S1");
        assert!(!block.add_predictors(std::iter::empty()));
        assert!(block.add_predictors([Predictor::default()]));
        block.add_predictor(Predictor::default());
        assert_eq!(block.len(), 2);
        block.clear_predictors();
        assert!(block.is_empty());
    }

    #[test]
    fn specimen_block_borrows() {
        let rows: Vec<Specimen> = (1..=3).map(Specimen::new).collect();
        let mut block = SpecimenBlock::with_specimens("S2", &rows);
        assert_eq!(block.len(), 3);
        assert!(std::ptr::eq(block.specimens()[0], &rows[0]));

        assert!(block.remove_specimens(1));
        assert_eq!(block.len(), 2);
        block.add_specimen(&rows[2]);
        assert_eq!(block.specimens()[2].key, 3);
        block.clear_specimens();
        assert!(block.is_empty());
        assert!(!block.add_specimens(std::iter::empty()));
    }

    #[test]
    fn cell_block_ops() {
        let mut block = CellBlock::new("S3");
        assert!(block.add_cells([
            Cell::new(1, ScalarValue::Natural(1)),
            Cell::new(2, ScalarValue::Natural(2)),
            Cell::new(3, ScalarValue::Natural(3)),
        ]));
        block.add_cell(Cell::new(4, ScalarValue::Empty));
        assert!(block.remove_cells(3));
        assert_eq!(block.cells(), &[Cell::new(1, ScalarValue::Natural(1))]);
        block.clear_cells();
        assert!(block.is_empty());
    }

    #[test]
    fn block_reports_active_payload() {
        let empty = Block::from(EmptyBlock::new("S4"));
        assert_eq!(empty.kind(), BlockKind::Empty);
        assert!(empty.is_empty());
        assert_eq!(empty.study_identifier(), "S4");

        let block = Block::from(four_predictors());
        assert_eq!(block.kind(), BlockKind::Predictor);
        assert_eq!(block.len(), 4);
        assert_eq!(block.study_identifier(), "S1");
    }

    #[test]
    fn display() {
        let block = Block::from(CellBlock::with_cells(
            "S5",
            [
                Cell::new(7, ScalarValue::Integer(-1)),
                Cell::new(8, ScalarValue::Empty),
            ],
        ));
        insta::assert_snapshot!(block.to_string(), @r"
        Block:
          study_identifier=S5
          kind=Cell
          size=2
            7=integer(-1)
            8=empty
        ");
    }
}
