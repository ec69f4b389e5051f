use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-reported operational state of a study.
///
/// The control locations are where the client sends study name, status and
/// visibility changes. Counters and timestamps are read-only reports; the
/// timestamps are kept exactly as the service formats them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Panel {
    pub name_control_location: String,
    pub status_control_location: String,
    pub visibility_control_location: String,
    pub block_count: u64,
    pub cell_count: u64,
    pub prospect_count: u64,
    pub creation_time: String,
    pub latest_block_time: String,
    pub latest_prospect_time: String,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Panel:")?;
        writeln!(f, "  name_control_location={}", self.name_control_location)?;
        writeln!(f, "  status_control_location={}", self.status_control_location)?;
        writeln!(
            f,
            "  visibility_control_location={}",
            self.visibility_control_location
        )?;
        writeln!(f, "  block_count={}", self.block_count)?;
        writeln!(f, "  cell_count={}", self.cell_count)?;
        writeln!(f, "  prospect_count={}", self.prospect_count)?;
        writeln!(f, "  creation_time={}", self.creation_time)?;
        writeln!(f, "  latest_block_time={}", self.latest_block_time)?;
        writeln!(f, "  latest_prospect_time={}", self.latest_prospect_time)
    }
}
