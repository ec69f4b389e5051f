//! Studies and their attribute enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::Keyed;
use crate::panel::Panel;

/// Kind of predictand a study models. Fixed when the study is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StudyType {
    /// Predict a category.
    Class,
    /// Order specimens.
    Rank,
    /// Predict a number.
    #[default]
    Number,
    /// Predict a probability.
    Chance,
}

impl StudyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyType::Class => "Class",
            StudyType::Rank => "Rank",
            StudyType::Number => "Number",
            StudyType::Chance => "Chance",
        }
    }
}

/// Whether the service is building the study's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StudyStatus {
    #[default]
    Running,
    Standby,
    Stopped,
}

impl StudyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyStatus::Running => "Running",
            StudyStatus::Standby => "Standby",
            StudyStatus::Stopped => "Stopped",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "Private",
            Visibility::Public => "Public",
        }
    }
}

impl fmt::Display for StudyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StudyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A study as the client sees it.
///
/// Identifier and locations are assigned by the service. The type is fixed
/// for the life of the study; status and visibility can be changed through
/// the panel controls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Study {
    pub study_identifier: String,
    pub study_name: String,
    pub study_location: String,
    #[serde(rename = "type")]
    study_type: StudyType,
    pub status: StudyStatus,
    pub visibility: Visibility,
    pub owner_identifier: String,
    pub owner_name: String,
    pub table_location: String,
    pub model_location: String,
    pub panel_location: String,
    pub roster_location: String,
    #[serde(default)]
    panel: Panel,
}

impl Study {
    pub fn new(
        study_name: impl Into<String>,
        study_type: StudyType,
        status: StudyStatus,
        visibility: Visibility,
    ) -> Self {
        Self {
            study_name: study_name.into(),
            study_type,
            status,
            visibility,
            ..Self::default()
        }
    }

    /// Running, private study of the given type.
    pub fn with_type(study_type: StudyType) -> Self {
        Self {
            study_type,
            ..Self::default()
        }
    }

    pub fn study_type(&self) -> StudyType {
        self.study_type
    }

    /// Latest panel report.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Replaces the panel-derived fields with a fresh report.
    pub fn apply_panel(&mut self, panel: &Panel) {
        self.panel.clone_from(panel);
    }
}

impl Keyed for Study {
    fn key(&self) -> &str {
        &self.study_identifier
    }
}

impl fmt::Display for Study {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Study:")?;
        writeln!(f, "  study_identifier={}", self.study_identifier)?;
        writeln!(f, "  study_name={}", self.study_name)?;
        writeln!(f, "  study_location={}", self.study_location)?;
        writeln!(f, "  type={}", self.study_type)?;
        writeln!(f, "  status={}", self.status)?;
        writeln!(f, "  visibility={}", self.visibility)?;
        writeln!(f, "  owner_identifier={}", self.owner_identifier)?;
        writeln!(f, "  owner_name={}", self.owner_name)?;
        writeln!(f, "  table_location={}", self.table_location)?;
        writeln!(f, "  model_location={}", self.model_location)?;
        writeln!(f, "  panel_location={}", self.panel_location)?;
        writeln!(f, "  roster_location={}", self.roster_location)?;
        let panel = &self.panel;
        writeln!(f, "  name_control_location={}", panel.name_control_location)?;
        writeln!(f, "  status_control_location={}", panel.status_control_location)?;
        writeln!(
            f,
            "  visibility_control_location={}",
            panel.visibility_control_location
        )?;
        writeln!(f, "  block_count={}", panel.block_count)?;
        writeln!(f, "  cell_count={}", panel.cell_count)?;
        writeln!(f, "  prospect_count={}", panel.prospect_count)?;
        writeln!(f, "  creation_time={}", panel.creation_time)?;
        writeln!(f, "  latest_block_time={}", panel.latest_block_time)?;
        writeln!(f, "  latest_prospect_time={}", panel.latest_prospect_time)
    }
}
