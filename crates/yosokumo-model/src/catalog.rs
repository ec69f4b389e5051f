use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::KeyedCollection;
use crate::study::Study;

/// Every study a user holds a role on, keyed by study identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub user_identifier: String,
    pub user_name: String,
    pub catalog_location: String,
    #[serde(default)]
    pub studies: KeyedCollection<Study>,
}

impl Catalog {
    pub fn new(user_identifier: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_identifier: user_identifier.into(),
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// True if the study's identifier was not yet in the catalog.
    pub fn add_study(&mut self, study: Study) -> bool {
        self.studies.upsert(study)
    }

    /// Adds the study and returns the one it replaced, if any.
    pub fn add_study_capturing(&mut self, study: Study) -> Option<Study> {
        self.studies.upsert_capturing(study)
    }

    pub fn remove_study(&mut self, study_identifier: &str) -> bool {
        self.studies.remove(study_identifier)
    }

    pub fn study(&self, study_identifier: &str) -> Option<&Study> {
        self.studies.get(study_identifier)
    }

    pub fn contains_study(&self, study_identifier: &str) -> bool {
        self.studies.contains(study_identifier)
    }

    pub fn clear_studies(&mut self) {
        self.studies.clear();
    }

    pub fn len(&self) -> usize {
        self.studies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Catalog:")?;
        writeln!(f, "  user_identifier={}", self.user_identifier)?;
        writeln!(f, "  user_name={}", self.user_name)?;
        writeln!(f, "  catalog_location={}", self.catalog_location)?;
        writeln!(f, "  studies={}", self.studies.len())?;
        for (key, study) in &self.studies {
            writeln!(f, "    {key}  {}", study.study_name)?;
        }
        Ok(())
    }
}
