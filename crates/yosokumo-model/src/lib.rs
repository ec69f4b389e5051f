//! Entity model for the Yosokumo analytic-study client.
//!
//! Studies are tables: [`Predictor`]s describe the columns and
//! [`Specimen`]s are the rows, each holding a predictand and a sequence of
//! [`Cell`]s. Data travels to the service in [`Block`]s, one payload kind per
//! block. Access is described by [`Role`]s, collected per study in a
//! [`Roster`] and per user in a [`Catalog`].
//!
//! Nothing in this crate performs I/O; the wire codec lives in
//! `yosokumo-wire`.

pub mod block;
pub mod catalog;
pub mod cell;
pub mod collection;
pub mod error;
pub mod message;
pub mod panel;
pub mod predictor;
pub mod privilege;
pub mod role;
pub mod roster;
mod sequence;
pub mod specimen;
pub mod study;
pub mod value;

pub use block::{Block, BlockKind, CellBlock, EmptyBlock, PredictorBlock, SpecimenBlock};
pub use catalog::Catalog;
pub use cell::Cell;
pub use collection::{Keyed, KeyedCollection};
pub use error::{ModelError, Result};
pub use message::{Message, MessageType};
pub use panel::Panel;
pub use predictor::{Level, Predictor, PredictorStatus, PredictorType};
pub use privilege::{Privilege, PrivilegeSet};
pub use role::Role;
pub use roster::Roster;
pub use specimen::{Specimen, SpecimenStatus};
pub use study::{Study, StudyStatus, StudyType, Visibility};
pub use value::{ScalarValue, ValueKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_serializes() {
        let mut catalog = Catalog::new("U1", "Ada");
        let mut study = Study::with_type(StudyType::Chance);
        study.study_identifier = "S1".to_string();
        study.study_name = "Churn".to_string();
        catalog.add_study(study);

        let json = serde_json::to_string(&catalog).expect("serialize catalog");
        let round: Catalog = serde_json::from_str(&json).expect("deserialize catalog");
        assert_eq!(round, catalog);
        assert_eq!(round.study("S1").map(Study::study_type), Some(StudyType::Chance));
    }
}
