//! Entity to wire schema conversion.

use yosokumo_model::{
    Block, Catalog, Cell, Message, Panel, Predictor, Privilege, PrivilegeSet, Role, Roster,
    ScalarValue, Specimen, Study,
};

use crate::enums::encode_enum;
use crate::error::{Result, WireError};
use crate::schema;

/// An entity that can be written as a wire record.
pub trait ToWire {
    type Schema: prost::Message;

    /// Record name used in errors and log events.
    const RECORD: &'static str;

    fn to_wire(&self) -> Result<Self::Schema>;
}

fn cell_to_wire(cell: &Cell) -> schema::Cell {
    let mut wire = schema::Cell {
        name: Some(cell.key),
        ..Default::default()
    };
    match cell.value {
        ScalarValue::Empty => wire.empty = Some(true),
        ScalarValue::Natural(n) => wire.natural = Some(n),
        ScalarValue::Integer(n) => wire.integer = Some(n),
        ScalarValue::Real(x) => wire.real = Some(x),
        ScalarValue::Special(n) => wire.special = Some(n),
    }
    wire
}

/// Writes a specimen predictand. Specimen records have no special slot.
fn set_predictand(
    wire: &mut schema::Specimen,
    value: ScalarValue,
    record: &'static str,
) -> Result<()> {
    match value {
        ScalarValue::Empty => wire.empty = Some(true),
        ScalarValue::Natural(n) => wire.natural = Some(n),
        ScalarValue::Integer(n) => wire.integer = Some(n),
        ScalarValue::Real(x) => wire.real = Some(x),
        ScalarValue::Special(_) => {
            return Err(WireError::unsupported_value_kind(record, value.kind()));
        }
    }
    Ok(())
}

fn predictor_to_wire(predictor: &Predictor) -> schema::Predictor {
    schema::Predictor {
        name: Some(predictor.name()),
        status: encode_enum(predictor.status),
        r#type: encode_enum(predictor.predictor_type),
        level: encode_enum(predictor.level),
    }
}

fn specimen_to_wire(specimen: &Specimen) -> Result<schema::Specimen> {
    let mut wire = schema::Specimen {
        key: Some(specimen.key),
        status: encode_enum(specimen.status),
        weight: Some(specimen.weight()),
        cell: specimen.cells().iter().map(cell_to_wire).collect(),
        ..Default::default()
    };
    set_predictand(&mut wire, specimen.predictand, "specimen predictand")?;
    Ok(wire)
}

impl ToWire for Cell {
    type Schema = schema::Cell;
    const RECORD: &'static str = "Cell";

    fn to_wire(&self) -> Result<schema::Cell> {
        Ok(cell_to_wire(self))
    }
}

impl ToWire for Predictor {
    type Schema = schema::Predictor;
    const RECORD: &'static str = "Predictor";

    fn to_wire(&self) -> Result<schema::Predictor> {
        Ok(predictor_to_wire(self))
    }
}

impl ToWire for Specimen {
    type Schema = schema::Specimen;
    const RECORD: &'static str = "Specimen";

    fn to_wire(&self) -> Result<schema::Specimen> {
        specimen_to_wire(self)
    }
}

impl ToWire for Block<'_> {
    type Schema = schema::Block;
    const RECORD: &'static str = "Block";

    /// Cell blocks travel as specimens carrying only a key and a predictand,
    /// the same shape a decoded specimen block is reduced to.
    fn to_wire(&self) -> Result<schema::Block> {
        let mut wire = schema::Block {
            study_identifier: Some(self.study_identifier().to_string()),
            ..Default::default()
        };
        match self {
            Block::Empty(_) => wire.empty = Some(true),
            Block::Predictors(block) => {
                wire.predictor = block.predictors().iter().map(predictor_to_wire).collect();
            }
            Block::Specimens(block) => {
                wire.specimen = block
                    .specimens()
                    .iter()
                    .map(|s| specimen_to_wire(s))
                    .collect::<Result<Vec<_>>>()?;
            }
            Block::Cells(block) => {
                wire.specimen = block
                    .cells()
                    .iter()
                    .map(|cell| {
                        let mut specimen = specimen_to_wire(&Specimen::new(cell.key))?;
                        specimen.empty = None;
                        set_predictand(&mut specimen, cell.value, "cell block entry")?;
                        Ok(specimen)
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
        }
        Ok(wire)
    }
}

impl ToWire for Message {
    type Schema = schema::Message;
    const RECORD: &'static str = "Message";

    fn to_wire(&self) -> Result<schema::Message> {
        Ok(schema::Message {
            r#type: encode_enum(self.message_type),
            text: Some(self.text.clone()),
        })
    }
}

fn panel_to_wire(panel: &Panel) -> schema::Panel {
    use schema::panel as p;

    schema::Panel {
        study_identifier: None,
        study_name_control: Some(p::StudyNameControl {
            location: Some(panel.name_control_location.clone()),
            study_name: None,
        }),
        status_control: Some(p::StatusControl {
            location: Some(panel.status_control_location.clone()),
            status: None,
        }),
        visibility_control: Some(p::VisibilityControl {
            location: Some(panel.visibility_control_location.clone()),
            visibility: None,
        }),
        block_count_control: Some(p::BlockCountControl {
            location: None,
            block_count: Some(panel.block_count),
        }),
        cell_count_control: Some(p::CellCountControl {
            location: None,
            cell_count: Some(panel.cell_count),
        }),
        prospect_count_control: Some(p::ProspectCountControl {
            location: None,
            prospect_count: Some(panel.prospect_count),
        }),
        creation_time_control: Some(p::CreationTimeControl {
            location: None,
            creation_time: Some(panel.creation_time.clone()),
        }),
        latest_block_time_control: Some(p::LatestBlockTimeControl {
            location: None,
            latest_block_time: Some(panel.latest_block_time.clone()),
        }),
        latest_prospect_time_control: Some(p::LatestProspectTimeControl {
            location: None,
            latest_prospect_time: Some(panel.latest_prospect_time.clone()),
        }),
    }
}

impl ToWire for Panel {
    type Schema = schema::Panel;
    const RECORD: &'static str = "Panel";

    fn to_wire(&self) -> Result<schema::Panel> {
        Ok(panel_to_wire(self))
    }
}

fn resource(location: &str) -> Option<schema::study::Resource> {
    Some(schema::study::Resource {
        location: Some(location.to_string()),
    })
}

fn study_to_wire(study: &Study) -> schema::Study {
    schema::Study {
        study_identifier: Some(study.study_identifier.clone()),
        study_name: Some(study.study_name.clone()),
        location: Some(study.study_location.clone()),
        r#type: encode_enum(study.study_type()),
        status: encode_enum(study.status),
        visibility: encode_enum(study.visibility),
        owner: Some(schema::study::Owner {
            user_identifier: Some(study.owner_identifier.clone()),
            user_name: Some(study.owner_name.clone()),
        }),
        table: resource(&study.table_location),
        model: resource(&study.model_location),
        panel: resource(&study.panel_location),
        roster: resource(&study.roster_location),
        panel_report: Some(panel_to_wire(study.panel())),
    }
}

impl ToWire for Study {
    type Schema = schema::Study;
    const RECORD: &'static str = "Study";

    fn to_wire(&self) -> Result<schema::Study> {
        Ok(study_to_wire(self))
    }
}

fn privileges_to_wire(set: PrivilegeSet) -> schema::role::Privileges {
    let flag = |privilege: Privilege| Some(set.has(privilege));
    schema::role::Privileges {
        get_study: flag(Privilege::GetStudy),
        delete_study: flag(Privilege::DeleteStudy),
        get_roster: flag(Privilege::GetRoster),
        post_roster: flag(Privilege::PostRoster),
        get_role: flag(Privilege::GetRole),
        put_role: flag(Privilege::PutRole),
        delete_role: flag(Privilege::DeleteRole),
        get_panel: flag(Privilege::GetPanel),
        get_control: flag(Privilege::GetControl),
        put_control: flag(Privilege::PutControl),
        post_table: flag(Privilege::PostTable),
        get_model: flag(Privilege::GetModel),
        post_model: flag(Privilege::PostModel),
    }
}

fn role_to_wire(role: &Role) -> schema::Role {
    schema::Role {
        location: Some(role.location.clone()),
        roleholder: Some(schema::role::Roleholder {
            user_identifier: Some(role.user_identifier.clone()),
            user_name: Some(role.user_name.clone()),
        }),
        study: Some(schema::role::Study {
            study_identifier: Some(role.study_identifier.clone()),
            study_name: Some(role.study_name.clone()),
        }),
        privileges: Some(privileges_to_wire(role.privileges)),
    }
}

impl ToWire for Role {
    type Schema = schema::Role;
    const RECORD: &'static str = "Role";

    fn to_wire(&self) -> Result<schema::Role> {
        Ok(role_to_wire(self))
    }
}

impl ToWire for Roster {
    type Schema = schema::Roster;
    const RECORD: &'static str = "Roster";

    fn to_wire(&self) -> Result<schema::Roster> {
        Ok(schema::Roster {
            study_identifier: Some(self.study_identifier.clone()),
            study_name: Some(self.study_name.clone()),
            location: Some(self.roster_location.clone()),
            role: self.roles.values().map(role_to_wire).collect(),
        })
    }
}

impl ToWire for Catalog {
    type Schema = schema::Catalog;
    const RECORD: &'static str = "Catalog";

    fn to_wire(&self) -> Result<schema::Catalog> {
        Ok(schema::Catalog {
            user_identifier: Some(self.user_identifier.clone()),
            user_name: Some(self.user_name.clone()),
            location: Some(self.catalog_location.clone()),
            study: self.studies.values().map(study_to_wire).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yosokumo_model::{CellBlock, EmptyBlock, SpecimenBlock, ValueKind};

    #[test]
    fn cell_writes_name_slot() {
        let wire = cell_to_wire(&Cell::new(9, ScalarValue::Special(3)));
        assert_eq!(wire.name, Some(9));
        assert_eq!(wire.key, None);
        assert_eq!(wire.special, Some(3));
        assert_eq!(wire.empty, None);
    }

    #[test]
    fn special_predictand_is_unsupported() {
        let specimen = Specimen::new(1).with_predictand(ScalarValue::Special(4));
        assert!(matches!(
            specimen.to_wire(),
            Err(WireError::UnsupportedValueKind {
                record: "specimen predictand",
                kind: ValueKind::Special
            })
        ));
    }

    #[test]
    fn empty_block_sets_flag() {
        let wire = Block::from(EmptyBlock::new("S1")).to_wire().expect("encode block");
        assert_eq!(wire.empty, Some(true));
        assert_eq!(wire.study_identifier.as_deref(), Some("S1"));
        assert!(wire.predictor.is_empty() && wire.specimen.is_empty());
    }

    #[test]
    fn specimen_block_writes_full_specimens() {
        let mut specimen = Specimen::new(42).with_predictand(ScalarValue::Integer(7));
        specimen.add_cell(Cell::new(1, ScalarValue::Natural(2)));
        let block = Block::from(SpecimenBlock::with_specimens("S1", [&specimen]));
        let wire = block.to_wire().expect("encode block");
        assert_eq!(wire.empty, None);
        assert_eq!(wire.specimen.len(), 1);
        assert_eq!(wire.specimen[0].cell.len(), 1);
        assert_eq!(wire.specimen[0].integer, Some(7));
    }

    #[test]
    fn cell_block_writes_one_slot_per_entry() {
        let block = Block::from(CellBlock::with_cells(
            "S1",
            [Cell::new(5, ScalarValue::Real(0.5))],
        ));
        let wire = block.to_wire().expect("encode block");
        let entry = &wire.specimen[0];
        assert_eq!(entry.key, Some(5));
        assert_eq!(entry.real, Some(0.5));
        assert_eq!(entry.empty, None);
        assert!(entry.cell.is_empty());

        let block = Block::from(CellBlock::with_cells(
            "S1",
            [Cell::new(5, ScalarValue::Special(1))],
        ));
        assert!(matches!(
            block.to_wire(),
            Err(WireError::UnsupportedValueKind { record: "cell block entry", .. })
        ));
    }

    #[test]
    fn privileges_written_in_order() {
        let wire = privileges_to_wire(PrivilegeSet::GET_ROSTER | PrivilegeSet::POST_MODEL);
        assert_eq!(wire.get_roster, Some(true));
        assert_eq!(wire.post_model, Some(true));
        assert_eq!(wire.get_study, Some(false));
    }
}
