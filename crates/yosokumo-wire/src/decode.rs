//! Wire schema to entity conversion.

use tracing::debug;
use yosokumo_model::{
    Block, Catalog, Cell, CellBlock, EmptyBlock, Message, Panel, Predictor, PredictorBlock,
    Privilege, PrivilegeSet, Role, Roster, ScalarValue, Specimen, Study,
};

use crate::enums::decode_enum;
use crate::error::{Result, WireError};
use crate::schema;

/// An entity that can be rebuilt from its wire record.
///
/// Conversion fails rather than returning a partially filled entity.
pub trait FromWire: Sized {
    type Schema: prost::Message + Default;

    /// Record name used in errors and log events.
    const RECORD: &'static str;

    fn from_wire(wire: Self::Schema) -> Result<Self>;
}

/// First present slot wins, in the order empty, natural, integer, real,
/// special.
fn cell_value(wire: &schema::Cell) -> Result<ScalarValue> {
    if wire.empty.is_some() {
        Ok(ScalarValue::Empty)
    } else if let Some(n) = wire.natural {
        Ok(ScalarValue::Natural(n))
    } else if let Some(n) = wire.integer {
        Ok(ScalarValue::Integer(n))
    } else if let Some(x) = wire.real {
        Ok(ScalarValue::Real(x))
    } else if let Some(n) = wire.special {
        Ok(ScalarValue::Special(n))
    } else {
        Err(WireError::missing_value(Cell::RECORD))
    }
}

fn predictand(wire: &schema::Specimen) -> Result<ScalarValue> {
    if wire.empty.is_some() {
        Ok(ScalarValue::Empty)
    } else if let Some(n) = wire.natural {
        Ok(ScalarValue::Natural(n))
    } else if let Some(n) = wire.integer {
        Ok(ScalarValue::Integer(n))
    } else if let Some(x) = wire.real {
        Ok(ScalarValue::Real(x))
    } else {
        Err(WireError::missing_value(Specimen::RECORD))
    }
}

impl FromWire for Cell {
    type Schema = schema::Cell;
    const RECORD: &'static str = "Cell";

    fn from_wire(wire: schema::Cell) -> Result<Self> {
        let key = wire
            .key
            .or(wire.name)
            .ok_or_else(|| WireError::missing_field(Self::RECORD, "key"))?;
        Ok(Cell::new(key, cell_value(&wire)?))
    }
}

impl FromWire for Predictor {
    type Schema = schema::Predictor;
    const RECORD: &'static str = "Predictor";

    fn from_wire(wire: schema::Predictor) -> Result<Self> {
        let predictor = Predictor::with_attributes(
            wire.name.unwrap_or(1),
            decode_enum(wire.status)?,
            decode_enum(wire.r#type)?,
            decode_enum(wire.level)?,
        )?;
        Ok(predictor)
    }
}

impl FromWire for Specimen {
    type Schema = schema::Specimen;
    const RECORD: &'static str = "Specimen";

    fn from_wire(wire: schema::Specimen) -> Result<Self> {
        let mut specimen = Specimen::new(wire.key.unwrap_or(0))
            .with_status(decode_enum(wire.status)?)
            .with_weight(wire.weight.unwrap_or(1))?
            .with_predictand(predictand(&wire)?);
        for cell in wire.cell {
            specimen.add_cell(Cell::from_wire(cell)?);
        }
        Ok(specimen)
    }
}

impl FromWire for Block<'static> {
    type Schema = schema::Block;
    const RECORD: &'static str = "Block";

    /// The payload kind is inferred: the empty flag wins, then predictors.
    /// Anything else is a cell block; each wire specimen becomes one
    /// `(key, predictand)` cell and its status, weight and cells are dropped.
    fn from_wire(wire: schema::Block) -> Result<Self> {
        let study_identifier = wire.study_identifier.unwrap_or_default();

        if wire.empty == Some(true) {
            return Ok(EmptyBlock::new(study_identifier).into());
        }

        if !wire.predictor.is_empty() {
            let predictors = wire
                .predictor
                .into_iter()
                .map(Predictor::from_wire)
                .collect::<Result<Vec<_>>>()?;
            return Ok(PredictorBlock::with_predictors(study_identifier, predictors).into());
        }

        let mut block = CellBlock::new(study_identifier);
        for specimen in wire.specimen {
            let specimen = Specimen::from_wire(specimen)?;
            block.add_cell(Cell::new(specimen.key, specimen.predictand));
        }
        Ok(block.into())
    }
}

impl FromWire for Message {
    type Schema = schema::Message;
    const RECORD: &'static str = "Message";

    fn from_wire(wire: schema::Message) -> Result<Self> {
        let message_type = decode_enum(wire.r#type)?;
        let text = wire.text.as_deref().unwrap_or_default().trim();
        if text.is_empty() {
            debug!(record = Self::RECORD, "suppressing whitespace-only message");
            return Err(WireError::EmptyMessage);
        }
        Ok(Message::new(message_type, text))
    }
}

fn location_of(resource: Option<schema::study::Resource>) -> String {
    resource.and_then(|r| r.location).unwrap_or_default()
}

impl FromWire for Panel {
    type Schema = schema::Panel;
    const RECORD: &'static str = "Panel";

    fn from_wire(wire: schema::Panel) -> Result<Self> {
        Ok(Panel {
            name_control_location: wire
                .study_name_control
                .and_then(|c| c.location)
                .unwrap_or_default(),
            status_control_location: wire
                .status_control
                .and_then(|c| c.location)
                .unwrap_or_default(),
            visibility_control_location: wire
                .visibility_control
                .and_then(|c| c.location)
                .unwrap_or_default(),
            block_count: wire
                .block_count_control
                .and_then(|c| c.block_count)
                .unwrap_or_default(),
            cell_count: wire
                .cell_count_control
                .and_then(|c| c.cell_count)
                .unwrap_or_default(),
            prospect_count: wire
                .prospect_count_control
                .and_then(|c| c.prospect_count)
                .unwrap_or_default(),
            creation_time: wire
                .creation_time_control
                .and_then(|c| c.creation_time)
                .unwrap_or_default(),
            latest_block_time: wire
                .latest_block_time_control
                .and_then(|c| c.latest_block_time)
                .unwrap_or_default(),
            latest_prospect_time: wire
                .latest_prospect_time_control
                .and_then(|c| c.latest_prospect_time)
                .unwrap_or_default(),
        })
    }
}

impl FromWire for Study {
    type Schema = schema::Study;
    const RECORD: &'static str = "Study";

    fn from_wire(wire: schema::Study) -> Result<Self> {
        let mut study = Study::with_type(decode_enum(wire.r#type)?);
        study.status = decode_enum(wire.status)?;
        study.visibility = decode_enum(wire.visibility)?;
        study.study_identifier = wire.study_identifier.unwrap_or_default();
        study.study_name = wire.study_name.unwrap_or_default();
        study.study_location = wire.location.unwrap_or_default();
        if let Some(owner) = wire.owner {
            study.owner_identifier = owner.user_identifier.unwrap_or_default();
            study.owner_name = owner.user_name.unwrap_or_default();
        }
        study.table_location = location_of(wire.table);
        study.model_location = location_of(wire.model);
        study.panel_location = location_of(wire.panel);
        study.roster_location = location_of(wire.roster);
        if let Some(report) = wire.panel_report {
            study.apply_panel(&Panel::from_wire(report)?);
        }
        Ok(study)
    }
}

fn privileges_from_wire(wire: &schema::role::Privileges) -> PrivilegeSet {
    let flags = [
        wire.get_study,
        wire.delete_study,
        wire.get_roster,
        wire.post_roster,
        wire.get_role,
        wire.put_role,
        wire.delete_role,
        wire.get_panel,
        wire.get_control,
        wire.put_control,
        wire.post_table,
        wire.get_model,
        wire.post_model,
    ];
    Privilege::ALL
        .into_iter()
        .zip(flags)
        .filter(|(_, granted)| granted.unwrap_or(false))
        .map(|(privilege, _)| privilege)
        .collect()
}

impl FromWire for Role {
    type Schema = schema::Role;
    const RECORD: &'static str = "Role";

    fn from_wire(wire: schema::Role) -> Result<Self> {
        let mut role = Role {
            location: wire.location.unwrap_or_default(),
            ..Role::default()
        };
        if let Some(holder) = wire.roleholder {
            role.user_identifier = holder.user_identifier.unwrap_or_default();
            role.user_name = holder.user_name.unwrap_or_default();
        }
        if let Some(study) = wire.study {
            role.study_identifier = study.study_identifier.unwrap_or_default();
            role.study_name = study.study_name.unwrap_or_default();
        }
        if let Some(privileges) = &wire.privileges {
            role.privileges = privileges_from_wire(privileges);
        }
        Ok(role)
    }
}

impl FromWire for Roster {
    type Schema = schema::Roster;
    const RECORD: &'static str = "Roster";

    fn from_wire(wire: schema::Roster) -> Result<Self> {
        let mut roster = Roster::new(
            wire.study_identifier.unwrap_or_default(),
            wire.study_name.unwrap_or_default(),
        );
        roster.roster_location = wire.location.unwrap_or_default();
        for role in wire.role {
            let role = Role::from_wire(role)?;
            if roster.contains_role(&role.user_identifier) {
                return Err(WireError::duplicate_key(role.user_identifier));
            }
            roster.add_role(role);
        }
        Ok(roster)
    }
}

impl FromWire for Catalog {
    type Schema = schema::Catalog;
    const RECORD: &'static str = "Catalog";

    fn from_wire(wire: schema::Catalog) -> Result<Self> {
        let mut catalog = Catalog::new(
            wire.user_identifier.unwrap_or_default(),
            wire.user_name.unwrap_or_default(),
        );
        catalog.catalog_location = wire.location.unwrap_or_default();
        for study in wire.study {
            let study = Study::from_wire(study)?;
            if catalog.contains_study(&study.study_identifier) {
                return Err(WireError::duplicate_key(study.study_identifier));
            }
            catalog.add_study(study);
        }
        Ok(catalog)
    }
}
