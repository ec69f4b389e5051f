//! Mapping between domain enums and wire enum numbers.
//!
//! Wire enum fields arrive as raw `i32`s. Every one is checked against the
//! declared range before it becomes a domain value; an absent field takes the
//! domain default.

use yosokumo_model::{
    Level, MessageType, PredictorStatus, PredictorType, SpecimenStatus, StudyStatus, StudyType,
    Visibility,
};

use crate::error::{Result, WireError};
use crate::schema;

/// A domain enum with a wire counterpart.
pub(crate) trait WireEnum: Sized + Default {
    type Wire: TryFrom<i32> + Into<i32>;

    /// Qualified field name used in error reports.
    const FIELD: &'static str;

    fn from_wire(wire: Self::Wire) -> Self;
    fn to_wire(self) -> Self::Wire;
}

pub(crate) fn decode_enum<E: WireEnum>(raw: Option<i32>) -> Result<E> {
    let Some(value) = raw else {
        return Ok(E::default());
    };
    let wire = E::Wire::try_from(value).map_err(|_| WireError::invalid_enum(E::FIELD, value))?;
    Ok(E::from_wire(wire))
}

pub(crate) fn encode_enum<E: WireEnum>(value: E) -> Option<i32> {
    Some(value.to_wire().into())
}

impl WireEnum for PredictorStatus {
    type Wire = schema::predictor::Status;
    const FIELD: &'static str = "Predictor.status";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::predictor::Status::Active => PredictorStatus::Active,
            schema::predictor::Status::Inactive => PredictorStatus::Inactive,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            PredictorStatus::Active => schema::predictor::Status::Active,
            PredictorStatus::Inactive => schema::predictor::Status::Inactive,
        }
    }
}

impl WireEnum for PredictorType {
    type Wire = schema::predictor::Type;
    const FIELD: &'static str = "Predictor.type";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::predictor::Type::Categorical => PredictorType::Categorical,
            schema::predictor::Type::Continuous => PredictorType::Continuous,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            PredictorType::Categorical => schema::predictor::Type::Categorical,
            PredictorType::Continuous => schema::predictor::Type::Continuous,
        }
    }
}

impl WireEnum for Level {
    type Wire = schema::predictor::Level;
    const FIELD: &'static str = "Predictor.level";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::predictor::Level::Nominal => Level::Nominal,
            schema::predictor::Level::Ordinal => Level::Ordinal,
            schema::predictor::Level::Interval => Level::Interval,
            schema::predictor::Level::Ratio => Level::Ratio,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            Level::Nominal => schema::predictor::Level::Nominal,
            Level::Ordinal => schema::predictor::Level::Ordinal,
            Level::Interval => schema::predictor::Level::Interval,
            Level::Ratio => schema::predictor::Level::Ratio,
        }
    }
}

impl WireEnum for SpecimenStatus {
    type Wire = schema::specimen::Status;
    const FIELD: &'static str = "Specimen.status";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::specimen::Status::Active => SpecimenStatus::Active,
            schema::specimen::Status::Inactive => SpecimenStatus::Inactive,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            SpecimenStatus::Active => schema::specimen::Status::Active,
            SpecimenStatus::Inactive => schema::specimen::Status::Inactive,
        }
    }
}

impl WireEnum for StudyType {
    type Wire = schema::study::Type;
    const FIELD: &'static str = "Study.type";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::study::Type::Class => StudyType::Class,
            schema::study::Type::Rank => StudyType::Rank,
            schema::study::Type::Number => StudyType::Number,
            schema::study::Type::Chance => StudyType::Chance,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            StudyType::Class => schema::study::Type::Class,
            StudyType::Rank => schema::study::Type::Rank,
            StudyType::Number => schema::study::Type::Number,
            StudyType::Chance => schema::study::Type::Chance,
        }
    }
}

impl WireEnum for StudyStatus {
    type Wire = schema::study::Status;
    const FIELD: &'static str = "Study.status";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::study::Status::Running => StudyStatus::Running,
            schema::study::Status::Standby => StudyStatus::Standby,
            schema::study::Status::Stopped => StudyStatus::Stopped,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            StudyStatus::Running => schema::study::Status::Running,
            StudyStatus::Standby => schema::study::Status::Standby,
            StudyStatus::Stopped => schema::study::Status::Stopped,
        }
    }
}

impl WireEnum for Visibility {
    type Wire = schema::study::Visibility;
    const FIELD: &'static str = "Study.visibility";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::study::Visibility::Private => Visibility::Private,
            schema::study::Visibility::Public => Visibility::Public,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            Visibility::Private => schema::study::Visibility::Private,
            Visibility::Public => schema::study::Visibility::Public,
        }
    }
}

impl WireEnum for MessageType {
    type Wire = schema::message::Type;
    const FIELD: &'static str = "Message.type";

    fn from_wire(wire: Self::Wire) -> Self {
        match wire {
            schema::message::Type::Information => MessageType::Information,
            schema::message::Type::Error => MessageType::Error,
        }
    }

    fn to_wire(self) -> Self::Wire {
        match self {
            MessageType::Information => schema::message::Type::Information,
            MessageType::Error => schema::message::Type::Error,
        }
    }
}
