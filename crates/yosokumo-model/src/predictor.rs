//! Column descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Whether a predictor takes part in model building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PredictorStatus {
    #[default]
    Active,
    Inactive,
}

impl PredictorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictorStatus::Active => "Active",
            PredictorStatus::Inactive => "Inactive",
        }
    }
}

/// Measurement type of a predictor's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PredictorType {
    Categorical,
    #[default]
    Continuous,
}

impl PredictorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictorType::Categorical => "Categorical",
            PredictorType::Continuous => "Continuous",
        }
    }
}

/// Level of measurement (Stevens' scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    /// Unordered categories.
    Nominal,
    /// Ordered categories without meaningful distance.
    Ordinal,
    /// Meaningful distance, arbitrary zero.
    Interval,
    /// Meaningful distance and a true zero.
    #[default]
    Ratio,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Nominal => "Nominal",
            Level::Ordinal => "Ordinal",
            Level::Interval => "Interval",
            Level::Ratio => "Ratio",
        }
    }
}

macro_rules! label_traits {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($variant)) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(format!("unknown {}: {s}", stringify!($ty)))
            }
        }
    };
}

label_traits!(PredictorStatus { Active, Inactive });
label_traits!(PredictorType { Categorical, Continuous });
label_traits!(Level { Nominal, Ordinal, Interval, Ratio });

/// Metadata for one column of a study's table.
///
/// The name is the predictor's identifier within its study and is always
/// positive; it is chosen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PredictorRecord", into = "PredictorRecord")]
pub struct Predictor {
    name: u64,
    pub status: PredictorStatus,
    pub predictor_type: PredictorType,
    pub level: Level,
}

impl Default for Predictor {
    fn default() -> Self {
        Self {
            name: 1,
            status: PredictorStatus::default(),
            predictor_type: PredictorType::default(),
            level: Level::default(),
        }
    }
}

impl Predictor {
    /// Predictor with the given name and default metadata
    /// (Active, Continuous, Ratio).
    pub fn new(name: u64) -> Result<Self> {
        Self::with_attributes(
            name,
            PredictorStatus::default(),
            PredictorType::default(),
            Level::default(),
        )
    }

    pub fn with_attributes(
        name: u64,
        status: PredictorStatus,
        predictor_type: PredictorType,
        level: Level,
    ) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name,
            status,
            predictor_type,
            level,
        })
    }

    pub fn name(&self) -> u64 {
        self.name
    }

    pub fn set_name(&mut self, name: u64) -> Result<()> {
        validate_name(name)?;
        self.name = name;
        Ok(())
    }
}

fn validate_name(name: u64) -> Result<()> {
    if name == 0 {
        return Err(ModelError::InvalidPredictorName(name));
    }
    Ok(())
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Predictor:")?;
        writeln!(f, "  name={}", self.name)?;
        writeln!(f, "  status={}", self.status)?;
        writeln!(f, "  type={}", self.predictor_type)?;
        writeln!(f, "  level={}", self.level)
    }
}

#[derive(Serialize, Deserialize)]
struct PredictorRecord {
    name: u64,
    status: PredictorStatus,
    #[serde(rename = "type")]
    predictor_type: PredictorType,
    level: Level,
}

impl TryFrom<PredictorRecord> for Predictor {
    type Error = ModelError;

    fn try_from(record: PredictorRecord) -> Result<Self> {
        Predictor::with_attributes(
            record.name,
            record.status,
            record.predictor_type,
            record.level,
        )
    }
}

impl From<Predictor> for PredictorRecord {
    fn from(predictor: Predictor) -> Self {
        Self {
            name: predictor.name,
            status: predictor.status,
            predictor_type: predictor.predictor_type,
            level: predictor.level,
        }
    }
}
