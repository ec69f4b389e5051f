//! Wire schema.
//!
//! Hand-declared `prost` messages mirroring the service's published
//! `yosokumo.proto`. Every scalar is an explicitly present optional field,
//! field numbers start at 101 and every enum starts at 1.
//!
//! Nested types live in a lowercase module named after their parent
//! message, as generated protobuf code lays them out.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(enumeration = "message::Type", optional, tag = "101")]
    pub r#type: Option<i32>,
    #[prost(string, optional, tag = "102")]
    pub text: Option<String>,
}

pub mod message {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Information = 1,
        Error = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Predictor {
    #[prost(uint64, optional, tag = "101")]
    pub name: Option<u64>,
    #[prost(enumeration = "predictor::Status", optional, tag = "102")]
    pub status: Option<i32>,
    #[prost(enumeration = "predictor::Type", optional, tag = "103")]
    pub r#type: Option<i32>,
    #[prost(enumeration = "predictor::Level", optional, tag = "104")]
    pub level: Option<i32>,
}

pub mod predictor {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        Active = 1,
        Inactive = 2,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Categorical = 1,
        Continuous = 2,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Level {
        Nominal = 1,
        Ordinal = 2,
        Interval = 3,
        Ratio = 4,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cell {
    #[prost(uint64, optional, tag = "101")]
    pub key: Option<u64>,
    #[prost(uint64, optional, tag = "102")]
    pub name: Option<u64>,
    #[prost(bool, optional, tag = "103")]
    pub empty: Option<bool>,
    #[prost(uint64, optional, tag = "104")]
    pub natural: Option<u64>,
    #[prost(int64, optional, tag = "105")]
    pub integer: Option<i64>,
    #[prost(double, optional, tag = "106")]
    pub real: Option<f64>,
    #[prost(uint64, optional, tag = "107")]
    pub special: Option<u64>,
}

/// A specimen. The predictand has no `special` slot.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Specimen {
    #[prost(uint64, optional, tag = "101")]
    pub key: Option<u64>,
    #[prost(enumeration = "specimen::Status", optional, tag = "102")]
    pub status: Option<i32>,
    #[prost(uint64, optional, tag = "103")]
    pub weight: Option<u64>,
    #[prost(bool, optional, tag = "104")]
    pub empty: Option<bool>,
    #[prost(uint64, optional, tag = "105")]
    pub natural: Option<u64>,
    #[prost(int64, optional, tag = "106")]
    pub integer: Option<i64>,
    #[prost(double, optional, tag = "107")]
    pub real: Option<f64>,
    #[prost(message, repeated, tag = "108")]
    pub cell: Vec<Cell>,
}

pub mod specimen {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        Active = 1,
        Inactive = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
    #[prost(string, optional, tag = "101")]
    pub study_identifier: Option<String>,
    #[prost(bool, optional, tag = "102")]
    pub empty: Option<bool>,
    #[prost(message, repeated, tag = "103")]
    pub predictor: Vec<Predictor>,
    #[prost(message, repeated, tag = "104")]
    pub specimen: Vec<Specimen>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Study {
    #[prost(string, optional, tag = "101")]
    pub study_identifier: Option<String>,
    #[prost(string, optional, tag = "102")]
    pub study_name: Option<String>,
    #[prost(string, optional, tag = "103")]
    pub location: Option<String>,
    #[prost(enumeration = "study::Type", optional, tag = "104")]
    pub r#type: Option<i32>,
    #[prost(enumeration = "study::Status", optional, tag = "105")]
    pub status: Option<i32>,
    #[prost(enumeration = "study::Visibility", optional, tag = "106")]
    pub visibility: Option<i32>,
    #[prost(message, optional, tag = "107")]
    pub owner: Option<study::Owner>,
    #[prost(message, optional, tag = "108")]
    pub table: Option<study::Resource>,
    #[prost(message, optional, tag = "109")]
    pub model: Option<study::Resource>,
    #[prost(message, optional, tag = "110")]
    pub panel: Option<study::Resource>,
    #[prost(message, optional, tag = "111")]
    pub roster: Option<study::Resource>,
    #[prost(message, optional, tag = "112")]
    pub panel_report: Option<Panel>,
}

pub mod study {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Owner {
        #[prost(string, optional, tag = "101")]
        pub user_identifier: Option<String>,
        #[prost(string, optional, tag = "102")]
        pub user_name: Option<String>,
    }

    /// Location of a study sub-resource (table, model, panel or roster).
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Resource {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Class = 1,
        Rank = 2,
        Number = 3,
        Chance = 4,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        Running = 1,
        Standby = 2,
        Stopped = 3,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Visibility {
        Private = 1,
        Public = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Panel {
    #[prost(string, optional, tag = "101")]
    pub study_identifier: Option<String>,
    #[prost(message, optional, tag = "102")]
    pub study_name_control: Option<panel::StudyNameControl>,
    #[prost(message, optional, tag = "103")]
    pub status_control: Option<panel::StatusControl>,
    #[prost(message, optional, tag = "104")]
    pub visibility_control: Option<panel::VisibilityControl>,
    #[prost(message, optional, tag = "105")]
    pub block_count_control: Option<panel::BlockCountControl>,
    #[prost(message, optional, tag = "106")]
    pub cell_count_control: Option<panel::CellCountControl>,
    #[prost(message, optional, tag = "107")]
    pub prospect_count_control: Option<panel::ProspectCountControl>,
    #[prost(message, optional, tag = "108")]
    pub creation_time_control: Option<panel::CreationTimeControl>,
    #[prost(message, optional, tag = "109")]
    pub latest_block_time_control: Option<panel::LatestBlockTimeControl>,
    #[prost(message, optional, tag = "110")]
    pub latest_prospect_time_control: Option<panel::LatestProspectTimeControl>,
}

pub mod panel {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct StudyNameControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(string, optional, tag = "102")]
        pub study_name: Option<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct StatusControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(enumeration = "super::study::Status", optional, tag = "102")]
        pub status: Option<i32>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VisibilityControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(enumeration = "super::study::Visibility", optional, tag = "102")]
        pub visibility: Option<i32>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct BlockCountControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(uint64, optional, tag = "102")]
        pub block_count: Option<u64>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CellCountControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(uint64, optional, tag = "102")]
        pub cell_count: Option<u64>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ProspectCountControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(uint64, optional, tag = "102")]
        pub prospect_count: Option<u64>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CreationTimeControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(string, optional, tag = "102")]
        pub creation_time: Option<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct LatestBlockTimeControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(string, optional, tag = "102")]
        pub latest_block_time: Option<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct LatestProspectTimeControl {
        #[prost(string, optional, tag = "101")]
        pub location: Option<String>,
        #[prost(string, optional, tag = "102")]
        pub latest_prospect_time: Option<String>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Role {
    #[prost(string, optional, tag = "101")]
    pub location: Option<String>,
    #[prost(message, optional, tag = "102")]
    pub roleholder: Option<role::Roleholder>,
    #[prost(message, optional, tag = "103")]
    pub study: Option<role::Study>,
    #[prost(message, optional, tag = "104")]
    pub privileges: Option<role::Privileges>,
}

pub mod role {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Roleholder {
        #[prost(string, optional, tag = "101")]
        pub user_identifier: Option<String>,
        #[prost(string, optional, tag = "102")]
        pub user_name: Option<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Study {
        #[prost(string, optional, tag = "101")]
        pub study_identifier: Option<String>,
        #[prost(string, optional, tag = "102")]
        pub study_name: Option<String>,
    }

    /// One flag per privilege, in privilege-number order.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Privileges {
        #[prost(bool, optional, tag = "101")]
        pub get_study: Option<bool>,
        #[prost(bool, optional, tag = "102")]
        pub delete_study: Option<bool>,
        #[prost(bool, optional, tag = "103")]
        pub get_roster: Option<bool>,
        #[prost(bool, optional, tag = "104")]
        pub post_roster: Option<bool>,
        #[prost(bool, optional, tag = "105")]
        pub get_role: Option<bool>,
        #[prost(bool, optional, tag = "106")]
        pub put_role: Option<bool>,
        #[prost(bool, optional, tag = "107")]
        pub delete_role: Option<bool>,
        #[prost(bool, optional, tag = "108")]
        pub get_panel: Option<bool>,
        #[prost(bool, optional, tag = "109")]
        pub get_control: Option<bool>,
        #[prost(bool, optional, tag = "110")]
        pub put_control: Option<bool>,
        #[prost(bool, optional, tag = "111")]
        pub post_table: Option<bool>,
        #[prost(bool, optional, tag = "112")]
        pub get_model: Option<bool>,
        #[prost(bool, optional, tag = "113")]
        pub post_model: Option<bool>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Roster {
    #[prost(string, optional, tag = "101")]
    pub study_identifier: Option<String>,
    #[prost(string, optional, tag = "102")]
    pub study_name: Option<String>,
    #[prost(string, optional, tag = "103")]
    pub location: Option<String>,
    #[prost(message, repeated, tag = "104")]
    pub role: Vec<Role>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Catalog {
    #[prost(string, optional, tag = "101")]
    pub user_identifier: Option<String>,
    #[prost(string, optional, tag = "102")]
    pub user_name: Option<String>,
    #[prost(string, optional, tag = "103")]
    pub location: Option<String>,
    #[prost(message, repeated, tag = "104")]
    pub study: Vec<Study>,
}
