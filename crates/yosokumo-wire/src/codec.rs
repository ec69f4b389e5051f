//! Codec entry points.

use tracing::debug;
use yosokumo_model::{
    Block, Catalog, Cell, Message, Panel, Predictor, Role, Roster, Specimen, Study, StudyStatus,
    Visibility,
};

use crate::decode::FromWire;
use crate::encode::ToWire;
use crate::enums::{decode_enum, encode_enum};
use crate::error::{Result, WireError};
use crate::options::CodecOptions;
use crate::schema;

/// Converts entities to and from Protocol Buffers bytes.
///
/// The codec keeps no state between calls; every call returns its own
/// result.
#[derive(Debug, Clone, Default)]
pub struct ProtobufCodec {
    options: CodecOptions,
}

impl ProtobufCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Media type to attach to requests and expect on responses.
    pub fn content_type(&self) -> &str {
        &self.options.content_type
    }

    /// Decodes any entity with a wire record.
    pub fn decode<T: FromWire>(&self, bytes: &[u8]) -> Result<T> {
        self.decode_with(T::RECORD, bytes, T::from_wire)
    }

    /// Encodes any entity with a wire record.
    pub fn encode<T: ToWire + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let wire = value.to_wire().inspect_err(|err| {
            debug!(record = T::RECORD, error = %err, "encode rejected");
        })?;
        Ok(self.serialize(T::RECORD, &wire))
    }

    fn decode_with<M, T, F>(&self, record: &'static str, bytes: &[u8], map: F) -> Result<T>
    where
        M: prost::Message + Default,
        F: FnOnce(M) -> Result<T>,
    {
        let wire = self.parse::<M>(record, bytes)?;
        match map(wire) {
            Ok(value) => {
                debug!(record, bytes = bytes.len(), "decoded");
                Ok(value)
            }
            Err(err) => {
                debug!(record, error = %err, "decode rejected");
                Err(err)
            }
        }
    }

    fn parse<M: prost::Message + Default>(&self, record: &'static str, bytes: &[u8]) -> Result<M> {
        if bytes.is_empty() {
            debug!(record, "decode rejected: empty input");
            return Err(WireError::EmptyInput);
        }
        if let Some(limit) = self.options.max_input_len
            && bytes.len() > limit
        {
            debug!(record, len = bytes.len(), limit, "decode rejected: input too large");
            return Err(WireError::InputTooLarge {
                len: bytes.len(),
                limit,
            });
        }
        M::decode(bytes).map_err(|source| {
            debug!(record, error = %source, "decode rejected: malformed record");
            WireError::parse_failure(record, source)
        })
    }

    fn serialize<M: prost::Message>(&self, record: &'static str, wire: &M) -> Vec<u8> {
        let bytes = wire.encode_to_vec();
        debug!(record, bytes = bytes.len(), "encoded");
        bytes
    }

    pub fn decode_cell(&self, bytes: &[u8]) -> Result<Cell> {
        self.decode(bytes)
    }

    pub fn encode_cell(&self, cell: &Cell) -> Result<Vec<u8>> {
        self.encode(cell)
    }

    pub fn decode_predictor(&self, bytes: &[u8]) -> Result<Predictor> {
        self.decode(bytes)
    }

    pub fn encode_predictor(&self, predictor: &Predictor) -> Result<Vec<u8>> {
        self.encode(predictor)
    }

    pub fn decode_specimen(&self, bytes: &[u8]) -> Result<Specimen> {
        self.decode(bytes)
    }

    /// Fails with `UnsupportedValueKind` for a special predictand.
    pub fn encode_specimen(&self, specimen: &Specimen) -> Result<Vec<u8>> {
        self.encode(specimen)
    }

    /// Decodes a block. A specimen payload comes back as a cell block of
    /// `(key, predictand)` pairs.
    pub fn decode_block(&self, bytes: &[u8]) -> Result<Block<'static>> {
        self.decode(bytes)
    }

    pub fn encode_block(&self, block: &Block<'_>) -> Result<Vec<u8>> {
        self.encode(block)
    }

    /// Decodes a message, trimming its text. Whitespace-only text yields
    /// `EmptyMessage`.
    pub fn decode_message(&self, bytes: &[u8]) -> Result<Message> {
        self.decode(bytes)
    }

    pub fn encode_message(&self, message: &Message) -> Result<Vec<u8>> {
        self.encode(message)
    }

    pub fn decode_study(&self, bytes: &[u8]) -> Result<Study> {
        self.decode(bytes)
    }

    pub fn encode_study(&self, study: &Study) -> Result<Vec<u8>> {
        self.encode(study)
    }

    pub fn decode_panel(&self, bytes: &[u8]) -> Result<Panel> {
        self.decode(bytes)
    }

    pub fn encode_panel(&self, panel: &Panel) -> Result<Vec<u8>> {
        self.encode(panel)
    }

    pub fn decode_role(&self, bytes: &[u8]) -> Result<Role> {
        self.decode(bytes)
    }

    pub fn encode_role(&self, role: &Role) -> Result<Vec<u8>> {
        self.encode(role)
    }

    /// Fails with `DuplicateKey` if two roles share a roleholder.
    pub fn decode_roster(&self, bytes: &[u8]) -> Result<Roster> {
        self.decode(bytes)
    }

    pub fn encode_roster(&self, roster: &Roster) -> Result<Vec<u8>> {
        self.encode(roster)
    }

    /// Fails with `DuplicateKey` if two studies share an identifier.
    pub fn decode_catalog(&self, bytes: &[u8]) -> Result<Catalog> {
        self.decode(bytes)
    }

    pub fn encode_catalog(&self, catalog: &Catalog) -> Result<Vec<u8>> {
        self.encode(catalog)
    }

    pub fn decode_study_name(&self, bytes: &[u8]) -> Result<String> {
        self.decode_with("StudyNameControl", bytes, |wire: schema::panel::StudyNameControl| {
            Ok(wire.study_name.unwrap_or_default())
        })
    }

    pub fn encode_study_name(&self, name: &str) -> Result<Vec<u8>> {
        let wire = schema::panel::StudyNameControl {
            location: None,
            study_name: Some(name.to_string()),
        };
        Ok(self.serialize("StudyNameControl", &wire))
    }

    pub fn decode_study_status(&self, bytes: &[u8]) -> Result<StudyStatus> {
        self.decode_with("StatusControl", bytes, |wire: schema::panel::StatusControl| {
            decode_enum(wire.status)
        })
    }

    pub fn encode_study_status(&self, status: StudyStatus) -> Result<Vec<u8>> {
        let wire = schema::panel::StatusControl {
            location: None,
            status: encode_enum(status),
        };
        Ok(self.serialize("StatusControl", &wire))
    }

    pub fn decode_study_visibility(&self, bytes: &[u8]) -> Result<Visibility> {
        self.decode_with(
            "VisibilityControl",
            bytes,
            |wire: schema::panel::VisibilityControl| decode_enum(wire.visibility),
        )
    }

    pub fn encode_study_visibility(&self, visibility: Visibility) -> Result<Vec<u8>> {
        let wire = schema::panel::VisibilityControl {
            location: None,
            visibility: encode_enum(visibility),
        };
        Ok(self.serialize("VisibilityControl", &wire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message as _;
    use yosokumo_model::{Level, PredictorStatus, PredictorType};

    #[test]
    fn content_type_comes_from_options() {
        assert_eq!(
            ProtobufCodec::new().content_type(),
            "application/yosokumo+protobuf"
        );
        let codec =
            ProtobufCodec::with_options(CodecOptions::new().with_content_type("application/x-y"));
        assert_eq!(codec.content_type(), "application/x-y");
    }

    #[test]
    fn empty_input_rejected_everywhere() {
        let codec = ProtobufCodec::new();
        assert!(matches!(codec.decode_cell(&[]), Err(WireError::EmptyInput)));
        assert!(matches!(codec.decode_block(&[]), Err(WireError::EmptyInput)));
        assert!(matches!(codec.decode_catalog(&[]), Err(WireError::EmptyInput)));
        assert!(matches!(codec.decode_study_name(&[]), Err(WireError::EmptyInput)));
        assert!(matches!(
            codec.decode_study_visibility(&[]),
            Err(WireError::EmptyInput)
        ));
    }

    #[test]
    fn malformed_bytes_are_parse_failures() {
        let codec = ProtobufCodec::new();
        // Field 101, length-delimited, claims 16 bytes but has none.
        let bytes = [0xAA, 0x06, 0x10];
        assert!(matches!(
            codec.decode_study(&bytes),
            Err(WireError::ParseFailure { record: "Study", .. })
        ));
    }

    #[test]
    fn input_limit() {
        let codec = ProtobufCodec::with_options(CodecOptions::new().with_max_input_len(4));
        let predictor = Predictor::with_attributes(
            11111,
            PredictorStatus::Active,
            PredictorType::Categorical,
            Level::Interval,
        )
        .expect("valid predictor");
        let bytes = codec.encode_predictor(&predictor).expect("encode predictor");
        assert!(bytes.len() > 4);
        assert!(matches!(
            codec.decode_predictor(&bytes),
            Err(WireError::InputTooLarge { limit: 4, .. })
        ));
    }

    #[test]
    fn study_controls_round_trip() {
        let codec = ProtobufCodec::new();
        let bytes = codec.encode_study_name("Churn 2012").expect("encode name");
        assert_eq!(codec.decode_study_name(&bytes).ok().as_deref(), Some("Churn 2012"));

        let bytes = codec.encode_study_status(StudyStatus::Standby).expect("encode status");
        assert_eq!(codec.decode_study_status(&bytes).ok(), Some(StudyStatus::Standby));

        let bytes = codec
            .encode_study_visibility(Visibility::Public)
            .expect("encode visibility");
        assert_eq!(codec.decode_study_visibility(&bytes).ok(), Some(Visibility::Public));
    }

    #[test]
    fn study_status_control_validates_enum() {
        let codec = ProtobufCodec::new();
        let wire = schema::panel::StatusControl {
            location: None,
            status: Some(9),
        };
        assert!(matches!(
            codec.decode_study_status(&wire.encode_to_vec()),
            Err(WireError::InvalidEnumValue { field: "Study.status", value: 9 })
        ));
    }

    #[test]
    fn valueless_cell_bytes_are_missing_value() {
        let wire = schema::Cell {
            key: Some(7),
            ..Default::default()
        };
        let codec = ProtobufCodec::new();
        assert!(matches!(
            codec.decode_cell(&wire.encode_to_vec()),
            Err(WireError::MissingValue { record: "Cell" })
        ));
    }

    #[test]
    fn catalog_rejects_duplicate_studies() {
        let study = |id: &str| schema::Study {
            study_identifier: Some(id.to_string()),
            ..Default::default()
        };
        let wire = schema::Catalog {
            user_identifier: Some("U1".to_string()),
            study: vec![study("S1"), study("S2"), study("S1")],
            ..Default::default()
        };
        let codec = ProtobufCodec::new();
        assert!(matches!(
            codec.decode_catalog(&wire.encode_to_vec()),
            Err(WireError::DuplicateKey { key }) if key == "S1"
        ));
    }
}
