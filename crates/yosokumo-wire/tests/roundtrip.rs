//! Encode/decode round trips through the public codec.

use yosokumo_model::{
    Block, BlockKind, Catalog, Cell, CellBlock, EmptyBlock, Level, Message, MessageType, Panel,
    Predictor, PredictorBlock, PredictorStatus, PredictorType, Privilege, Role, Roster,
    ScalarValue, Specimen, SpecimenBlock, SpecimenStatus, Study, StudyStatus, StudyType,
    Visibility,
};
use yosokumo_wire::{FromWire, ProtobufCodec, ToWire, WireError};

/// Encode then decode with a default codec.
fn roundtrip<T: ToWire + FromWire>(value: &T) -> T {
    let codec = ProtobufCodec::new();
    let bytes = codec.encode(value).unwrap();
    assert!(!bytes.is_empty());
    codec.decode(&bytes).unwrap()
}

fn sample_panel() -> Panel {
    Panel {
        name_control_location: "https://yosokumo.net/panel/S1/name".to_string(),
        status_control_location: "https://yosokumo.net/panel/S1/status".to_string(),
        visibility_control_location: "https://yosokumo.net/panel/S1/visibility".to_string(),
        block_count: 14,
        cell_count: 90210,
        prospect_count: 3,
        creation_time: "2012-06-01T10:00:00Z".to_string(),
        latest_block_time: "2012-06-04T11:30:00Z".to_string(),
        latest_prospect_time: "2012-06-05T09:15:00Z".to_string(),
    }
}

fn sample_study(id: &str) -> Study {
    let mut study = Study::new("Churn", StudyType::Chance, StudyStatus::Standby, Visibility::Public);
    study.study_identifier = id.to_string();
    study.study_location = format!("https://yosokumo.net/study/{id}");
    study.owner_identifier = "U1".to_string();
    study.owner_name = "Ada".to_string();
    study.table_location = format!("https://yosokumo.net/table/{id}");
    study.model_location = format!("https://yosokumo.net/model/{id}");
    study.panel_location = format!("https://yosokumo.net/panel/{id}");
    study.roster_location = format!("https://yosokumo.net/roster/{id}");
    study.apply_panel(&sample_panel());
    study
}

fn sample_role(user: &str) -> Role {
    let mut role = Role::new(user, "S1");
    role.user_name = format!("name of {user}");
    role.study_name = "Churn".to_string();
    role.location = format!("https://yosokumo.net/roster/S1/role/{user}");
    role.grant(Privilege::GetStudy);
    role.grant(Privilege::GetPanel);
    role.grant(Privilege::PostModel);
    role
}

#[test]
fn test_predictor_roundtrip() {
    let predictor = Predictor::with_attributes(
        11111,
        PredictorStatus::Active,
        PredictorType::Categorical,
        Level::Interval,
    )
    .unwrap();
    let back = roundtrip(&predictor);
    assert_eq!(back, predictor);
    assert_eq!(back.name(), 11111);

    let text = back.to_string();
    assert!(text.contains("name=11111"));
    assert!(text.contains("status=Active"));
    assert!(text.contains("type=Categorical"));
    assert!(text.contains("level=Interval"));
}

#[test]
fn test_cell_roundtrip_every_kind() {
    for value in [
        ScalarValue::Empty,
        ScalarValue::Natural(u64::MAX),
        ScalarValue::Integer(i64::MIN),
        ScalarValue::Real(-0.125),
        ScalarValue::Special(3),
    ] {
        let cell = Cell::new(77, value);
        assert_eq!(roundtrip(&cell), cell);
    }
}

#[test]
fn test_specimen_roundtrip() {
    let mut specimen = Specimen::new(42)
        .with_status(SpecimenStatus::Inactive)
        .with_predictand(ScalarValue::Real(3.5))
        .with_weight(12)
        .unwrap();
    specimen.add_cells([
        Cell::new(1, ScalarValue::Natural(10)),
        Cell::new(2, ScalarValue::Special(99)),
        Cell::new(3, ScalarValue::Empty),
    ]);
    assert_eq!(roundtrip(&specimen), specimen);
}

#[test]
fn test_empty_and_predictor_blocks_roundtrip() {
    let empty = Block::from(EmptyBlock::new("S1"));
    assert_eq!(roundtrip(&empty), empty);

    let predictors = Block::from(PredictorBlock::with_predictors(
        "S1",
        (1..=3).map(|n| Predictor::new(n).unwrap()),
    ));
    assert_eq!(roundtrip(&predictors), predictors);
}

#[test]
fn test_cell_block_roundtrip() {
    let block = Block::from(CellBlock::with_cells(
        "S1",
        [
            Cell::new(1, ScalarValue::Integer(-4)),
            Cell::new(2, ScalarValue::Empty),
            Cell::new(3, ScalarValue::Natural(8)),
        ],
    ));
    assert_eq!(roundtrip(&block), block);
}

#[test]
fn test_specimen_block_decodes_as_cells() {
    let mut specimen = Specimen::new(42)
        .with_predictand(ScalarValue::Integer(7))
        .with_weight(5)
        .unwrap()
        .with_status(SpecimenStatus::Inactive);
    specimen.add_cell(Cell::new(1, ScalarValue::Real(0.5)));
    specimen.add_cell(Cell::new(2, ScalarValue::Natural(2)));
    let other = Specimen::new(43);

    let codec = ProtobufCodec::new();
    let block = Block::from(SpecimenBlock::with_specimens("S1", [&specimen, &other]));
    let bytes = codec.encode_block(&block).unwrap();
    let decoded = codec.decode_block(&bytes).unwrap();

    assert_eq!(decoded.kind(), BlockKind::Cell);
    assert_eq!(decoded.study_identifier(), "S1");
    let Block::Cells(cells) = decoded else {
        panic!("expected a cell block");
    };
    assert_eq!(
        cells.cells(),
        &[
            Cell::new(42, ScalarValue::Integer(7)),
            Cell::new(43, ScalarValue::Empty),
        ]
    );
}

#[test]
fn test_empty_predictor_block_decodes_as_empty_cell_block() {
    let codec = ProtobufCodec::new();
    let bytes = codec
        .encode_block(&Block::from(PredictorBlock::new("S1")))
        .unwrap();
    let decoded = codec.decode_block(&bytes).unwrap();
    assert_eq!(decoded, Block::from(CellBlock::new("S1")));
}

#[test]
fn test_message_roundtrip() {
    let message = Message::new(MessageType::Error, "study S1 not found");
    assert_eq!(roundtrip(&message), message);
}

#[test]
fn test_whitespace_message_is_empty() {
    let codec = ProtobufCodec::new();
    let bytes = codec.encode_message(&Message::information("   ")).unwrap();
    let err = codec.decode_message(&bytes).unwrap_err();
    assert!(matches!(err, WireError::EmptyMessage));
    assert!(err.is_empty_message());
}

#[test]
fn test_study_and_panel_roundtrip() {
    let study = sample_study("S1");
    let back = roundtrip(&study);
    assert_eq!(back, study);
    assert_eq!(back.study_type(), StudyType::Chance);
    assert_eq!(back.panel().cell_count, 90210);

    let panel = sample_panel();
    assert_eq!(roundtrip(&panel), panel);
}

#[test]
fn test_role_roster_catalog_roundtrip() {
    let role = sample_role("U1");
    assert_eq!(roundtrip(&role), role);

    let mut roster = Roster::new("S1", "Churn");
    roster.roster_location = "https://yosokumo.net/roster/S1".to_string();
    for user in ["U3", "U1", "U2"] {
        roster.add_role(sample_role(user));
    }
    let back = roundtrip(&roster);
    assert_eq!(back, roster);
    let keys: Vec<&String> = back.roles.keys().collect();
    assert_eq!(keys, ["U1", "U2", "U3"]);

    let mut catalog = Catalog::new("U1", "Ada");
    catalog.catalog_location = "https://yosokumo.net/catalog/U1".to_string();
    catalog.add_study(sample_study("S2"));
    catalog.add_study(sample_study("S1"));
    assert_eq!(roundtrip(&catalog), catalog);
}

#[test]
fn test_specimen_with_special_predictand_is_rejected() {
    let codec = ProtobufCodec::new();
    let specimen = Specimen::new(1).with_predictand(ScalarValue::Special(2));
    assert!(matches!(
        codec.encode_specimen(&specimen),
        Err(WireError::UnsupportedValueKind { .. })
    ));

    let block = Block::from(SpecimenBlock::with_specimens("S1", [&specimen]));
    assert!(matches!(
        codec.encode_block(&block),
        Err(WireError::UnsupportedValueKind { .. })
    ));
}
