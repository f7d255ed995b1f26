//! Tests for record assembly and field-count validation

use super::sample_line;
use crate::Error;
use crate::app::services::normals_parser::line_filter::tokenize;
use crate::app::services::normals_parser::record_factory::RecordFactory;
use crate::config::ParserConfig;

fn tokens(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}C", i)).collect()
}

#[test]
fn test_create_rejects_empty_line() {
    let err = RecordFactory::default().create(&[]).unwrap_err();
    match err {
        Error::FieldCount { expected, actual } => {
            assert_eq!(expected, 27);
            assert_eq!(actual, 0);
        }
        other => panic!("expected FieldCount error, got {:?}", other),
    }
}

#[test]
fn test_create_rejects_wrong_field_count() {
    let factory = RecordFactory::default();
    assert!(factory.create(&tokens(26)).is_err());
    assert!(factory.create(&tokens(28)).is_err());
}

#[test]
fn test_create_from_real_line() {
    let fields = tokenize(&sample_line());
    assert_eq!(fields.len(), 27);

    let record = RecordFactory::default().create(&fields).unwrap();
    let schema = record.export().unwrap();

    assert_eq!(schema.identifier, "AQW00061705");
    assert_eq!(schema.month, 1);
    assert_eq!(schema.day, 1);
    assert_eq!(schema.name, "hly-temp-normal");
    assert_eq!(
        schema.source,
        "ftp://ftp.ncdc.noaa.gov/pub/data/normals/1981-2010/"
    );
    assert_eq!(schema.measurements.len(), 24);
    // Hour order is preserved: first token 700C, last 723C
    assert_eq!(schema.measurements[0].value, Some(70.0));
    assert_eq!(schema.measurements[23].value, Some(72.3));
}

#[test]
fn test_assemble_requires_24_tokens() {
    let factory = RecordFactory::default();
    for count in [23, 25] {
        let err = factory
            .assemble("AQW00061705", "01", "01", &tokens(count))
            .unwrap_err();
        match err {
            Error::MeasureCount { expected, actual } => {
                assert_eq!(expected, 24);
                assert_eq!(actual, count);
            }
            other => panic!("expected MeasureCount error, got {:?}", other),
        }
    }
}

#[test]
fn test_factory_applies_scaling_factor_config() {
    let config = ParserConfig::new("hly-dewp-normal", "degrees_F", "local", 100).unwrap();
    let factory = RecordFactory::new(config);

    let record = factory
        .assemble("AQW00061705", "06", "30", &vec!["500C".to_string(); 24])
        .unwrap();
    let schema = record.export().unwrap();

    assert_eq!(schema.name, "hly-dewp-normal");
    assert_eq!(schema.month, 6);
    assert_eq!(schema.day, 30);
    assert_eq!(schema.measurements[0].value, Some(5.0));
}

#[test]
fn test_decode_errors_surface_at_export() {
    let mut fields = tokenize(&sample_line());
    fields[10] = "720Z".to_string();

    // Field counts are fine, so assembly succeeds; the bad flag is caught
    // when the record is exported
    let record = RecordFactory::default().create(&fields).unwrap();
    assert!(matches!(
        record.export().unwrap_err(),
        Error::UnknownFlag { flag: 'Z', .. }
    ));
}
