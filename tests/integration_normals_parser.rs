//! Integration tests for the normals parser pipeline
//!
//! These tests drive the full pipeline (file read, line filter, record
//! assembly, schema export) against a realistically shaped hourly
//! temperature normals file written to a temporary directory.

use normals_processor::app::services::normals_parser::{
    LineFilter, NormalsParser, RecordFactory,
};
use normals_processor::config::ParserConfig;
use std::io::Write;

/// Build one normals file line for a station and date, with 24 tokens
fn normals_line(identifier: &str, month: u32, day: u32, base: i32) -> String {
    let tokens: Vec<String> = (0..24)
        .map(|hour| format!("{:>6}", format!("{}C", base + hour)))
        .collect();
    format!("{} {:02} {:02} {}", identifier, month, day, tokens.join(" "))
}

fn write_normals_file(lines: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write temp file");
    }
    file.flush().expect("Failed to flush temp file");
    file
}

#[test]
fn test_parse_file_end_to_end() {
    let lines = vec![
        normals_line("AQW00061705", 1, 1, 700),
        normals_line("CQC00914594", 1, 1, 650),
        normals_line("AQW00061705", 1, 2, 710),
        normals_line("USW00094846", 1, 1, 200),
    ];
    let file = write_normals_file(&lines);

    let parser = NormalsParser::new(
        LineFilter::new(["AQW00061705"]),
        RecordFactory::default(),
    );

    let result = parser.parse_file(file.path()).expect("Parse should succeed");

    assert_eq!(result.stats.total_lines, 4);
    assert_eq!(result.stats.lines_matched, 2);
    assert_eq!(result.stats.records_parsed, 2);

    let first = result.records[0].export().unwrap();
    assert_eq!(first.identifier, "AQW00061705");
    assert_eq!(first.month, 1);
    assert_eq!(first.day, 1);
    assert_eq!(first.name, "hly-temp-normal");
    assert_eq!(first.unit, "degrees_F");
    assert_eq!(first.measurements.len(), 24);
    assert_eq!(first.measurements[0].value, Some(70.0));

    // Order preserved: second retained line is the Jan 2 record
    let second = result.records[1].export().unwrap();
    assert_eq!(second.day, 2);
    assert_eq!(second.measurements[0].value, Some(71.0));
}

#[test]
fn test_parse_file_with_sentinels_and_json_export() {
    let mut tokens: Vec<String> = (0..24).map(|hour| format!("{}S", 400 + hour)).collect();
    tokens[3] = "-9999".to_string();
    tokens[7] = "-7777".to_string();
    let line = format!("USW00094846 02 29 {}", tokens.join("  "));
    let file = write_normals_file(&[line]);

    let parser = NormalsParser::new(
        LineFilter::new(["USW00094846"]),
        RecordFactory::default(),
    );

    let result = parser.parse_file(file.path()).expect("Parse should succeed");
    assert_eq!(result.records.len(), 1);

    let schema = result.records[0].export().unwrap();
    let json = serde_json::to_value(&schema).unwrap();

    assert_eq!(json["identifier"], "USW00094846");
    assert_eq!(json["month"], 2);
    assert_eq!(json["day"], 29);

    let measurements = json["measurements"].as_array().unwrap();
    assert_eq!(measurements.len(), 24);

    // Ordinary token: value, flag, and description all present
    assert_eq!(measurements[0]["value"], 40.0);
    assert_eq!(measurements[0]["flag"], "S");

    // Sentinel tokens: null or zero value, flag key omitted
    assert!(measurements[3]["value"].is_null());
    assert!(measurements[3].get("flag").is_none());
    assert_eq!(measurements[3]["desc"], "Missing");
    assert_eq!(measurements[7]["value"], 0.0);
    assert!(measurements[7].get("flag").is_none());
}

#[test]
fn test_parse_file_custom_dataset_config() {
    let line = normals_line("AQW00061705", 7, 4, 120);
    let file = write_normals_file(&[line]);

    let config = ParserConfig::new(
        "hly-wind-avgspd",
        "miles_per_hour",
        "ftp://ftp.ncdc.noaa.gov/pub/data/normals/1981-2010/",
        10,
    )
    .unwrap();
    let parser = NormalsParser::new(LineFilter::new(["AQW00061705"]), RecordFactory::new(config));

    let result = parser.parse_file(file.path()).expect("Parse should succeed");
    let schema = result.records[0].export().unwrap();

    assert_eq!(schema.name, "hly-wind-avgspd");
    assert_eq!(schema.unit, "miles_per_hour");
    assert_eq!(schema.month, 7);
    assert_eq!(schema.day, 4);
}

#[test]
fn test_parse_file_malformed_line_fails_whole_parse() {
    // 23 measurement tokens instead of 24
    let short_tokens: Vec<String> = (0..23).map(|hour| format!("{}C", 500 + hour)).collect();
    let line = format!("AQW00061705 03 15 {}", short_tokens.join(" "));
    let file = write_normals_file(&[line]);

    let parser = NormalsParser::new(
        LineFilter::new(["AQW00061705"]),
        RecordFactory::default(),
    );

    let err = parser.parse_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        normals_processor::Error::FieldCount {
            expected: 27,
            actual: 26
        }
    ));
}
