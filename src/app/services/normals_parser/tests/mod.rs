//! Tests for the normals parser service
//!
//! Organized by component, mirroring the module layout.

pub mod record_factory_tests;

/// A real-shaped hourly temperature normals line: identifier, month, day,
/// and 24 measurement tokens
pub fn sample_line() -> String {
    let tokens: Vec<String> = (0..24).map(|hour| format!("{}C", 700 + hour)).collect();
    format!("AQW00061705 01 01   {}", tokens.join("   "))
}
