//! Geo Position Common Library
//!
//! 逆ジオコーディング結果の型・パーサー・出力レイアウトを提供する

pub mod types;
pub mod layout;
pub mod error;
pub mod parser;
pub mod export;

pub use types::{CoordinatePair, GeocodeEnvelope, GeocodeOutcome, OutputRow, PlaceDetail};
pub use layout::{ColumnMapping, HEADER_FIELDS, LEGEND_SHEET_NAME, OUTPUT_SHEET_NAME};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_geocode_response};

#[cfg(feature = "excel")]
pub use export::excel_core::LocationWorkbook;
