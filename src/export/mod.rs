pub mod excel;

pub use excel::{create_location_workbook, save_excel};
