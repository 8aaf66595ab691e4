//! Excel出力（CLI版）
//!
//! シート生成は geo_position_common::LocationWorkbook に任せ、
//! ここではファイルへの書き出しとエラー変換を行う

use crate::error::{GeoPositionError, Result};
use geo_position_common::LocationWorkbook;
use std::path::Path;

/// 出力シートを作成（ヘッダー行込み）
pub fn create_location_workbook(sheet_name: &str) -> Result<LocationWorkbook> {
    Ok(LocationWorkbook::new(sheet_name)?)
}

/// 出力パスへ保存（既存ファイルは上書き）
pub fn save_excel(workbook: &mut LocationWorkbook, output_path: &Path) -> Result<()> {
    let buffer = workbook.save_to_buffer()?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(GeoPositionError::ExcelGeneration(format!(
                "出力先フォルダがありません: {}",
                parent.display()
            )));
        }
    }

    std::fs::write(output_path, buffer).map_err(|e| {
        GeoPositionError::ExcelGeneration(format!("{} への保存失敗: {}", output_path.display(), e))
    })?;

    Ok(())
}
