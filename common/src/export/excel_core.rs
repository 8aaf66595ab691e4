//! Excel生成（共通ライブラリ）
//!
//! layout.rs の定義を使用して位置情報シートを生成する。
//! シート作成時にヘッダーを書き込み、以降は append_row で1行ずつ追加する。

use crate::error::{Error, Result};
use crate::layout::HEADER_FIELDS;
use crate::types::OutputRow;
use rust_xlsxwriter::*;

/// 座標列の幅（文字数）
const COORD_COL_WIDTH: f64 = 14.0;
/// 地名列の幅（文字数）
const POSITION_COL_WIDTH: f64 = 48.0;

/// 位置情報ブック（1シートのみ）
pub struct LocationWorkbook {
    workbook: Workbook,
    header_format: Format,
    next_row: u32,
}

impl LocationWorkbook {
    /// シートを作成してヘッダー行を書き込む
    pub fn new(sheet_name: &str) -> Result<Self> {
        let mut workbook = Workbook::new();

        // 作成日時を固定して、同じ入力から同じバイト列を得る
        let created = ExcelDateTime::from_ymd(2000, 1, 1)
            .map_err(|e| Error::Excel(format!("作成日時設定エラー: {}", e)))?;
        let properties = DocProperties::new().set_creation_datetime(&created);
        workbook.set_properties(&properties);

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet_name)
            .map_err(|e| Error::Excel(format!("シート名設定エラー: {}", e)))?;

        for col in 0..4u16 {
            worksheet
                .set_column_width(col, COORD_COL_WIDTH)
                .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;
        }
        for col in 4..6u16 {
            worksheet
                .set_column_width(col, POSITION_COL_WIDTH)
                .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;
        }

        let mut book = Self {
            workbook,
            header_format: Format::new().set_bold(),
            next_row: 0,
        };
        book.write_header()?;
        Ok(book)
    }

    fn write_header(&mut self) -> Result<()> {
        let worksheet = self
            .workbook
            .worksheet_from_index(0)
            .map_err(|e| Error::Excel(format!("シート取得エラー: {}", e)))?;

        for (col, title) in HEADER_FIELDS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *title, &self.header_format)
                .map_err(|e| Error::Excel(format!("ヘッダー書き込みエラー: {}", e)))?;
        }

        self.next_row = 1;
        Ok(())
    }

    /// データ行を追加（すべて文字列セルとして書き込む）
    pub fn append_row(&mut self, row: &OutputRow) -> Result<()> {
        let row_idx = self.next_row;
        let worksheet = self
            .workbook
            .worksheet_from_index(0)
            .map_err(|e| Error::Excel(format!("シート取得エラー: {}", e)))?;

        for (col, value) in row.cells().iter().enumerate() {
            worksheet
                .write_string(row_idx, col as u16, *value)
                .map_err(|e| Error::Excel(format!("値書き込みエラー: {}", e)))?;
        }

        self.next_row += 1;
        Ok(())
    }

    /// 書き込み済みのデータ行数（ヘッダー除く）
    #[cfg(test)]
    fn data_rows(&self) -> usize {
        self.next_row.saturating_sub(1) as usize
    }

    /// バッファに書き出し
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>> {
        self.workbook
            .save_to_buffer()
            .map_err(|e| Error::Excel(format!("Excel保存エラー: {}", e)))
    }
}
