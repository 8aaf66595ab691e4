//! 入力ブック読み込みモジュール
//!
//! 凡例シート（字段）以外の全シートを先頭から順に走査し、
//! ヘッダー行を除いた各行の座標セルを文字列のまま返す。

use crate::error::{GeoPositionError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use geo_position_common::{ColumnMapping, CoordinatePair};
use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 入力シートの1行分
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub sheet: String,
    /// シート上の行番号（0始まり、0はヘッダー）
    pub row_index: u32,
    pub start: CoordinatePair,
    pub end: CoordinatePair,
}

impl SheetRow {
    pub fn is_blank(&self) -> bool {
        self.start.is_blank() && self.end.is_blank()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_complete() && self.end.is_complete()
    }
}

pub struct CoordinateReader {
    workbook: Sheets<BufReader<File>>,
    columns: ColumnMapping,
    legend_sheet: String,
}

impl CoordinateReader {
    pub fn open(path: &Path, columns: ColumnMapping, legend_sheet: &str) -> Result<Self> {
        if !path.exists() {
            return Err(GeoPositionError::FileNotFound(path.display().to_string()));
        }

        let workbook = open_workbook_auto(path).map_err(|e| {
            GeoPositionError::SpreadsheetOpen(format!("{}: {}", path.display(), e))
        })?;

        Ok(Self {
            workbook,
            columns,
            legend_sheet: legend_sheet.to_string(),
        })
    }

    /// 行を順に返すイテレータ（シートは必要になった時点で読み込む）
    pub fn rows(self) -> SheetRows {
        let pending = self.workbook.sheet_names().into_iter().collect();
        SheetRows {
            reader: self,
            pending,
            current: None,
            sheets_read: 0,
            sheets_skipped: 0,
            finished: false,
        }
    }
}

struct SheetCursor {
    name: String,
    range: Range<Data>,
    next_row: u32,
    end_row: u32,
}

pub struct SheetRows {
    reader: CoordinateReader,
    pending: VecDeque<String>,
    current: Option<SheetCursor>,
    sheets_read: usize,
    sheets_skipped: usize,
    finished: bool,
}

impl SheetRows {
    pub fn sheets_read(&self) -> usize {
        self.sheets_read
    }

    pub fn sheets_skipped(&self) -> usize {
        self.sheets_skipped
    }

    fn open_sheet(&mut self, name: String) -> Result<Option<SheetCursor>> {
        let range = self
            .reader
            .workbook
            .worksheet_range(&name)
            .map_err(|e| GeoPositionError::SpreadsheetOpen(format!("シート {}: {}", name, e)))?;
        self.sheets_read += 1;

        let Some((end_row, end_col)) = range.end() else {
            tracing::debug!(sheet = %name, "空シート");
            return Ok(None);
        };

        // ヘッダーのみ
        if end_row < 1 {
            return Ok(None);
        }

        let required = self.reader.columns.required_width();
        if (end_col as usize) + 1 < required {
            return Err(GeoPositionError::InvalidSheet(format!(
                "シート {} の列数が不足しています（{}列必要、{}列）",
                name,
                required,
                end_col + 1
            )));
        }

        Ok(Some(SheetCursor {
            name,
            range,
            next_row: 1,
            end_row,
        }))
    }
}

fn cell_text(range: &Range<Data>, row: u32, col: usize) -> String {
    range
        .get_value((row, col as u32))
        .map(|cell| cell.to_string())
        .unwrap_or_default()
}

impl Iterator for SheetRows {
    type Item = Result<SheetRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(cursor) = self.current.as_mut() {
                if cursor.next_row <= cursor.end_row {
                    let row = cursor.next_row;
                    cursor.next_row += 1;

                    let columns = &self.reader.columns;
                    return Some(Ok(SheetRow {
                        sheet: cursor.name.clone(),
                        row_index: row,
                        start: CoordinatePair::new(
                            cell_text(&cursor.range, row, columns.start_lng),
                            cell_text(&cursor.range, row, columns.start_lat),
                        ),
                        end: CoordinatePair::new(
                            cell_text(&cursor.range, row, columns.end_lng),
                            cell_text(&cursor.range, row, columns.end_lat),
                        ),
                    }));
                }
                self.current = None;
            }

            let name = match self.pending.pop_front() {
                Some(name) => name,
                None => {
                    self.finished = true;
                    return None;
                }
            };

            if name == self.reader.legend_sheet {
                tracing::debug!(sheet = %name, "凡例シートをスキップ");
                self.sheets_skipped += 1;
                continue;
            }

            match self.open_sheet(name) {
                Ok(cursor) => self.current = cursor,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
