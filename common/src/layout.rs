//! 入出力シートのレイアウト定義

use serde::Deserialize;

/// 入力ブックで読み飛ばすシート名（項目説明用）
pub const LEGEND_SHEET_NAME: &str = "字段";

/// 出力シート名
pub const OUTPUT_SHEET_NAME: &str = "位置信息";

/// 出力ヘッダー（既存の下流処理との互換のため表記はそのまま）
pub const HEADER_FIELDS: [&str; 6] = [
    "start_lang",
    "start_lati",
    "end_lang",
    "end_lati",
    "start_pos",
    "end_pos",
];

/// 入力シートの座標列（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub start_lng: usize,
    pub start_lat: usize,
    pub end_lng: usize,
    pub end_lat: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            start_lng: 4,
            start_lat: 5,
            end_lng: 6,
            end_lat: 7,
        }
    }
}

impl ColumnMapping {
    /// 必要な最小列数
    pub fn required_width(&self) -> usize {
        [self.start_lng, self.start_lat, self.end_lng, self.end_lat]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}
