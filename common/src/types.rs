//! 逆ジオコーディングの型定義
//!
//! - CoordinatePair: セルから読んだ経度・緯度（文字列のまま保持）
//! - GeocodeEnvelope: APIレスポンスのJSON形状
//! - GeocodeOutcome: 解決成功/失敗のタグ付き結果
//! - OutputRow: 出力シート1行分

use serde::Deserialize;
use std::fmt;

/// 経度・緯度のペア
///
/// 入力セルの表記を崩さないよう数値には変換しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoordinatePair {
    pub longitude: String,
    pub latitude: String,
}

impl CoordinatePair {
    pub fn new(longitude: impl Into<String>, latitude: impl Into<String>) -> Self {
        Self {
            longitude: longitude.into(),
            latitude: latitude.into(),
        }
    }

    /// APIの location パラメータ（緯度が先）
    pub fn location_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    pub fn is_blank(&self) -> bool {
        self.longitude.trim().is_empty() && self.latitude.trim().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.longitude.trim().is_empty() && !self.latitude.trim().is_empty()
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

/// 住所情報（APIの result フィールド）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaceDetail {
    pub formatted_address: String,

    pub business: String,

    /// 上流APIのフィールド名（綴りはAPI側のまま）
    pub sematic_description: String,

    #[serde(rename = "cityCode")]
    pub city_code: i64,
}

impl PlaceDetail {
    /// 出力用の地名文字列（区切りなしで連結）
    pub fn describe(&self) -> String {
        format!("{}{}", self.formatted_address, self.sematic_description)
    }
}

/// APIレスポンス全体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeEnvelope {
    #[serde(default)]
    pub status: i64,

    /// エラー時のみ返される説明
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub result: Option<PlaceDetail>,
}

/// 逆ジオコーディングの結果
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    Resolved(PlaceDetail),
    Failed { status: i64, reason: String },
}

impl From<GeocodeEnvelope> for GeocodeOutcome {
    fn from(envelope: GeocodeEnvelope) -> Self {
        match envelope.result {
            Some(detail) => GeocodeOutcome::Resolved(detail),
            None => GeocodeOutcome::Failed {
                status: envelope.status,
                reason: envelope
                    .message
                    .unwrap_or_else(|| "result がありません".to_string()),
            },
        }
    }
}

/// 出力シートの1行
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRow {
    pub start: CoordinatePair,
    pub end: CoordinatePair,
    pub start_position: String,
    pub end_position: String,
}

impl OutputRow {
    /// ヘッダー順のセル値
    pub fn cells(&self) -> [&str; 6] {
        [
            self.start.longitude.as_str(),
            self.start.latitude.as_str(),
            self.end.longitude.as_str(),
            self.end.latitude.as_str(),
            self.start_position.as_str(),
            self.end_position.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_param_latitude_first() {
        let pair = CoordinatePair::new("116.397428", "39.909187");
        assert_eq!(pair.location_param(), "39.909187,116.397428");
    }

    #[test]
    fn test_blank_and_complete() {
        assert!(CoordinatePair::default().is_blank());
        assert!(!CoordinatePair::default().is_complete());

        let half = CoordinatePair::new("116.3", " ");
        assert!(!half.is_blank());
        assert!(!half.is_complete());

        assert!(CoordinatePair::new("116.3", "39.9").is_complete());
    }

    #[test]
    fn test_describe_concatenates_without_separator() {
        let detail = PlaceDetail {
            formatted_address: "Beijing, China".to_string(),
            sematic_description: ", near Tiananmen".to_string(),
            ..Default::default()
        };
        assert_eq!(detail.describe(), "Beijing, China, near Tiananmen");
    }

    #[test]
    fn test_place_detail_deserialize_wire_names() {
        let json = r#"{
            "formatted_address": "北京市东城区",
            "business": "天安门",
            "sematic_description": "天安门附近",
            "cityCode": 131
        }"#;

        let detail: PlaceDetail = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(detail.formatted_address, "北京市东城区");
        assert_eq!(detail.business, "天安门");
        assert_eq!(detail.sematic_description, "天安门附近");
        assert_eq!(detail.city_code, 131);
    }

    #[test]
    fn test_outcome_from_envelope_without_result() {
        let envelope = GeocodeEnvelope {
            status: 200,
            message: Some("APP不存在".to_string()),
            result: None,
        };

        let outcome = GeocodeOutcome::from(envelope);
        assert_eq!(
            outcome,
            GeocodeOutcome::Failed {
                status: 200,
                reason: "APP不存在".to_string()
            }
        );
    }

    #[test]
    fn test_output_row_cells_order() {
        let row = OutputRow {
            start: CoordinatePair::new("1", "2"),
            end: CoordinatePair::new("3", "4"),
            start_position: "A".to_string(),
            end_position: "B".to_string(),
        };
        assert_eq!(row.cells(), ["1", "2", "3", "4", "A", "B"]);
    }
}
