//! APIレスポンスパーサー
//!
//! 逆ジオコーディングAPIのレスポンス（JSONP または素のJSON）から
//! JSON部分を取り出し、GeocodeOutcome に変換する

use crate::error::{Error, Result};
use crate::types::{GeocodeEnvelope, GeocodeOutcome};

/// レスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. `{` で始まる素のJSON
/// 2. `renderReverse(...)` 形式のJSONP（最初の `(` から最後の `)` まで）
/// 3. エラー
///
/// # Examples
/// ```
/// use geo_position_common::extract_json;
///
/// let body = "renderReverse&&renderReverse({\"status\":0})";
/// assert_eq!(extract_json(body).unwrap(), "{\"status\":0}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(Error::Parse("レスポンスが空です".into()));
    }

    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    if let Some(start) = trimmed.find('(') {
        if let Some(end) = trimmed.rfind(')') {
            if end > start {
                return Ok(trimmed[start + 1..end].trim());
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// レスポンスをパースして解決結果を返す
///
/// # Returns
/// * `Ok(GeocodeOutcome::Resolved)` - result がある場合
/// * `Ok(GeocodeOutcome::Failed)` - JSONは正しいが result が無い/null の場合
/// * `Err` - 空レスポンスやJSON不正
pub fn parse_geocode_response(response: &str) -> Result<GeocodeOutcome> {
    let json_str = extract_json(response)?;
    let envelope: GeocodeEnvelope = serde_json::from_str(json_str)?;
    Ok(envelope.into())
}
