//! 逆ジオコーディングAPI連携モジュール
//!
//! 1地点につき1回GETを発行し、レスポンス本文をそのまま返す。
//! リトライ・バックオフは行わない。

use crate::config::Config;
use crate::error::{GeoPositionError, Result};
use geo_position_common::{parse_geocode_response, CoordinatePair, GeocodeOutcome};
use std::time::Duration;

/// JSONPコールバック名
const CALLBACK: &str = "renderReverse";

/// 逆ジオコーディングの取得元
#[allow(async_fn_in_trait)]
pub trait ReverseGeocoder {
    /// レスポンス本文（JSONPのまま）を取得
    async fn fetch(&self, point: &CoordinatePair) -> Result<String>;
}

/// クエリパラメータ（location は緯度,経度の順）
///
/// 値のエンコードは reqwest に任せる。
pub fn request_params(point: &CoordinatePair, api_key: &str) -> [(&'static str, String); 5] {
    [
        ("callback", CALLBACK.to_string()),
        ("location", point.location_param()),
        ("output", "json".to_string()),
        ("pois", "0".to_string()),
        ("ak", api_key.to_string()),
    ]
}

/// Baidu Map API クライアント
pub struct BaiduGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl BaiduGeocoder {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeoPositionError::Config(format!("HTTPクライアント作成エラー: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// 1地点分のGETリクエストを組み立て
    pub fn build_request(&self, point: &CoordinatePair) -> Result<reqwest::Request> {
        self.client
            .get(&self.endpoint)
            .query(&request_params(point, &self.api_key))
            .build()
            .map_err(|e| GeoPositionError::ApiCall(format!("リクエスト作成失敗: {}", e)))
    }
}

impl ReverseGeocoder for BaiduGeocoder {
    async fn fetch(&self, point: &CoordinatePair) -> Result<String> {
        let request = self.build_request(point)?;
        tracing::debug!(location = %point.location_param(), "逆ジオコーディング要求");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| GeoPositionError::ApiCall(format!("リクエスト失敗: {}", e)))?;

        response
            .text()
            .await
            .map_err(|e| GeoPositionError::ApiCall(format!("レスポンス読み込み失敗: {}", e)))
    }
}

/// 1地点を解決（取得してパース）
pub async fn resolve<G: ReverseGeocoder>(
    geocoder: &G,
    point: &CoordinatePair,
) -> Result<GeocodeOutcome> {
    let body = geocoder.fetch(point).await?;
    parse_body(&body)
}

/// 取得済みの本文をパース
pub fn parse_body(body: &str) -> Result<GeocodeOutcome> {
    Ok(parse_geocode_response(body)?)
}
