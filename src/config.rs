use crate::error::{GeoPositionError, Result};
use geo_position_common::{ColumnMapping, LEGEND_SHEET_NAME, OUTPUT_SHEET_NAME};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 既定の設定ファイル名（カレントディレクトリ）
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Baidu Map 逆ジオコーディング v2
pub const DEFAULT_ENDPOINT: &str = "http://api.map.baidu.com/geocoder/v2/";

/// APIキーの環境変数
pub const API_KEY_ENV: &str = "BAIDU_MAP_AK";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// 入力ブック
    #[serde(rename = "filepath")]
    pub input_path: PathBuf,

    /// 出力ブック（既存ファイルは上書き）
    #[serde(rename = "outputfile")]
    pub output_path: PathBuf,

    #[serde(rename = "ak")]
    pub api_key: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_legend_sheet")]
    pub legend_sheet: String,

    #[serde(default = "default_output_sheet")]
    pub output_sheet: String,

    #[serde(default)]
    pub columns: ColumnMapping,

    /// 未指定ならHTTPクライアントの既定値のまま
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_legend_sheet() -> String {
    LEGEND_SHEET_NAME.into()
}

fn default_output_sheet() -> String {
    OUTPUT_SHEET_NAME.into()
}

impl Config {
    /// 設定ファイルを読み込み、環境変数のAPIキーを反映する
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GeoPositionError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        config.api_key = resolve_api_key(std::env::var(API_KEY_ENV).ok(), &config.api_key)?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        if config.input_path.as_os_str().is_empty() {
            return Err(GeoPositionError::Config("filepath が空です".into()));
        }
        if config.output_path.as_os_str().is_empty() {
            return Err(GeoPositionError::Config("outputfile が空です".into()));
        }

        Ok(config)
    }

    /// CLI引数で入出力パスを上書き
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        self
    }

    /// 表示用にマスクしたAPIキー
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        format!("{}{}", head, "*".repeat(chars.len() - 4))
    }
}

/// APIキーを決定（環境変数を優先）
pub fn resolve_api_key(env_value: Option<String>, file_value: &str) -> Result<String> {
    if let Some(key) = env_value {
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }

    let key = file_value.trim();
    if key.is_empty() {
        return Err(GeoPositionError::MissingApiKey);
    }
    Ok(key.to_string())
}
