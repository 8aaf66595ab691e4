use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoPositionError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。config.yaml の ak か環境変数 BAIDU_MAP_AK で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力ブックを開けません: {0}")]
    SpreadsheetOpen(String),

    #[error("シート構成が不正: {0}")]
    InvalidSheet(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("YAML解析エラー: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] geo_position_common::Error),
}

pub type Result<T> = std::result::Result<T, GeoPositionError>;
