#![allow(dead_code)]
//! テスト用ヘルパー
//!
//! - 入力ブックの生成（rust_xlsxwriter）
//! - 出力ブックの読み戻し（calamine）
//! - ネットワークを使わない ReverseGeocoder

use calamine::{open_workbook_auto, Reader};
use geo_position_common::CoordinatePair;
use geo_position_rust::config::Config;
use geo_position_rust::error::{GeoPositionError, Result};
use geo_position_rust::geocoder::ReverseGeocoder;
use rust_xlsxwriter::Workbook;
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub enum CellVal {
    Text(String),
    Num(f64),
    Empty,
}

impl From<&str> for CellVal {
    fn from(s: &str) -> Self {
        CellVal::Text(s.to_string())
    }
}

impl From<f64> for CellVal {
    fn from(n: f64) -> Self {
        CellVal::Num(n)
    }
}

pub const INPUT_HEADER: [&str; 8] = [
    "id", "car", "start_time", "end_time", "start_lng", "start_lat", "end_lng", "end_lat",
];

/// 列4〜7に座標を持つデータ行
pub fn data_row(id: &str, start_lng: f64, start_lat: f64, end_lng: f64, end_lat: f64) -> Vec<CellVal> {
    vec![
        id.into(),
        "京A12345".into(),
        "2017-03-01 08:00".into(),
        "2017-03-01 08:30".into(),
        start_lng.into(),
        start_lat.into(),
        end_lng.into(),
        end_lat.into(),
    ]
}

pub fn header_row() -> Vec<CellVal> {
    INPUT_HEADER.iter().map(|&s| s.into()).collect()
}

/// シート名と行の組から入力ブックを作成
pub fn write_input_workbook(path: &Path, sheets: &[(&str, Vec<Vec<CellVal>>)]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("シート名設定失敗");

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    CellVal::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, s.as_str()).expect("書き込み失敗");
                    }
                    CellVal::Num(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).expect("書き込み失敗");
                    }
                    CellVal::Empty => {}
                }
            }
        }
    }

    workbook.save(path).expect("入力ブック保存失敗");
}

/// 出力ブックの (シート名一覧, 先頭シートの全セル文字列)
pub fn read_output(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut workbook = open_workbook_auto(path).expect("出力ブックを開けない");
    let names = workbook.sheet_names();
    let range = workbook
        .worksheet_range(&names[0])
        .expect("出力シートを読めない");

    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    (names, rows)
}

pub fn test_config(input: &Path, output: &Path) -> Config {
    let yaml = "filepath: input.xlsx\noutputfile: output.xlsx\nak: test-ak\n";
    Config::from_yaml_str(yaml)
        .expect("設定パース失敗")
        .with_overrides(Some(input.to_path_buf()), Some(output.to_path_buf()))
}

/// renderReverse(...) 形式の成功レスポンス
pub fn jsonp_ok(formatted_address: &str, sematic_description: &str) -> String {
    let body = json!({
        "status": 0,
        "result": {
            "formatted_address": formatted_address,
            "business": "",
            "sematic_description": sematic_description,
            "cityCode": 131
        }
    });
    format!("renderReverse&&renderReverse({})", body)
}

/// result を含まないエラーレスポンス
pub fn jsonp_error(status: i64, message: &str) -> String {
    let body = json!({ "status": status, "message": message });
    format!("renderReverse&&renderReverse({})", body)
}

pub enum Reply {
    Body(String),
    NetworkError,
}

/// 座標ごとに決められた応答を返すジオコーダ
#[derive(Default)]
pub struct ScriptedGeocoder {
    replies: HashMap<CoordinatePair, Reply>,
    calls: RefCell<Vec<CoordinatePair>>,
}

impl ScriptedGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, longitude: &str, latitude: &str, reply: Reply) -> Self {
        self.replies.insert(CoordinatePair::new(longitude, latitude), reply);
        self
    }

    pub fn ok(self, longitude: &str, latitude: &str, address: &str, semantic: &str) -> Self {
        self.reply(longitude, latitude, Reply::Body(jsonp_ok(address, semantic)))
    }

    pub fn calls(&self) -> Vec<CoordinatePair> {
        self.calls.borrow().clone()
    }
}

impl ReverseGeocoder for ScriptedGeocoder {
    async fn fetch(&self, point: &CoordinatePair) -> Result<String> {
        self.calls.borrow_mut().push(point.clone());
        match self.replies.get(point) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::NetworkError) | None => {
                Err(GeoPositionError::ApiCall("connection refused".into()))
            }
        }
    }
}

pub fn temp_paths(dir: &Path) -> (PathBuf, PathBuf) {
    (dir.join("input.xlsx"), dir.join("output.xlsx"))
}
