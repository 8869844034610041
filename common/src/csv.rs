//! CSVパーサー
//!
//! 外部ライブラリなしでRFC 4180相当の書式を読む:
//! - `"` で囲まれたフィールド内のカンマ・改行はリテラル
//! - クォート内の `""` は `"` 1文字
//! - レコード区切りは `\n` / `\r\n` / `\r`（クォート外のみ）
//! - 空行（全フィールドが空白のみ）は捨てる
//! - 最初の非空行をヘッダーとし、以降の行をヘッダー名→値のマップにする
//!
//! 不正な入力でもパニックしない。閉じられていないクォートは入力末尾で閉じたものとみなす。

use std::collections::HashMap;

/// 1行分のデータ（ヘッダー名 → 値）
pub type RawRow = HashMap<String, String>;

/// パース結果（ヘッダー付き）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    /// トリム済みのヘッダー名（出現順）
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl CsvTable {
    /// ヘッダーに含まれない列名を返す
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .filter(|name| !self.headers.iter().any(|h| h == *name))
            .copied()
            .collect()
    }
}

/// CSVテキストを行マップの列に変換
///
/// # Examples
/// ```
/// use moving_sale_common::csv::parse;
///
/// let rows = parse("A,B\n1,2\n3\n");
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1]["A"], "3");
/// assert_eq!(rows[1]["B"], "");
/// ```
pub fn parse(text: &str) -> Vec<RawRow> {
    parse_table(text).rows
}

/// ヘッダー名も含めてパース
pub fn parse_table(text: &str) -> CsvTable {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for record in split_records(text) {
        if is_blank(&record) {
            continue;
        }

        match &headers {
            None => {
                headers = Some(record.iter().map(|h| h.trim().to_string()).collect());
            }
            Some(keys) => rows.push(to_row(keys, record)),
        }
    }

    CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    }
}

/// ヘッダーに合わせてマップ化（不足は空文字、余剰は捨てる）
fn to_row(keys: &[String], record: Vec<String>) -> RawRow {
    let mut values = record.into_iter();
    keys.iter()
        .map(|key| (key.clone(), values.next().unwrap_or_default()))
        .collect()
}

fn is_blank(record: &[String]) -> bool {
    record.iter().all(|f| f.trim().is_empty())
}

/// テキストをレコード（フィールド列）に分割
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    // 改行で終わらない最終行
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
