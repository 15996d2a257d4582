//! # 相対時刻
//!
//! ダッシュボードの一覧などに表示する「N 分鐘前」形式の文字列を生成する。

use chrono::{DateTime, Utc};

use crate::{DomainError, clock::Clock};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// 経過時間を相対表記にする
///
/// 分単位に切り捨てたうえで、1 時間未満は分、1 日未満は時間、それ以上は日で表す。
/// 未来の時刻は負の分数になる（`"-5 分鐘前"`）。
pub fn format_relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_milliseconds().div_euclid(60_000);

    if minutes < MINUTES_PER_HOUR {
        format!("{minutes} 分鐘前")
    } else if minutes < MINUTES_PER_DAY {
        format!("{} 小時前", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{} 天前", minutes / MINUTES_PER_DAY)
    }
}

/// RFC 3339 形式の時刻文字列を相対表記にする
pub fn format_relative_time_iso(iso: &str, clock: &dyn Clock) -> Result<String, DomainError> {
    let created_at = DateTime::parse_from_rfc3339(iso)
        .map_err(|e| DomainError::Validation(format!("時刻の形式が不正です: {iso} ({e})")))?
        .with_timezone(&Utc);

    Ok(format_relative_time(created_at, clock.now()))
}
