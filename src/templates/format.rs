// templates/format.rs
// Display formatting for listing fields, ja-JP conventions.

use chrono::{DateTime, FixedOffset, Utc};

/// Japan Standard Time, UTC+9.
const JST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// `50000000` -> `¥50,000,000`
pub fn format_price(yen: u64) -> String {
    format!("¥{}", group_thousands(yen))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Card form: `渋谷駅 徒歩5分`
pub fn format_access(station: &str, minutes: u32) -> String {
    format!("{station}駅 徒歩{minutes}分")
}

/// Detail form: `渋谷駅 （徒歩5分）`
pub fn format_access_detail(station: &str, minutes: u32) -> String {
    format!("{station}駅 （徒歩{minutes}分）")
}

/// Calendar date in Japan time: `2024/1/15`
pub fn format_date(instant: &DateTime<Utc>) -> String {
    match FixedOffset::east_opt(JST_OFFSET_SECS) {
        Some(jst) => instant.with_timezone(&jst).format("%Y/%-m/%-d").to_string(),
        None => instant.format("%Y/%-m/%-d").to_string(),
    }
}
