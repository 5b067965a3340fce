//! Time helpers (JST, unix milliseconds).

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let jst_offset = jst_offset();
    let now_utc = Utc::now();
    let now_jst: DateTime<FixedOffset> = now_utc.with_timezone(&jst_offset);
    now_jst.timestamp_millis()
}

/// Convert a Unix millisecond timestamp to an RFC 3339 string in JST.
///
/// Out-of-range timestamps fall back to the epoch instead of panicking.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    let jst_offset = jst_offset();
    let datetime = jst_offset
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .unwrap_or_else(|| {
            jst_offset
                .timestamp_millis_opt(0)
                .single()
                .expect("epoch is representable")
        });
    datetime.to_rfc3339()
}

fn jst_offset() -> FixedOffset {
    // JST is UTC+9; the offset is always in range
    FixedOffset::east_opt(9 * 3600).expect("JST offset is valid")
}
