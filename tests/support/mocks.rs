// tests/support/mocks.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use kawaraban_core::application::ports::time::Clock;
use kawaraban_core::application::ports::util::SuffixSource;

/// 固定時刻を返すダミーの時計
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 呼ぶたびに1秒進むダミーの時計。記事の作成順が
/// created_at の順序にそのまま写る。
pub struct TickingClock {
    base: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl TickingClock {
    pub fn new() -> Self {
        Self {
            base: Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
            ticks: Mutex::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        self.base + Duration::seconds(*ticks)
    }
}

/// 固定サフィックスを返すダミーのソース
pub struct FixedSuffixSource(pub &'static str);

impl SuffixSource for FixedSuffixSource {
    fn random_suffix(&self) -> String {
        self.0.to_string()
    }
}
