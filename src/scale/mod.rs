//! Visual encoding scales
//!
//! Small, dependency-free scale types backing the dashboard encodings:
//! a progress/time scale for the slider, a pixel time scale for the
//! scatter x axis, a linear scale for the hour-of-day y axis, a
//! square-root scale for circle radii and an ordinal color scale for
//! categorical palettes.


use chrono::{DateTime, FixedOffset, Utc};

/// Tableau-10 categorical palette used by the file composition view
pub const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

fn to_datetime(ms: i64, offset: FixedOffset) -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// Strictly monotonic linear map between a timestamp domain and the
/// `[0, 100]` progress range. Built once from the full commit range and
/// never rebuilt.
#[derive(Debug, Clone)]
pub struct TimeScale {
    start_ms: i64,
    end_ms: i64,
    offset: FixedOffset,
}

impl TimeScale {
    /// Build the scale over `[start, end]`. A degenerate domain (single
    /// commit) keeps a one-millisecond span so the map stays invertible.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        let start_ms = start.timestamp_millis();
        let end_ms = end.timestamp_millis().max(start_ms + 1);
        Self {
            start_ms,
            end_ms,
            offset: *start.offset(),
        }
    }

    /// Map a timestamp to progress, clamped to `[0, 100]`
    pub fn scale(&self, at: &DateTime<FixedOffset>) -> f64 {
        let span = (self.end_ms - self.start_ms) as f64;
        let pos = (at.timestamp_millis() - self.start_ms) as f64 / span * 100.0;
        pos.clamp(0.0, 100.0)
    }

    /// Map a progress value back to a timestamp, clamping the input
    pub fn invert(&self, progress: f64) -> DateTime<FixedOffset> {
        let progress = progress.clamp(0.0, 100.0);
        let span = (self.end_ms - self.start_ms) as f64;
        let ms = self.start_ms + (span * progress / 100.0).round() as i64;
        to_datetime(ms, self.offset)
    }
}

/// Linear time-to-pixel scale for the scatter x axis. Rebuilt from the
/// filtered extent on every update so the visible window always spans
/// exactly the filtered data.
#[derive(Debug, Clone)]
pub struct PixelTimeScale {
    start_ms: i64,
    end_ms: i64,
    range: (f64, f64),
    offset: FixedOffset,
}

impl PixelTimeScale {
    /// Build over the `[start, end]` extent. A zero-width extent is
    /// padded by one hour on each side before any rounding.
    pub fn new(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        range: (f64, f64),
    ) -> Self {
        let mut start_ms = start.timestamp_millis();
        let mut end_ms = end.timestamp_millis();
        if start_ms == end_ms {
            start_ms -= HOUR_MS;
            end_ms += HOUR_MS;
        }
        Self {
            start_ms,
            end_ms,
            range,
            offset: *start.offset(),
        }
    }

    /// Round the domain outward to whole hours, or whole days once the
    /// span exceeds three days. Rounding happens in the domain's own
    /// utc-offset so day boundaries land on local midnight.
    pub fn nice(mut self) -> Self {
        let step = if self.end_ms - self.start_ms > 3 * DAY_MS {
            DAY_MS
        } else {
            HOUR_MS
        };
        self.start_ms = self.floor_to(self.start_ms, step);
        let ceil = self.floor_to(self.end_ms, step);
        if ceil != self.end_ms {
            self.end_ms = ceil + step;
        }
        self
    }

    fn floor_to(&self, ms: i64, step: i64) -> i64 {
        let local = ms + i64::from(self.offset.local_minus_utc()) * 1000;
        local.div_euclid(step) * step - i64::from(self.offset.local_minus_utc()) * 1000
    }

    /// Map a timestamp to a pixel position
    pub fn scale(&self, at: &DateTime<FixedOffset>) -> f64 {
        let span = (self.end_ms - self.start_ms) as f64;
        let t = (at.timestamp_millis() - self.start_ms) as f64 / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Current domain bounds
    pub fn domain(&self) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        (
            to_datetime(self.start_ms, self.offset),
            to_datetime(self.end_ms, self.offset),
        )
    }

    /// Evenly stepped ticks with display labels, at most `count` of
    /// them. Hour-grained domains label as `14:00`, day-grained domains
    /// as `Mar 5`.
    pub fn ticks(&self, count: usize) -> Vec<(f64, String)> {
        let span = self.end_ms - self.start_ms;
        let raw_step = span / count.max(1) as i64;
        let ladder = [
            HOUR_MS,
            2 * HOUR_MS,
            3 * HOUR_MS,
            6 * HOUR_MS,
            12 * HOUR_MS,
            DAY_MS,
            2 * DAY_MS,
            7 * DAY_MS,
            14 * DAY_MS,
            30 * DAY_MS,
        ];
        let step = ladder
            .iter()
            .copied()
            .find(|s| *s >= raw_step)
            .unwrap_or(30 * DAY_MS);
        let format = if step < DAY_MS { "%H:%M" } else { "%b %-d" };

        let mut ticks = Vec::new();
        let mut ms = self.floor_to(self.start_ms, step);
        if ms < self.start_ms {
            ms += step;
        }
        while ms <= self.end_ms {
            let at = to_datetime(ms, self.offset);
            ticks.push((self.scale(&at), at.format(format).to_string()));
            ms += step;
        }
        ticks
    }
}

/// Plain linear scale between two f64 intervals. The y axis uses an
/// inverted pixel range so larger values sit higher on screen.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Square-root scale: pixel *area*, not radius, grows linearly with the
/// encoded value.
#[derive(Debug, Clone)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a value to a radius. A zero-width domain maps to the upper
    /// radius bound.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = (self.domain.0.max(0.0).sqrt(), self.domain.1.max(0.0).sqrt());
        if d1 == d0 {
            return self.range.1;
        }
        let t = (value.max(0.0).sqrt() - d0) / (d1 - d0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// First-seen ordinal assignment of categories to palette colors.
/// Stable across re-renders as long as the same categories recur.
#[derive(Debug, Clone, Default)]
pub struct OrdinalScale {
    seen: Vec<String>,
}

impl OrdinalScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a category, assigning the next palette slot on first
    /// sight. Assignments wrap once the palette is exhausted.
    pub fn color(&mut self, category: &str) -> &'static str {
        let index = match self.seen.iter().position(|c| c == category) {
            Some(index) => index,
            None => {
                self.seen.push(category.to_string());
                self.seen.len() - 1
            }
        };
        TABLEAU10[index % TABLEAU10.len()]
    }
}
