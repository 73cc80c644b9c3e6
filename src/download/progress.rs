//! Throttled percentage reporting for a single download.

/// Receives progress percentages for the download in flight.
pub trait ProgressSink {
    /// Called once per download before any percentage, with the announced size.
    fn started(&mut self, _url: &str, _total_bytes: Option<u64>) {}

    /// Called with a percentage strictly greater than the previous one.
    fn report(&mut self, percent: u8);

    /// Called once the body has been fully received.
    fn finished(&mut self) {}
}

/// Sink that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&mut self, _percent: u8) {}
}

/// Sink that keeps every reported percentage, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    /// Reported percentages.
    pub percents: Vec<u8>,
    /// Number of downloads started.
    pub starts: usize,
}

impl ProgressSink for RecordingProgress {
    fn started(&mut self, _url: &str, _total_bytes: Option<u64>) {
        self.starts += 1;
    }

    fn report(&mut self, percent: u8) {
        self.percents.push(percent);
    }
}

/// Per-download progress state.
///
/// Remembers the last emitted percentage so that at most 101 values reach the
/// sink no matter how often the transfer loop calls [`update`](Self::update).
/// A fresh tracker is created for every download.
#[derive(Debug, Default, Clone)]
pub struct ProgressTracker {
    last_reported: Option<u8>,
}

impl ProgressTracker {
    /// Creates a tracker with nothing reported yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last percentage emitted, if any.
    #[must_use]
    pub fn last_reported(&self) -> Option<u8> {
        self.last_reported
    }

    /// Feeds the current byte counts and returns the percentage to emit, if any.
    ///
    /// Nothing is emitted while the total size is unknown or zero.
    pub fn update(&mut self, downloaded: u64, total: Option<u64>) -> Option<u8> {
        let total = total.filter(|t| *t > 0)?;
        let percent = percent(downloaded, total);
        if self.last_reported.is_some_and(|last| percent <= last) {
            return None;
        }
        self.last_reported = Some(percent);
        Some(percent)
    }

    /// Like [`update`](Self::update), forwarding an emitted percentage to `sink`.
    pub fn update_into(&mut self, downloaded: u64, total: Option<u64>, sink: &mut dyn ProgressSink) {
        if let Some(percent) = self.update(downloaded, total) {
            sink.report(percent);
        }
    }
}

/// `floor(downloaded * 100 / total)`, clamped to 100; 0 when `total` is 0.
#[must_use]
pub fn percent(downloaded: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = u128::from(downloaded) * 100 / u128::from(total);
    u8::try_from(value.min(100)).unwrap_or(100)
}
