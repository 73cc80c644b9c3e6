//! Terminal progress bar for the download in flight.

use indicatif::{ProgressBar, ProgressStyle};
use webshare_core::ProgressSink;

/// Renders reported percentages as an indicatif bar on stderr.
#[derive(Debug, Default)]
pub(crate) struct BarProgress {
    bar: Option<ProgressBar>,
}

impl ProgressSink for BarProgress {
    fn started(&mut self, _url: &str, _total_bytes: Option<u64>) {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        self.bar = Some(bar);
    }

    fn report(&mut self, percent: u8) {
        if let Some(bar) = &self.bar {
            bar.set_position(u64::from(percent));
        }
    }

    fn finished(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_tracks_position_and_clears_on_finish() {
        let mut sink = BarProgress::default();
        sink.report(10);
        assert!(sink.bar.is_none(), "no bar before a download starts");

        sink.started("https://vip.wsfiles.cz/x", Some(100));
        sink.report(42);
        assert_eq!(sink.bar.as_ref().map(ProgressBar::position), Some(42));

        sink.finished();
        assert!(sink.bar.is_none());
    }
}
