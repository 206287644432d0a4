use crate::formatters::event::format_event;
use crate::types::{ActivityLine, Event};

/// Formats events in feed order, keeping at most `limit` lines.
///
/// Events that format to nothing are skipped and do not count toward the
/// limit. Scanning stops as soon as the limit is reached.
pub fn select(events: &[Event], limit: Option<usize>) -> Vec<ActivityLine> {
    select_with(events, limit, format_event)
}

pub fn select_with<F>(events: &[Event], limit: Option<usize>, mut fmt: F) -> Vec<ActivityLine>
where
    F: FnMut(&Event) -> Option<String>,
{
    let lines = events
        .iter()
        .filter_map(|e| fmt(e).map(|summary| ActivityLine::new(e, summary)));
    match limit {
        Some(n) => lines.take(n).collect(),
        None => lines.collect(),
    }
}
