//! Plain-text rendering of activities and results.

use std::fmt::Write as _;
use std::time::Duration;

use crate::activity::Activity;
use crate::harness::TimedSelection;

const HEADERS: [&str; 3] = ["Name", "Duration", "Priority"];

/// Renders activities as an aligned three-column table.
///
/// # Examples
///
/// ```
/// use u_dayplan::{report::render_table, Activity};
///
/// let table = render_table(&[Activity::new("Gym", 60, 7)]);
/// assert!(table.starts_with("Name"));
/// assert!(table.contains("Gym"));
/// ```
pub fn render_table(activities: &[Activity]) -> String {
    let name_width = activities
        .iter()
        .map(|a| a.name.chars().count())
        .chain(std::iter::once(HEADERS[0].len()))
        .max()
        .unwrap_or(HEADERS[0].len());
    let dur_width = HEADERS[1].len();
    let prio_width = HEADERS[2].len();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>dur_width$}  {:>prio_width$}",
        HEADERS[0], HEADERS[1], HEADERS[2]
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(name_width),
        "-".repeat(dur_width),
        "-".repeat(prio_width)
    );
    for a in activities {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>dur_width$}  {:>prio_width$}",
            a.name, a.duration, a.priority
        );
    }
    out
}

/// One-line score and timing summary.
pub fn summary_line(timed: &TimedSelection) -> String {
    format!(
        "Total score: {} | Elapsed: {:.2} ms",
        timed.result.score,
        timed.elapsed.as_secs_f64() * 1000.0
    )
}

/// Message shown in place of a score when the harness timed out.
pub fn timeout_message(limit: Duration) -> String {
    format!(
        "Failed: search exceeded the {:.0} s time limit and was abandoned (timeout)",
        limit.as_secs_f64()
    )
}

/// Chosen activities followed by the summary line.
pub fn render_result(timed: &TimedSelection) -> String {
    let mut out = render_table(&timed.result.selection);
    out.push_str(&summary_line(timed));
    out.push('\n');
    out
}
