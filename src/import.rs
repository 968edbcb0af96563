//! Activity sources: JSON activity files and form-style single entries.
//!
//! Files are lenient: a malformed record is skipped and counted, the rest
//! still load. Single entries are strict: a malformed entry is an error,
//! since a person typed it and should be told.
//!
//! # File Format
//!
//! ```json
//! [
//!   { "name": "Study", "duration": 90, "priority": 9 },
//!   { "nama": "Olahraga", "durasi": 30, "prioritas": 6 }
//! ]
//! ```

use crate::activity::Activity;
use crate::error::{PlanError, Result};

#[cfg(feature = "serde")]
pub use self::json::{from_json_file, from_json_str, to_json_string, ImportReport};

/// Parses a `name:duration:priority` entry.
///
/// The name may itself contain `:`; the last two fields are numeric.
///
/// # Examples
///
/// ```
/// use u_dayplan::import::parse_entry;
///
/// let a = parse_entry("Deep work: draft:90:9").unwrap();
/// assert_eq!(a.name, "Deep work: draft");
/// assert_eq!(a.duration, 90);
/// assert_eq!(a.priority, 9);
/// ```
pub fn parse_entry(entry: &str) -> Result<Activity> {
    let mut fields = entry.rsplitn(3, ':');
    let (Some(priority), Some(duration), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(PlanError::invalid_activity(
            0,
            entry,
            "expected name:duration:priority",
        ));
    };
    let name = name.trim();

    let duration: i64 = duration.trim().parse().map_err(|_| {
        PlanError::invalid_activity(0, name, format!("duration {duration:?} is not an integer"))
    })?;
    let priority: u32 = priority.trim().parse().map_err(|_| {
        PlanError::invalid_activity(0, name, format!("priority {priority:?} is not an integer"))
    })?;

    let activity = Activity::new(name, duration, priority);
    activity.validate(0)?;
    Ok(activity)
}

#[cfg(feature = "serde")]
mod json {
    use std::fs;
    use std::path::Path;

    use serde_json::Value;
    use tracing::debug;

    use crate::activity::Activity;
    use crate::error::{PlanError, Result};

    /// Activities loaded from a file, plus how many records were dropped.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ImportReport {
        /// Valid activities, in file order.
        pub activities: Vec<Activity>,
        /// Records that were skipped as malformed.
        pub skipped: usize,
    }

    /// Parses a JSON activity document.
    ///
    /// # Errors
    ///
    /// [`PlanError::Import`] if the text is not JSON or not an array.
    pub fn from_json_str(text: &str) -> Result<ImportReport> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| PlanError::Import(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(PlanError::Import(
                "expected a JSON array of activity records".into(),
            ));
        };

        let mut report = ImportReport::default();
        for (index, item) in items.iter().enumerate() {
            match record_from_value(item) {
                Some(activity) => report.activities.push(activity),
                None => {
                    debug!(index, record = %item, "skipping malformed activity record");
                    report.skipped += 1;
                }
            }
        }
        Ok(report)
    }

    /// Reads and parses a JSON activity file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<ImportReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| PlanError::Import(format!("{}: {e}", path.display())))?;
        from_json_str(&text).map_err(|e| match e {
            PlanError::Import(msg) => PlanError::Import(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Serializes activities in the file format read by [`from_json_str`].
    pub fn to_json_string(activities: &[Activity]) -> Result<String> {
        serde_json::to_string_pretty(activities).map_err(|e| PlanError::Import(e.to_string()))
    }

    fn record_from_value(item: &Value) -> Option<Activity> {
        let obj = item.as_object()?;
        let field = |key: &str, alias: &str| obj.get(key).or_else(|| obj.get(alias));

        let name = field("name", "nama")?.as_str()?.trim();
        let duration = field("duration", "durasi")?.as_i64()?;
        let priority = u32::try_from(field("priority", "prioritas")?.as_u64()?).ok()?;

        let activity = Activity::new(name, duration, priority);
        activity.validate(0).ok()?;
        Some(activity)
    }

}
