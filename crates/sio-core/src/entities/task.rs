use chrono::Weekday;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One scheduled unit of work in a weekly study plan.
///
/// Every field tolerates being absent (or `null`) on the wire. `day` is kept
/// as the raw string so that values outside `Mon..Sun` survive normalization.
/// Only JSON objects deserialize into a task; positional arrays such as
/// `["Mon","Read",[]]` are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(try_from = "Map<String, Value>")]
pub struct StudyTask {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Deserialize)]
struct TaskFields {
    #[serde(default, deserialize_with = "null_as_default")]
    day: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    steps: Vec<String>,
}

impl TryFrom<Map<String, Value>> for StudyTask {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let TaskFields { day, title, steps } = serde_json::from_value(Value::Object(fields))?;
        Ok(Self { day, title, steps })
    }
}

impl StudyTask {
    #[must_use]
    pub fn new(day: impl Into<String>, title: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            day: day.into(),
            title: title.into(),
            steps,
        }
    }

    /// The weekday named by `day`, if it is a recognizable weekday name.
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        self.day.trim().parse().ok()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_and_null_fields_default() {
        let task: StudyTask = serde_json::from_str(r#"{"day":"Mon","steps":null}"#).unwrap();
        assert_eq!(task, StudyTask::new("Mon", "", Vec::new()));
    }

    #[test]
    fn positional_arrays_are_not_tasks() {
        assert!(serde_json::from_str::<StudyTask>(r#"["Mon","Read",["p1"]]"#).is_err());
        assert!(serde_json::from_str::<Vec<StudyTask>>(r#"[["Mon","Read",["p1"]]]"#).is_err());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        assert!(serde_json::from_str::<StudyTask>(r#"{"day":"Mon","steps":"p1"}"#).is_err());
    }

    #[test]
    fn weekday_parses_abbreviations() {
        assert_eq!(
            StudyTask::new("Wed", "Quiz", Vec::new()).weekday(),
            Some(Weekday::Wed)
        );
        assert_eq!(
            StudyTask::new(" sun ", "Rest", Vec::new()).weekday(),
            Some(Weekday::Sun)
        );
    }

    #[test]
    fn weekday_is_none_for_other_strings() {
        assert_eq!(StudyTask::new("Someday", "Later", Vec::new()).weekday(), None);
    }
}
