use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::StudyTask;

/// The plan object emitted by the study coach model.
///
/// The backend stores this (serialized) in a plan's `tasksJson` column, and
/// some deployments return it inline under `tasks`.
///
/// Only `tasks` decides whether a value is a draft. `week_start` and `goals`
/// that are not strings (a `LocalDate` written as `[2024,1,1]`, goals as a
/// list) read as `None`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyPlanDraft {
    #[serde(
        default,
        alias = "weekStart",
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub week_start: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub goals: Option<String>,
    pub tasks: Vec<StudyTask>,
}

/// A weekly study plan with its tasks already normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyPlan {
    pub id: Option<i64>,
    pub student_id: Option<i64>,
    /// ISO date of the Monday the plan starts on.
    pub week_start: Option<String>,
    pub goals: Option<String>,
    pub created_at: Option<String>,
    pub tasks: Vec<StudyTask>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

impl StudyPlan {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn draft_with_mistyped_metadata_keeps_tasks() {
        let draft: StudyPlanDraft = serde_json::from_str(
            r#"{"weekStart":[2024,1,1],"goals":["algebra"],"tasks":[{"day":"Mon","title":"A"}]}"#,
        )
        .unwrap();
        assert_eq!(draft.week_start, None);
        assert_eq!(draft.goals, None);
        assert_eq!(draft.tasks, vec![StudyTask::new("Mon", "A", Vec::new())]);
    }

    #[test]
    fn draft_still_requires_a_task_list() {
        assert!(serde_json::from_str::<StudyPlanDraft>(r#"{"goals":"algebra"}"#).is_err());
        assert!(serde_json::from_str::<StudyPlanDraft>(r#"{"tasks":"[]"}"#).is_err());
    }
}
