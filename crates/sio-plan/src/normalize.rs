use serde::Deserialize;
use sio_core::{StudyPlan, StudyPlanDraft, StudyTask};
use thiserror::Error;

use crate::payload::{RawStudyPlanPayload, TaskField};

/// Why a JSON-encoded task field did not yield tasks. Never leaves the crate.
#[derive(Debug, Error)]
enum ParseMismatch {
    #[error("not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("JSON is neither a task list nor an object with a task list")]
    UnexpectedShape,
}

/// The two shapes an encoded task string may decode to.
#[derive(Deserialize)]
#[serde(untagged)]
enum Decoded {
    List(Vec<StudyTask>),
    Wrapped(StudyPlanDraft),
}

fn parse_encoded(field: &'static str, text: &str) -> Result<Vec<StudyTask>, ParseMismatch> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let result = match serde_json::from_value(value) {
        Ok(Decoded::List(tasks)) => Ok(tasks),
        Ok(Decoded::Wrapped(draft)) => Ok(draft.tasks),
        Err(_) => Err(ParseMismatch::UnexpectedShape),
    };
    if let Err(error) = &result {
        tracing::trace!(field, %error, "encoded task field did not match");
    }
    result
}

fn encoded_tasks(field: &'static str, candidate: Option<&TaskField>) -> Option<Vec<StudyTask>> {
    match candidate {
        Some(TaskField::Encoded(text)) => parse_encoded(field, text).ok(),
        _ => None,
    }
}

/// Extract the task list from a study-plan payload.
///
/// Attempts run in a fixed order and the first match wins:
/// 1. `tasks` is already a list.
/// 2. `tasks` is a string encoding a list or a `{ tasks }` object.
/// 3. `tasksJson` is such a string.
/// 4. `tasks` is an inline `{ tasks }` object.
/// 5. `tasksJson` is a list or an inline `{ tasks }` object.
///
/// Absent payloads and anything unrecognized give an empty list.
#[must_use]
pub fn normalize_tasks(payload: Option<&RawStudyPlanPayload>) -> Vec<StudyTask> {
    let Some(payload) = payload else {
        return Vec::new();
    };
    let direct = payload.tasks.as_ref();
    let via_json = payload.tasks_json.as_ref();

    if let Some(TaskField::List(tasks)) = direct {
        return tasks.clone();
    }
    if let Some(tasks) = encoded_tasks("tasks", direct) {
        return tasks;
    }
    if let Some(tasks) = encoded_tasks("tasksJson", via_json) {
        return tasks;
    }
    if let Some(TaskField::Wrapped(draft)) = direct {
        return draft.tasks.clone();
    }
    match via_json {
        Some(TaskField::List(tasks)) => tasks.clone(),
        Some(TaskField::Wrapped(draft)) => draft.tasks.clone(),
        _ => Vec::new(),
    }
}

/// Normalize a whole payload, keeping its metadata.
#[must_use]
pub fn normalize_plan(payload: RawStudyPlanPayload) -> StudyPlan {
    let tasks = normalize_tasks(Some(&payload));
    StudyPlan {
        id: payload.id,
        student_id: payload.student_id,
        week_start: payload.week_start,
        goals: payload.goals,
        created_at: payload.created_at,
        tasks,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Tasks(Vec<StudyTask>),
    Plan(RawStudyPlanPayload),
    Encoded(String),
}

/// Normalize a raw response body.
///
/// Accepts a plan object, a bare task list, or a JSON string encoding either
/// (one level deep). Anything else, including invalid JSON, is an empty plan.
#[must_use]
pub fn normalize_body(body: &str) -> StudyPlan {
    decode_body(body, true)
}

fn decode_body(body: &str, allow_encoded: bool) -> StudyPlan {
    match serde_json::from_str::<Body>(body) {
        Ok(Body::Tasks(tasks)) => StudyPlan {
            tasks,
            ..StudyPlan::default()
        },
        Ok(Body::Plan(payload)) => normalize_plan(payload),
        Ok(Body::Encoded(inner)) if allow_encoded => decode_body(&inner, false),
        Ok(Body::Encoded(_)) => StudyPlan::default(),
        Err(error) => {
            tracing::debug!(%error, "study plan body is not a recognized shape");
            StudyPlan::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_encoded_reports_invalid_json() {
        assert!(matches!(
            parse_encoded("tasks", "not json"),
            Err(ParseMismatch::InvalidJson(_))
        ));
    }

    #[test]
    fn parse_encoded_reports_unexpected_shape() {
        assert!(matches!(
            parse_encoded("tasks", r#"{"plan":[]}"#),
            Err(ParseMismatch::UnexpectedShape)
        ));
        assert!(matches!(
            parse_encoded("tasks", "\"[]\""),
            Err(ParseMismatch::UnexpectedShape)
        ));
    }

    #[test]
    fn parse_encoded_accepts_both_shapes() {
        let list = parse_encoded("tasks", r#"[{"day":"Thu","title":"Essay"}]"#).unwrap();
        let wrapped = parse_encoded("tasks", r#"{"tasks":[{"day":"Thu","title":"Essay"}]}"#).unwrap();
        assert_eq!(list, wrapped);
        assert_eq!(list, vec![StudyTask::new("Thu", "Essay", Vec::new())]);
    }
}
