use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use sio_core::{StudyPlanDraft, StudyTask};

/// One of the shapes a `tasks` / `tasksJson` field has been seen in.
///
/// Variants are tried in declaration order when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskField {
    /// Already a task sequence.
    List(Vec<StudyTask>),
    /// A string holding JSON: either a task sequence or a `{ tasks }` object.
    Encoded(String),
    /// An inline `{ tasks: [...] }` object.
    Wrapped(StudyPlanDraft),
    /// Anything else.
    Unrecognized(Value),
}

/// Untrusted study-plan body as returned by `GET /ai/study-plan`.
///
/// Metadata fields with an unexpected JSON type read as `None` rather than
/// failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStudyPlanPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, alias = "student_id", deserialize_with = "lenient")]
    pub student_id: Option<i64>,
    #[serde(default, alias = "week_start", deserialize_with = "lenient")]
    pub week_start: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub goals: Option<String>,
    #[serde(default, alias = "created_at", deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub tasks: Option<TaskField>,
    #[serde(default, alias = "tasks_json")]
    pub tasks_json: Option<TaskField>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawStudyPlanPayload {
    #[must_use]
    pub fn with_tasks(tasks: TaskField) -> Self {
        Self {
            tasks: Some(tasks),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tasks_json(tasks_json: TaskField) -> Self {
        Self {
            tasks_json: Some(tasks_json),
            ..Self::default()
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
