use sio_core::StudyPlan;

use crate::{ApiError, CoachClient, http::check_response, require_non_blank};

impl CoachClient {
    /// Generate and persist a weekly plan for the signed-in student.
    ///
    /// The backend resolves the student from the bearer token. Whatever shape
    /// the response arrives in, the returned plan has a concrete task list
    /// (possibly empty).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `goal` is blank, the request fails, or the
    /// backend returns a non-success status.
    pub async fn generate_study_plan(&self, goal: &str) -> Result<StudyPlan, ApiError> {
        require_non_blank("goal", goal)?;

        let path = format!("/ai/study-plan?goal={}", urlencoding::encode(goal.trim()));
        let resp = check_response(self.get(&path).send().await?).await?;
        let body = resp.text().await?;

        let plan = sio_plan::normalize_body(&body);
        tracing::debug!(tasks = plan.tasks.len(), "study plan normalized");
        Ok(plan)
    }
}
