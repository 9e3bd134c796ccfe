//! Admin-only embedding maintenance.

use sio_core::responses::{PurgeReindexResponse, ReindexResponse};

use crate::{ApiError, CoachClient, http::check_response};

impl CoachClient {
    /// Rebuild embeddings for every report of a student, keeping existing rows.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `student_id` is not positive, the request
    /// fails, or the caller is not an admin.
    pub async fn reindex_student(&self, student_id: i64) -> Result<ReindexResponse, ApiError> {
        check_student_id(student_id)?;
        let path = format!("/admin/ai/reindex?studentId={student_id}");
        let resp = check_response(self.post(&path).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Delete all embeddings of a student, then rebuild them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `student_id` is not positive, the request
    /// fails, or the caller is not an admin.
    pub async fn purge_and_reindex_student(
        &self,
        student_id: i64,
    ) -> Result<PurgeReindexResponse, ApiError> {
        check_student_id(student_id)?;
        let path = format!("/admin/ai/purge-and-reindex?studentId={student_id}");
        let resp = check_response(self.post(&path).send().await?).await?;
        Ok(resp.json().await?)
    }
}

fn check_student_id(student_id: i64) -> Result<(), ApiError> {
    if student_id < 1 {
        return Err(ApiError::InvalidInput(format!(
            "studentId must be at least 1, got {student_id}"
        )));
    }
    Ok(())
}
