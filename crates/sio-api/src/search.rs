use sio_core::responses::{SearchResponse, UpsertEmbeddingRequest};

use crate::{ApiError, CoachClient, http::check_response, require_non_blank};

impl CoachClient {
    /// Nearest-neighbour search over the signed-in student's report chunks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `query` is blank, `k` is zero, the request
    /// fails, or the response cannot be parsed.
    pub async fn search(&self, query: &str, k: u32) -> Result<SearchResponse, ApiError> {
        require_non_blank("query", query)?;
        if k == 0 {
            return Err(ApiError::InvalidInput("k must be at least 1".into()));
        }

        let path = format!("/ai/search?query={}&k={k}", urlencoding::encode(query.trim()));
        let resp = check_response(self.get(&path).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Store (or replace) the embedding of one of the student's reports.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `content` is blank, the request fails, or the
    /// report does not belong to the signed-in student.
    pub async fn upsert_report_embedding(
        &self,
        report_id: i64,
        body: &UpsertEmbeddingRequest,
    ) -> Result<(), ApiError> {
        require_non_blank("content", &body.content)?;

        let path = format!("/ai/reports/{report_id}/embed");
        check_response(self.post(&path).json(body).send().await?).await?;
        Ok(())
    }
}
