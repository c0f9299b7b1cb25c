//! Classroom listing endpoint.

use amep_core::entities::Classroom;

use crate::{ServiceClient, error::ServiceError, http::check_response};

impl ServiceClient {
    /// List the classrooms owned by `teacher_id`.
    ///
    /// The endpoint returns a bare array, not an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails or the service
    /// returns a non-success status.
    pub async fn fetch_classrooms(&self, teacher_id: &str) -> Result<Vec<Classroom>, ServiceError> {
        let url = format!(
            "{}/classrooms/teacher/{}",
            self.base_url,
            urlencoding::encode(teacher_id)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}
