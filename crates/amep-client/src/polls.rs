//! Live-poll endpoints.

use amep_core::entities::{NewPoll, NewPollAnswer, Poll, PollAnswer, PollResults};

use crate::{ServiceClient, error::ServiceError, http::check_response};

impl ServiceClient {
    /// Create a live poll and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails or the service
    /// returns a non-success status.
    pub async fn create_poll(&self, poll: &NewPoll) -> Result<Poll, ServiceError> {
        let url = format!("{}/polls/create", self.base_url);
        let resp = check_response(self.http.post(&url).json(poll).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Submit a student's answer to an active poll.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails or the service
    /// returns a non-success status, including `409` when the student has
    /// already answered.
    pub async fn respond_to_poll(
        &self,
        poll_id: &str,
        answer: &NewPollAnswer,
    ) -> Result<PollAnswer, ServiceError> {
        let url = format!(
            "{}/polls/{}/respond",
            self.base_url,
            urlencoding::encode(poll_id)
        );
        let resp = check_response(self.http.post(&url).json(answer).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Fetch aggregated results for a poll.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails or the service
    /// returns a non-success status.
    pub async fn poll_results(&self, poll_id: &str) -> Result<PollResults, ServiceError> {
        let url = format!("{}/polls/{}", self.base_url, urlencoding::encode(poll_id));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}
