use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::instrument;

use crate::application::ports::{EtlClient, EtlClientError, RawStatusResponse};
use crate::domain::JobId;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Reqwest-backed [`EtlClient`]. One pooled client, constructed once at
/// startup and bound to the worker's base address with a fixed request
/// timeout.
pub struct HttpEtlClient {
    client: Client,
    base_url: String,
}

impl HttpEtlClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn map_transport_error(e: reqwest::Error) -> EtlClientError {
        if e.is_timeout() {
            EtlClientError::Timeout
        } else {
            EtlClientError::Transport(e.to_string())
        }
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    #[serde(rename = "jobId")]
    job_id: String,
    filename: &'a str,
    #[serde(rename = "studyId", skip_serializing_if = "Option::is_none")]
    study_id: Option<&'a str>,
}

#[async_trait]
impl EtlClient for HttpEtlClient {
    #[instrument(skip(self), fields(job_id = %job_id))]
    async fn submit(
        &self,
        job_id: JobId,
        filename: &str,
        study_id: Option<&str>,
    ) -> Result<(), EtlClientError> {
        let body = SubmitRequest {
            job_id: job_id.to_string(),
            filename,
            study_id,
        };

        let response = self
            .client
            .post(format!("{}/jobs", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(EtlClientError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_status(&self, job_id: &str) -> Result<RawStatusResponse, EtlClientError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}/status", self.base_url, job_id))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(Self::map_transport_error)?;

        Ok(RawStatusResponse { status, body })
    }
}
