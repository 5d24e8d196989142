//! Entry point tying a transport to the kennel services.
//!
//! # Design
//! `KennelClient` holds only a shared `Transport`. Each accessor hands out a
//! service bound to that transport; services are cheap to create and carry no
//! state of their own. Nothing is cached between calls, so every read goes to
//! the backend.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{error_message, ApiError};
use crate::http::{HttpResponse, Transport};
use crate::services::{DashboardService, DogService, GuardianService, LitterService, SaleService};
use crate::transport::ReqwestTransport;

#[derive(Clone)]
pub struct KennelClient {
    transport: Arc<dyn Transport>,
}

impl KennelClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a client backed by `ReqwestTransport`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(ReqwestTransport::new(config)?)))
    }

    pub fn dogs(&self) -> DogService {
        DogService::new(Arc::clone(&self.transport))
    }

    pub fn litters(&self) -> LitterService {
        LitterService::new(Arc::clone(&self.transport))
    }

    pub fn guardians(&self) -> GuardianService {
        GuardianService::new(Arc::clone(&self.transport))
    }

    pub fn sales(&self) -> SaleService {
        SaleService::new(Arc::clone(&self.transport))
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(Arc::clone(&self.transport))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub(crate) fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound {
            message: error_message(&response.body),
        }),
        400 | 422 => Err(ApiError::Validation {
            status: response.status,
            message: error_message(&response.body),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Check the status, then deserialize the body.
pub(crate) fn decode<T: DeserializeOwned>(
    response: HttpResponse,
    expected: &[u16],
) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
