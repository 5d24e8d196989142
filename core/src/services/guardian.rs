use std::sync::Arc;

use tracing::debug;

use crate::client::decode;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::Guardian;

/// Read-only access to guardians, for populating selection lists.
#[derive(Clone)]
pub struct GuardianService {
    transport: Arc<dyn Transport>,
}

impl GuardianService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list_all(&self) -> Result<Vec<Guardian>, ApiError> {
        debug!("listing guardians");
        let response = self.transport.send(Self::build_list_all()).await?;
        Self::parse_list_all(response)
    }

    pub fn build_list_all() -> HttpRequest {
        HttpRequest::get("/guardians/all")
    }

    pub fn parse_list_all(response: HttpResponse) -> Result<Vec<Guardian>, ApiError> {
        decode(response, &[200])
    }
}
