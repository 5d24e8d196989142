use std::sync::Arc;

use tracing::debug;

use crate::client::decode;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{DogId, Sale, SalePayload};

/// Records dog sales.
///
/// A successful sale marks the dog SOLD and moves it to the new guardian on
/// the backend. Callers see that only by fetching the dog again.
#[derive(Clone)]
pub struct SaleService {
    transport: Arc<dyn Transport>,
}

impl SaleService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn sell(&self, dog_id: DogId, payload: &SalePayload) -> Result<Sale, ApiError> {
        debug!(dog_id, guardian = payload.new_guardian_id, amount = %payload.amount, "selling dog");
        let response = self.transport.send(Self::build_sell(dog_id, payload)?).await?;
        Self::parse_sell(response)
    }

    pub fn build_sell(dog_id: DogId, payload: &SalePayload) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Post, format!("/dogs/{dog_id}/sell"), payload)
    }

    pub fn parse_sell(response: HttpResponse) -> Result<Sale, ApiError> {
        decode(response, &[200, 201])
    }
}
