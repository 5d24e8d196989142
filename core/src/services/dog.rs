use std::sync::Arc;

use tracing::debug;

use crate::client::{check_status, decode};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{
    Dog, DogId, DogLitter, DogPayload, DogStatus, ExpensePayload, FinancialReport,
    LitterSummary, ParentRole, StatusUpdate,
};

/// Create, update and read dogs, their finances and their litters.
#[derive(Clone)]
pub struct DogService {
    transport: Arc<dyn Transport>,
}

impl DogService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, payload: &DogPayload) -> Result<Dog, ApiError> {
        debug!(name = %payload.name, sex = ?payload.sex, "creating dog");
        let response = self.transport.send(Self::build_create(payload)?).await?;
        Self::parse_create(response)
    }

    pub async fn update(&self, id: DogId, payload: &DogPayload) -> Result<Dog, ApiError> {
        debug!(id, "updating dog");
        let response = self.transport.send(Self::build_update(id, payload)?).await?;
        Self::parse_dog(response)
    }

    /// Explicit status change, e.g. moving a dog to breeding stock.
    pub async fn update_status(&self, id: DogId, status: DogStatus) -> Result<Dog, ApiError> {
        debug!(id, ?status, "updating dog status");
        let response = self.transport.send(Self::build_update_status(id, status)?).await?;
        Self::parse_dog(response)
    }

    pub async fn fetch_details(&self, id: DogId) -> Result<Dog, ApiError> {
        debug!(id, "fetching dog");
        let response = self.transport.send(Self::build_fetch_details(id)).await?;
        Self::parse_dog(response)
    }

    /// The report is returned exactly as the backend computed it.
    pub async fn fetch_financial_report(&self, id: DogId) -> Result<FinancialReport, ApiError> {
        debug!(id, "fetching financial report");
        let response = self.transport.send(Self::build_fetch_financial_report(id)).await?;
        Self::parse_financial_report(response)
    }

    /// Record an expense against a dog. The backend answers with an empty
    /// `201 Created`; read the expense back through the financial report.
    pub async fn add_expense(&self, id: DogId, payload: &ExpensePayload) -> Result<(), ApiError> {
        debug!(id, amount = %payload.amount, "adding expense");
        let response = self.transport.send(Self::build_add_expense(id, payload)?).await?;
        Self::parse_add_expense(response)
    }

    /// Litters where `id` is a parent, each labelled with the role the litter
    /// itself records for that dog.
    pub async fn list_litters(&self, id: DogId) -> Result<Vec<DogLitter>, ApiError> {
        debug!(id, "listing litters for dog");
        let response = self.transport.send(Self::build_list_litters(id)).await?;
        Self::parse_list_litters(id, response)
    }

    pub fn build_create(payload: &DogPayload) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Post, "/dogs", payload)
    }

    pub fn build_update(id: DogId, payload: &DogPayload) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Put, format!("/dogs/{id}"), payload)
    }

    pub fn build_update_status(id: DogId, status: DogStatus) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Patch, format!("/dogs/{id}"), &StatusUpdate { status })
    }

    pub fn build_fetch_details(id: DogId) -> HttpRequest {
        HttpRequest::get(format!("/dogs/{id}"))
    }

    pub fn build_fetch_financial_report(id: DogId) -> HttpRequest {
        HttpRequest::get(format!("/dogs/{id}/financial-report"))
    }

    pub fn build_add_expense(id: DogId, payload: &ExpensePayload) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Post, format!("/dogs/{id}/expenses"), payload)
    }

    pub fn build_list_litters(id: DogId) -> HttpRequest {
        HttpRequest::get(format!("/dogs/{id}/litters"))
    }

    pub fn parse_create(response: HttpResponse) -> Result<Dog, ApiError> {
        decode(response, &[201, 200])
    }

    pub fn parse_dog(response: HttpResponse) -> Result<Dog, ApiError> {
        decode(response, &[200])
    }

    pub fn parse_financial_report(response: HttpResponse) -> Result<FinancialReport, ApiError> {
        decode(response, &[200])
    }

    pub fn parse_add_expense(response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[201, 200, 204])
    }

    pub fn parse_list_litters(id: DogId, response: HttpResponse) -> Result<Vec<DogLitter>, ApiError> {
        let litters: Vec<LitterSummary> = decode(response, &[200])?;
        Ok(litters
            .into_iter()
            .map(|litter| {
                let role = ParentRole::detect(&litter, id);
                DogLitter { litter, role }
            })
            .collect())
    }
}
