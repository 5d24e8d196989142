use std::sync::Arc;

use tracing::debug;

use crate::client::decode;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{
    CreatedLitter, Dog, LitterDetails, LitterId, LitterPayload, LitterSummary, Page, PageRequest,
    Sex,
};

/// Litter workflow: pick parents, register a litter with its puppies, browse.
///
/// Parent sex is never checked here. The mother and father selectors are fed
/// by `list_candidate_parents` with the matching sex, so only correctly sexed
/// dogs are offered; the backend rejects anything else on `create`.
#[derive(Clone)]
pub struct LitterService {
    transport: Arc<dyn Transport>,
}

impl LitterService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// One page of dogs of `sex`, as filtered by the backend.
    pub async fn list_candidate_parents(
        &self,
        sex: Sex,
        page: PageRequest,
    ) -> Result<Page<Dog>, ApiError> {
        debug!(?sex, page = page.page, size = page.size, "listing candidate parents");
        let response = self
            .transport
            .send(Self::build_list_candidate_parents(sex, page))
            .await?;
        Self::parse_list_candidate_parents(response)
    }

    /// Register a litter. An empty offspring list is sent as-is.
    pub async fn create(&self, payload: &LitterPayload) -> Result<CreatedLitter, ApiError> {
        debug!(
            mother = ?payload.mother_id,
            father = ?payload.father_id,
            offspring = payload.offspring.len(),
            "creating litter"
        );
        let response = self.transport.send(Self::build_create(payload)?).await?;
        Self::parse_create(response)
    }

    pub async fn list_paginated(&self, page: PageRequest) -> Result<Page<LitterSummary>, ApiError> {
        debug!(page = page.page, size = page.size, "listing litters");
        let response = self.transport.send(Self::build_list_paginated(page)).await?;
        Self::parse_list_paginated(response)
    }

    pub async fn fetch_details(&self, id: LitterId) -> Result<LitterDetails, ApiError> {
        debug!(id, "fetching litter");
        let response = self.transport.send(Self::build_fetch_details(id)).await?;
        Self::parse_fetch_details(response)
    }

    pub fn build_list_candidate_parents(sex: Sex, page: PageRequest) -> HttpRequest {
        HttpRequest::get("/dogs")
            .with_query("sexo", sex.as_str())
            .with_query("page", page.page)
            .with_query("size", page.size)
    }

    pub fn build_create(payload: &LitterPayload) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Post, "/litters", payload)
    }

    pub fn build_list_paginated(page: PageRequest) -> HttpRequest {
        HttpRequest::get("/litters")
            .with_query("page", page.page)
            .with_query("size", page.size)
    }

    pub fn build_fetch_details(id: LitterId) -> HttpRequest {
        HttpRequest::get(format!("/litters/{id}"))
    }

    pub fn parse_list_candidate_parents(response: HttpResponse) -> Result<Page<Dog>, ApiError> {
        decode(response, &[200])
    }

    pub fn parse_create(response: HttpResponse) -> Result<CreatedLitter, ApiError> {
        decode(response, &[201, 200])
    }

    pub fn parse_list_paginated(response: HttpResponse) -> Result<Page<LitterSummary>, ApiError> {
        decode(response, &[200])
    }

    pub fn parse_fetch_details(response: HttpResponse) -> Result<LitterDetails, ApiError> {
        decode(response, &[200])
    }
}
