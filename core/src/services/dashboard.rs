use std::sync::Arc;

use tracing::debug;

use crate::client::decode;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{DashboardStats, FinanceSummary};

/// Kennel-wide figures computed by the backend.
#[derive(Clone)]
pub struct DashboardService {
    transport: Arc<dyn Transport>,
}

impl DashboardService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Revenue, expenses and profit over the last
    /// [`SUMMARY_WINDOW_DAYS`](crate::finance::SUMMARY_WINDOW_DAYS) days.
    pub async fn fetch_finance_summary(&self) -> Result<FinanceSummary, ApiError> {
        debug!("fetching finance summary");
        let response = self.transport.send(Self::build_fetch_finance_summary()).await?;
        Self::parse_fetch_finance_summary(response)
    }

    pub async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        debug!("fetching dashboard stats");
        let response = self.transport.send(Self::build_fetch_stats()).await?;
        Self::parse_fetch_stats(response)
    }

    pub fn build_fetch_finance_summary() -> HttpRequest {
        HttpRequest::get("/dashboard/finance-30-days")
    }

    pub fn build_fetch_stats() -> HttpRequest {
        HttpRequest::get("/dashboard/stats")
    }

    pub fn parse_fetch_finance_summary(response: HttpResponse) -> Result<FinanceSummary, ApiError> {
        decode(response, &[200])
    }

    pub fn parse_fetch_stats(response: HttpResponse) -> Result<DashboardStats, ApiError> {
        decode(response, &[200])
    }
}
