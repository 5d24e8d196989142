//! Client core for the kennel management API.
//!
//! # Overview
//! Typed access to dogs, guardians, litters and sales held by a REST backend,
//! plus the financial-report aggregation rules. The backend is the only
//! source of truth: every call is a single round-trip, nothing is cached, and
//! business-rule failures are read off the response rather than checked here.
//!
//! # Design
//! - `KennelClient` wires one shared `Transport` into the services.
//! - Each service operation pairs a pure `build_*` (request) with a pure
//!   `parse_*` (response), so the I/O boundary is explicit and testable.
//! - `ClientConfig` is resolved once at start-up and handed to the transport.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod finance;
pub mod http;
pub mod services;
pub mod transport;
pub mod types;

pub use client::KennelClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use finance::{window_start, ReportMismatch, SUMMARY_WINDOW_DAYS};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use services::{DashboardService, DogService, GuardianService, LitterService, SaleService};
pub use transport::ReqwestTransport;
pub use types::{
    CreatedLitter, DashboardStats, Dog, DogId, DogLitter, DogPayload, DogStatus, DogSummary,
    Expense, ExpensePayload, FinanceSummary, FinancialReport, Guardian, GuardianId,
    LitterDetails, LitterId, LitterPayload, LitterSummary, Offspring, Page, PageRequest,
    ParentRole, Sale, SalePayload, SaleRecord, Sex, StatusUpdate,
};
