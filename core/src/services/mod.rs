//! Kennel services.
//!
//! Every operation is split the same way: a pure `build_*` that shapes the
//! request, a pure `parse_*` that interprets the response, and an async method
//! that sends exactly one request between the two. Failures come back to the
//! caller as-is; nothing is retried or cached.

mod dashboard;
mod dog;
mod guardian;
mod litter;
mod sale;

pub use dashboard::DashboardService;
pub use dog::DogService;
pub use guardian::GuardianService;
pub use litter::LitterService;
pub use sale::SaleService;
