//! HTTP API module for the salary engine.
//!
//! This module provides the REST API endpoints for computing salary
//! reports and individual entry totals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntryKindRequest, EntryRequest, EntryTotalRequest, ExpenseRequest, ReportRequest};
pub use response::{ApiError, EntryTotalResponse};
pub use state::AppState;
