//! Application use cases: ticket browsing, report generation, and user
//! administration over the remote API.

pub mod browser;
pub mod report;
pub mod source;
pub mod user_admin;

pub use browser::TicketBrowser;
pub use report::{ReportGenerator, ReportState};
pub use source::{TicketSource, UserDirectory};
pub use user_admin::UserAdmin;
