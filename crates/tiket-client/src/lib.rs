//! HTTP client for the remote ticketing REST API.
//!
//! The API is an external collaborator: this crate only attaches bearer
//! credentials, normalizes the response shapes it is known to produce, and
//! maps failures into the shared error taxonomy. Navigation decisions
//! (e.g., "go log in again") belong to the caller via [`FetchOutcome`].

pub mod api;
pub mod normalize;
pub mod outcome;

pub use api::TicketApi;
pub use outcome::FetchOutcome;
