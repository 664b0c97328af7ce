//! Result type for authenticated fetches.

use tiket_core::TiketError;

/// Outcome of an authenticated API call.
///
/// A rejected token (HTTP 401/403) is not an error: it means the caller
/// must send the user back to login, and no error state should be
/// populated. Keeping that as its own variant lets the caller decide
/// navigation instead of the client redirecting as a side effect.
#[derive(Debug, Clone)]
pub enum FetchOutcome<T> {
    /// The call succeeded.
    Success(T),
    /// The API rejected the token; the user must authenticate again.
    AuthRequired,
    /// The call failed for any other reason.
    Failed(TiketError),
}

impl<T> FetchOutcome<T> {
    /// Maps the success value, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            Self::Success(value) => FetchOutcome::Success(f(value)),
            Self::AuthRequired => FetchOutcome::AuthRequired,
            Self::Failed(err) => FetchOutcome::Failed(err),
        }
    }

    /// Returns the success value, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<T> From<TiketError> for FetchOutcome<T> {
    fn from(err: TiketError) -> Self {
        Self::Failed(err)
    }
}
