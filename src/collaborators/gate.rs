use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CollaboratorError;

/// Marks one request started through a [`RequestGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Supersede-on-new-request: only the most recently started request's result
/// is of interest.
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: AtomicU64,
}

impl RequestGate {
    /// Creates a new gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding every earlier one.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns `true` if no request has started since `ticket`.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Starts `request` now and returns a future that discards its result if a
    /// newer request was started before it completes.
    ///
    /// The ticket is taken when `run` is called, not when the returned future
    /// is first polled.
    ///
    /// # Errors
    ///
    /// The future yields [`CollaboratorError::Superseded`] for a stale result,
    /// otherwise the request's own error.
    pub fn run<'g, T, F>(
        &'g self,
        request: F,
    ) -> impl Future<Output = Result<T, CollaboratorError>> + 'g
    where
        F: Future<Output = Result<T, CollaboratorError>> + 'g,
        T: 'g,
    {
        let ticket = self.begin();
        async move {
            let outcome = request.await;
            if !self.is_current(ticket) {
                return Err(CollaboratorError::Superseded);
            }
            outcome
        }
    }
}
