//! Per-view request generations.
//!
//! Every fetch started from a view takes a token; when the response arrives
//! it is applied only if no newer fetch was started from the same view in
//! the meantime. Responses that arrive after the view is gone are dropped too.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default, Clone)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; all earlier tokens become stale.
    pub fn begin(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == token.0
    }
}

/// Begin a request tracked by a stored generation.
///
/// Returns `None` once the owning view has been disposed.
pub fn begin_request(guard: StoredValue<RequestGeneration>) -> Option<RequestToken> {
    guard.try_update_value(|g| g.begin())
}

/// Whether `token` still belongs to the latest request of `guard`.
pub fn is_current(guard: StoredValue<RequestGeneration>, token: RequestToken) -> bool {
    let current = guard.try_with_value(|g| g.is_current(token)).unwrap_or(false);
    if !current {
        log::debug!("dropping stale response for request {:?}", token);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let mut generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_slow_response_cannot_overwrite_newer_one() {
        // list fetch A starts, then B starts and finishes first; A must be dropped
        let mut generation = RequestGeneration::new();
        let mut applied = Vec::new();

        let a = generation.begin();
        let b = generation.begin();
        for (token, label) in [(b, "b"), (a, "a")] {
            if generation.is_current(token) {
                applied.push(label);
            }
        }
        assert_eq!(applied, vec!["b"]);
    }
}
