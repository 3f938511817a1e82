use async_trait::async_trait;

use crate::domain::{FormValues, SubmissionResult};

/// Seam to the remote credential and registration endpoints.
///
/// Implementations perform exactly one network call per invocation, no
/// retries, and normalize every outcome into a [`SubmissionResult`];
/// transport failures included. A submission cycle never surfaces a raw
/// error to the caller.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn sign_in(&self, values: &FormValues) -> SubmissionResult;
    async fn register(&self, values: &FormValues) -> SubmissionResult;
}

/// Scripted in-memory implementation for tests and doc examples
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Returns a fixed result for every call and counts invocations.
    pub struct MockAuthApi {
        response: SubmissionResult,
        calls: Mutex<usize>,
    }

    impl MockAuthApi {
        pub fn returning(response: SubmissionResult) -> Self {
            Self {
                response,
                calls: Mutex::new(0),
            }
        }

        /// Number of network calls the pipeline would have made.
        pub fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }

        fn record(&self) -> SubmissionResult {
            *self.calls.lock().unwrap() += 1;
            self.response.clone()
        }
    }

    #[async_trait]
    impl AuthApi for MockAuthApi {
        async fn sign_in(&self, _values: &FormValues) -> SubmissionResult {
            self.record()
        }

        async fn register(&self, _values: &FormValues) -> SubmissionResult {
            self.record()
        }
    }
}
