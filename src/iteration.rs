use http::{Method, StatusCode};
use url::Url;

use crate::payload::{FadeAction, OnProperty, Payload};
use crate::test_request::{CheckResult, TestRequest};

/// Number of calls issued by every iteration.
pub const CALLS_PER_ITERATION: usize = 6;

#[derive(Debug, Clone)]
pub struct IterationReport {
    pub iteration: u64,
    pub checks: Vec<CheckResult>,
}

impl IterationReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }
}

/// The calls of iteration `iteration`, in the order they are issued.
pub fn plan(iteration: u64) -> [TestRequest; CALLS_PER_ITERATION] {
    [
        TestRequest::get("get thing description status was 200", ""),
        TestRequest::get("get properties status was 200", "/properties"),
        TestRequest::get("get actions status was 200", "/actions"),
        TestRequest::get("get events status was 200", "/events"),
        TestRequest::with_json(
            "put on property status was 200",
            Method::PUT,
            "/properties/on",
            Payload::On(OnProperty::for_iteration(iteration)),
            StatusCode::OK,
        ),
        TestRequest::with_json(
            "post fade actions status was 201",
            Method::POST,
            "/actions",
            Payload::Fade(FadeAction::for_iteration(iteration)),
            StatusCode::CREATED,
        ),
    ]
}

/// Runs one iteration against `base`.
///
/// Calls are issued one after another and every call is made whatever the
/// previous ones returned, so the report always holds one check per call.
pub async fn run_iteration(base: &Url, iteration: u64) -> IterationReport {
    let mut checks = Vec::with_capacity(CALLS_PER_ITERATION);
    for request in plan(iteration) {
        checks.push(request.test(base).await);
    }

    IterationReport { iteration, checks }
}
