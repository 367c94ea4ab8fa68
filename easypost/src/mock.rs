//! In-process stand-in for the remote API.
//!
//! [`MockTransport`] answers requests from an ordered rule list instead of the
//! network. Rules are tried in registration order and the first one whose
//! method matches and whose pattern is found anywhere in the full request URL
//! (query string included) wins. Overlapping patterns therefore resolve by
//! order, not specificity.
//!
//! A request that matches no rule is a broken test setup and panics with the
//! method and URL; it is never passed through.
//!
//! ```no_run
//! use std::sync::Arc;
//! use easypost::mock::MockTransport;
//! use easypost::{ClientConfig, EasyPostClient};
//! use reqwest::Method;
//!
//! let mock = Arc::new(
//!     MockTransport::new().on(Method::GET, r"v2/payment_methods$", 200, r#"{"id":"summary_123"}"#),
//! );
//! let client = EasyPostClient::with_transport(ClientConfig::new("test"), mock.clone()).unwrap();
//! ```

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use regex::Regex;
use reqwest::Method;

use crate::error::Result;
use crate::rest::transport::{Transport, TransportRequest, TransportResponse};

/// Which requests a rule applies to.
#[derive(Debug, Clone)]
pub struct MockRequestMatchRule {
    pub method: Method,
    pub url_pattern: Regex,
}

impl MockRequestMatchRule {
    fn matches(&self, request: &TransportRequest) -> bool {
        self.method == request.method && self.url_pattern.is_match(request.url.as_str())
    }
}

/// Canned response returned verbatim for a matching request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub match_rule: MockRequestMatchRule,
    pub response: MockResponse,
}

impl MockRequest {
    /// # Errors
    ///
    /// Returns the regex error if `url_pattern` does not compile.
    pub fn new(
        method: Method,
        url_pattern: &str,
        status: u16,
        body: impl Into<String>,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            match_rule: MockRequestMatchRule {
                method,
                url_pattern: Regex::new(url_pattern)?,
            },
            response: MockResponse {
                status,
                body: body.into(),
            },
        })
    }
}

/// Rule-driven [`Transport`] that records everything it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    rules: Vec<MockRequest>,
    received: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: Vec<MockRequest>) -> Self {
        Self {
            rules,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Append a rule.
    ///
    /// # Panics
    ///
    /// Panics if `url_pattern` is not a valid regex.
    pub fn on(mut self, method: Method, url_pattern: &str, status: u16, body: &str) -> Self {
        let rule = MockRequest::new(method, url_pattern, status, body)
            .unwrap_or_else(|e| panic!("invalid mock URL pattern {url_pattern:?}: {e}"));
        self.rules.push(rule);
        self
    }

    /// Every request seen so far, in arrival order.
    pub fn received(&self) -> Vec<TransportRequest> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, request: &TransportRequest) -> Option<&MockResponse> {
        self.rules
            .iter()
            .find(|r| r.match_rule.matches(request))
            .map(|r| &r.response)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let response = self.respond(&request).cloned();
        let method = request.method.clone();
        let url = request.url.to_string();
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match response {
            Some(r) => Ok(TransportResponse {
                status: r.status,
                body: r.body,
            }),
            None => panic!("no mock rule matches {method} {url}"),
        }
    }
}
