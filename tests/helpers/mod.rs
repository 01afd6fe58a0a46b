//! Test helpers: an app wired to a mock Web3Forms relay

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use folio::{
    AppState,
    config::{
        Config, ContactConfig, ObservabilityConfig, RelayConfig, ServerConfig, SiteConfig,
    },
    content::Portfolio,
    visitor::VISITOR_COOKIE,
};
use folio_contact::Web3FormsRelay;
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::MockServer;

pub const ACCESS_KEY: &str = "52bb675a-test-key";

pub struct TestApp {
    pub router: Router,
    pub relay: MockServer,
    pub state: AppState,
}

pub fn test_config(endpoint: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        relay: RelayConfig {
            endpoint,
            access_key: ACCESS_KEY.to_string(),
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
        site: SiteConfig::default(),
    }
}

/// Set up the router with the embedded portfolio and a fresh mock relay
pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let relay = MockServer::start().await;
    let config = test_config(format!("{}/submit", relay.uri()));

    let web3forms = Web3FormsRelay::new(config.relay.endpoint.to_owned());
    let state = AppState::new(&config, Portfolio::embedded()?, Arc::new(web3forms));

    Ok(TestApp {
        router: folio::router(state.clone()),
        relay,
        state,
    })
}

impl TestApp {
    pub async fn get(&self, path: &str, visitor: Option<&str>) -> anyhow::Result<Response<Body>> {
        let mut req = Request::builder().uri(path);
        if let Some(visitor) = visitor {
            req = req.header(header::COOKIE, format!("{VISITOR_COOKIE}={visitor}"));
        }

        Ok(self.router.clone().oneshot(req.body(Body::empty())?).await?)
    }

    pub async fn post_contact(
        &self,
        fields: &[(&str, &str)],
        visitor: Option<&str>,
    ) -> anyhow::Result<Response<Body>> {
        let mut req = Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(visitor) = visitor {
            req = req.header(header::COOKIE, format!("{VISITOR_COOKIE}={visitor}"));
        }

        let body = serde_urlencoded::to_string(fields)?;
        Ok(self.router.clone().oneshot(req.body(Body::from(body))?).await?)
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Visitor id issued through `Set-Cookie`, if any
pub fn issued_visitor(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| {
            v.split(';')
                .next()
                .and_then(|pair| pair.strip_prefix(&format!("{VISITOR_COOKIE}=")))
                .map(str::to_owned)
        })
}

pub fn filled() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "A"),
        ("email", "a@b.com"),
        ("subject", "Hi"),
        ("message", "Test"),
    ]
}
