//! # GhostTrack API client
//!
//! [`ApiClient`] binds a resolved [`EndpointConfig`] to an [`HttpClient`] and
//! exposes one method per API operation. The `submit_*` / `refresh_my_ip`
//! methods drive a view's [`QueryView`] through a whole submit: validation,
//! pending, then result or error. They return `false` when a newer submit
//! superseded this one and its response was dropped.

use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoint::{ApiEndpoints, EndpointConfig};
use crate::error::{ApiError, Result};
use crate::http::{HttpClient, HttpResponse, ReqwestHttpClient};
use crate::models::{
    Health, IpLookup, MyIp, PhoneLookup, TrackIpRequest, TrackPhoneRequest, TrackUsernameRequest,
    UsernameLookup,
};
use crate::query::{QueryKind, QueryView, ViewCell};

pub struct ApiClient<C = ReqwestHttpClient> {
    config: EndpointConfig,
    endpoints: ApiEndpoints,
    http: Rc<C>,
}

impl<C> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            endpoints: self.endpoints.clone(),
            http: Rc::clone(&self.http),
        }
    }
}

impl ApiClient<ReqwestHttpClient> {
    pub fn new(config: EndpointConfig) -> Self {
        Self::with_http(config, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> ApiClient<C> {
    pub fn with_http(config: EndpointConfig, http: C) -> Self {
        let endpoints = config.endpoints();
        Self {
            config,
            endpoints,
            http: Rc::new(http),
        }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub async fn track_ip(&self, ip_address: &str) -> Result<IpLookup> {
        let body = TrackIpRequest {
            ip_address: ip_address.to_string(),
        };
        self.post(&self.endpoints.track_ip, &body).await
    }

    pub async fn track_phone(&self, phone_number: &str) -> Result<PhoneLookup> {
        let body = TrackPhoneRequest {
            phone_number: phone_number.to_string(),
        };
        self.post(&self.endpoints.track_phone, &body).await
    }

    pub async fn track_username(&self, username: &str) -> Result<UsernameLookup> {
        let body = TrackUsernameRequest {
            username: username.to_string(),
        };
        self.post(&self.endpoints.track_username, &body).await
    }

    pub async fn my_ip(&self) -> Result<MyIp> {
        let response = self.http.get(&self.endpoints.my_ip).await?;
        decode(response)
    }

    pub async fn health(&self) -> Result<Health> {
        let response = self.http.get(&self.endpoints.health).await?;
        decode(response)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.http.post_json(url, &body).await?;
        decode(response)
    }

    pub async fn submit_ip(
        &self,
        view: &mut impl ViewCell<QueryView<IpLookup>>,
        input: &str,
    ) -> bool {
        run_submit(view, input, |ip| async move { self.track_ip(&ip).await }).await
    }

    pub async fn submit_phone(
        &self,
        view: &mut impl ViewCell<QueryView<PhoneLookup>>,
        input: &str,
    ) -> bool {
        run_submit(view, input, |phone| async move { self.track_phone(&phone).await }).await
    }

    pub async fn submit_username(
        &self,
        view: &mut impl ViewCell<QueryView<UsernameLookup>>,
        input: &str,
    ) -> bool {
        run_submit(view, input, |name| async move { self.track_username(&name).await }).await
    }

    /// Fetch the caller's address, then chain an IP detail lookup for it.
    /// Returns `false` if a newer refresh took over while this one was in flight.
    pub async fn refresh_my_ip(&self, view: &mut impl ViewCell<MyIpView>) -> bool {
        let ticket = view.update(|v| {
            v.details.reset();
            v.address.begin_without_input()
        });

        let outcome = self.my_ip().await;
        let chained = view.update(|v| {
            let ip = outcome.as_ref().ok().and_then(MyIp::ip);
            if !v.address.finish(ticket, outcome) {
                return None;
            }
            Some(ip.and_then(|ip| v.details.begin(&ip)))
        });

        match chained {
            None => false,
            Some(None) => true,
            Some(Some((ticket, ip))) => {
                tracing::debug!("chaining detail lookup for {ip}");
                let outcome = self.track_ip(&ip).await;
                view.update(|v| v.details.finish(ticket, outcome))
            }
        }
    }
}

/// A blank input still counts as applied: the view now shows the validation error.
async fn run_submit<T, F, Fut>(
    view: &mut impl ViewCell<QueryView<T>>,
    input: &str,
    call: F,
) -> bool
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let Some((ticket, input)) = view.update(|v| v.begin(input)) else {
        return true;
    };
    let outcome = call(input).await;
    view.update(|v| v.finish(ticket, outcome))
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// State of the My IP page: the resolved address and its chained details.
#[derive(Debug, Clone, PartialEq)]
pub struct MyIpView {
    pub address: QueryView<MyIp>,
    pub details: QueryView<IpLookup>,
}

impl Default for MyIpView {
    fn default() -> Self {
        Self {
            address: QueryView::new(QueryKind::MyIp),
            details: QueryView::new(QueryKind::IpDetail),
        }
    }
}

impl ViewCell<MyIpView> for MyIpView {
    fn update<R>(&mut self, f: impl FnOnce(&mut MyIpView) -> R) -> R {
        f(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{resolve, PageLocation};
    use crate::http::MockHttpClient;
    use crate::query::QueryState;
    use serde_json::json;

    fn response(status: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    fn client(mock: MockHttpClient) -> ApiClient<MockHttpClient> {
        let config = resolve(&PageLocation::new("localhost", "8192"), false);
        ApiClient::with_http(config, mock)
    }

    #[tokio::test]
    async fn blank_input_sends_nothing() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().times(0);
        mock.expect_get().times(0);
        let api = client(mock);

        let mut ip = QueryView::new(QueryKind::Ip);
        assert!(api.submit_ip(&mut ip, "   ").await);
        assert_eq!(ip.state().error(), Some("Please enter an IP address"));

        let mut phone = QueryView::new(QueryKind::Phone);
        api.submit_phone(&mut phone, "").await;
        assert_eq!(phone.state().error(), Some("Please enter a phone number"));

        let mut username = QueryView::new(QueryKind::Username);
        api.submit_username(&mut username, "\t").await;
        assert_eq!(username.state().error(), Some("Please enter a username"));
    }

    #[tokio::test]
    async fn ip_lookup_posts_trimmed_address() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .withf(|url, body| {
                url.ends_with("localhost:8088/api/track-ip") && body["ip_address"] == "8.8.8.8"
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(response(
                        200,
                        json!({
                            "ip": "8.8.8.8",
                            "country": "US",
                            "city": "Mountain View",
                            "connection": { "isp": "Google" }
                        }),
                    ))
                })
            });
        let api = client(mock);

        let mut view = QueryView::new(QueryKind::Ip);
        assert!(api.submit_ip(&mut view, " 8.8.8.8 ").await);

        let rows = view.state().result().expect("loaded").summary();
        let values: Vec<&str> = rows.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, ["8.8.8.8", "US", "Mountain View", "Google"]);
    }

    #[tokio::test]
    async fn error_detail_is_shown() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .returning(|_, _| Box::pin(async { Ok(response(400, json!({ "detail": "invalid ip" }))) }));
        let api = client(mock);

        let mut view = QueryView::new(QueryKind::Ip);
        api.submit_ip(&mut view, "999.1.1.1").await;
        assert_eq!(view.state(), &QueryState::Failed("invalid ip".into()));
    }

    #[tokio::test]
    async fn error_without_detail_uses_view_fallback() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .returning(|_, _| Box::pin(async { Ok(response(404, json!({ "message": "nope" }))) }));
        let api = client(mock);

        let mut phone = QueryView::new(QueryKind::Phone);
        api.submit_phone(&mut phone, "+1").await;
        assert_eq!(
            phone.state().error(),
            Some("Query failed, please check phone number format")
        );

        let mut username = QueryView::new(QueryKind::Username);
        api.submit_username(&mut username, "jdoe").await;
        assert_eq!(
            username.state().error(),
            Some("Search failed, please check username format")
        );
    }

    #[tokio::test]
    async fn transport_failure_uses_view_fallback() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Box::pin(async { Err(ApiError::Transport("connection refused".into())) })
        });
        let api = client(mock);

        let mut view = QueryView::new(QueryKind::Ip);
        api.submit_ip(&mut view, "8.8.8.8").await;
        assert_eq!(
            view.state().error(),
            Some("Query failed, please check IP address format")
        );
    }

    #[tokio::test]
    async fn undecodable_success_body_uses_fallback() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    body: "<html></html>".into(),
                })
            })
        });
        let api = client(mock);

        let mut view = QueryView::new(QueryKind::Username);
        api.submit_username(&mut view, "jdoe").await;
        assert_eq!(
            view.state().error(),
            Some("Search failed, please check username format")
        );
    }

    #[tokio::test]
    async fn my_ip_chains_detail_lookup() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url.ends_with("localhost:8088/api/my-ip"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(response(200, json!({ "ip": "1.2.3.4", "success": true }))) }));
        mock.expect_post_json()
            .withf(|url, body| {
                url.ends_with("localhost:8088/api/track-ip") && body["ip_address"] == "1.2.3.4"
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(response(200, json!({ "ip": "1.2.3.4", "type": "IPv4", "country": "Australia" })))
                })
            });
        let api = client(mock);

        let mut view = MyIpView::default();
        assert!(api.refresh_my_ip(&mut view).await);

        let address = view.address.state().result().expect("address loaded");
        assert_eq!(address.ip().as_deref(), Some("1.2.3.4"));
        let (location, _) = view.details.state().result().expect("details loaded").details();
        assert_eq!(location[1].value, "IPv4");
        assert_eq!(location[2].value, "Australia");
    }

    #[tokio::test]
    async fn my_ip_failure_skips_detail_lookup() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { Ok(response(500, json!({ "detail": "upstream down" }))) }));
        mock.expect_post_json().times(0);
        let api = client(mock);

        let mut view = MyIpView::default();
        api.refresh_my_ip(&mut view).await;
        assert_eq!(view.address.state().error(), Some("upstream down"));
        assert_eq!(view.details.state(), &QueryState::Idle);
    }

    #[tokio::test]
    async fn detail_failure_keeps_resolved_address() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { Ok(response(200, json!({ "ip": "1.2.3.4" }))) }));
        mock.expect_post_json()
            .returning(|_, _| Box::pin(async { Ok(response(500, json!({}))) }));
        let api = client(mock);

        let mut view = MyIpView::default();
        api.refresh_my_ip(&mut view).await;
        assert!(view.address.state().result().is_some());
        assert_eq!(view.details.state().error(), Some("Failed to get IP details"));
    }

    /// Starts a newer submit as soon as the first one is pending, the way a
    /// second click does while the first request is on the wire.
    struct Overtaken<V> {
        view: V,
        newer: Option<fn(&mut V)>,
    }

    impl<V> ViewCell<V> for Overtaken<V> {
        fn update<R>(&mut self, f: impl FnOnce(&mut V) -> R) -> R {
            let result = f(&mut self.view);
            if let Some(newer) = self.newer.take() {
                newer(&mut self.view);
            }
            result
        }
    }

    #[tokio::test]
    async fn superseded_submit_reports_dropped_response() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(response(200, json!({ "ip": "8.8.8.8" }))) }));
        let api = client(mock);

        let mut cell = Overtaken {
            view: QueryView::new(QueryKind::Ip),
            newer: Some(|v: &mut QueryView<IpLookup>| {
                v.begin("1.1.1.1");
            }),
        };
        assert!(!api.submit_ip(&mut cell, "8.8.8.8").await);
        assert!(cell.view.state().is_pending());
    }

    #[tokio::test]
    async fn superseded_refresh_skips_detail_lookup() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Box::pin(async { Ok(response(200, json!({ "ip": "1.2.3.4" }))) }));
        mock.expect_post_json().times(0);
        let api = client(mock);

        let mut cell = Overtaken {
            view: MyIpView::default(),
            newer: Some(|v: &mut MyIpView| {
                v.address.begin_without_input();
            }),
        };
        assert!(!api.refresh_my_ip(&mut cell).await);
        assert!(cell.view.address.state().is_pending());
        assert_eq!(cell.view.details.state(), &QueryState::Idle);
    }

    #[tokio::test]
    async fn health_reads_status() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url.ends_with("localhost:8088/"))
            .returning(|_| {
                Box::pin(async { Ok(response(200, json!({ "message": "GhostTrack API v2.0", "status": "running" }))) })
            });
        let api = client(mock);

        let health = api.health().await.unwrap();
        assert_eq!(health.status().as_deref(), Some("running"));
    }
}
