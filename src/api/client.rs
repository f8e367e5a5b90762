use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::error::extract_message;
use crate::api::types::{
    CreateMatchRequest, LogInRequest, ProfileUpdate, SignUpRequest, TokenResponse,
};
use crate::api::ApiError;
use crate::models::{MatchRequest, Mentor, Profile, User};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over the backend REST contract.
///
/// Holds a shared connection pool; cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given API base (e.g. `http://localhost:8080/api`).
    ///
    /// A trailing slash on the base is trimmed so path joining stays uniform.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /signup`. The success payload is ignored; signing up does not
    /// authenticate.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/signup"))
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `POST /login`.
    pub async fn log_in(&self, request: &LogInRequest) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(request)
            .send()
            .await?;
        parse_json(response).await
    }

    /// `GET /me`.
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let response = self.get("/me", token).send().await?;
        parse_json(response).await
    }

    /// `PUT /profile`. The server response is canonical; the submitted shape
    /// is not assumed to equal the stored result.
    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        let response = self
            .client
            .put(self.url("/profile"))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        parse_json(response).await
    }

    /// `GET /mentors?skill=&order_by=`.
    ///
    /// Both query parameters are omitted entirely when absent; the server
    /// default is an unfiltered, id-ordered listing.
    pub async fn mentors(
        &self,
        token: &str,
        skill: Option<&str>,
        order_by: Option<&str>,
    ) -> Result<Vec<Mentor>, ApiError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(skill) = skill {
            query.push(("skill", skill));
        }
        if let Some(order_by) = order_by {
            query.push(("order_by", order_by));
        }

        let mut builder = self.get("/mentors", token);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        parse_json(builder.send().await?).await
    }

    /// `POST /match-requests`.
    pub async fn create_match_request(
        &self,
        token: &str,
        request: &CreateMatchRequest,
    ) -> Result<MatchRequest, ApiError> {
        let response = self
            .client
            .post(self.url("/match-requests"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        parse_json(response).await
    }

    /// `GET /match-requests/incoming` (mentor side).
    pub async fn incoming_requests(&self, token: &str) -> Result<Vec<MatchRequest>, ApiError> {
        let response = self.get("/match-requests/incoming", token).send().await?;
        parse_json(response).await
    }

    /// `GET /match-requests/outgoing` (mentee side).
    pub async fn outgoing_requests(&self, token: &str) -> Result<Vec<MatchRequest>, ApiError> {
        let response = self.get("/match-requests/outgoing", token).send().await?;
        parse_json(response).await
    }

    /// `PUT /match-requests/{id}/accept`.
    pub async fn accept_request(&self, token: &str, id: i64) -> Result<MatchRequest, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/match-requests/{id}/accept")))
            .bearer_auth(token)
            .send()
            .await?;
        parse_json(response).await
    }

    /// `PUT /match-requests/{id}/reject`.
    pub async fn reject_request(&self, token: &str, id: i64) -> Result<MatchRequest, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/match-requests/{id}/reject")))
            .bearer_auth(token)
            .send()
            .await?;
        parse_json(response).await
    }

    /// `DELETE /match-requests/{id}` (mentee-side cancel).
    pub async fn cancel_request(&self, token: &str, id: i64) -> Result<MatchRequest, ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/match-requests/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        parse_json(response).await
    }

    fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(token)
    }
}

/// Map a non-2xx response into an [`ApiError`], surfacing the backend
/// message verbatim when the body carries one.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| extract_message(&body));

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized { message });
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}
