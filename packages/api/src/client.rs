use std::rc::Rc;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{ClientConfig, TokenStore};

use crate::error::ApiError;
use crate::interceptor::SessionInterceptor;
use crate::models::payloads::{
    Credentials, ErrorBody, MeResponse, NewNote, NoteResponse, NotesResponse, OtpRequest,
    TokenResponse,
};
use crate::models::{Note, UserInfo};

/// HTTP client for the NoteFlow API.
///
/// Cheap to clone; clones share the token store and the expiry hook. This is
/// the only path from the UI to the network.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    google_login_url: String,
    interceptor: SessionInterceptor,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.api_base(),
            google_login_url: config.google_login_url(),
            interceptor: SessionInterceptor::new(tokens),
        }
    }

    /// Install the hook the interceptor runs after a `401` cleared the token.
    pub fn with_expiry_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.interceptor.set_expiry_hook(hook);
        self
    }

    /// The token store shared with the interceptor.
    pub fn tokens(&self) -> &Rc<dyn TokenStore> {
        self.interceptor.tokens()
    }

    /// Full-page navigation target for "Continue with Google".
    pub fn google_login_url(&self) -> &str {
        &self.google_login_url
    }

    /// Start registration; the server emails a six-digit code.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = Credentials { email, password };
        self.send(self.http.post(self.url("/auth/register")).json(&body))
            .await?;
        Ok(())
    }

    /// Request a fresh code for a pending registration.
    ///
    /// The API has no dedicated resend endpoint; this re-posts the registration
    /// with an empty password, which the server treats as "send the code again".
    pub async fn resend_otp(&self, email: &str) -> Result<(), ApiError> {
        self.register(email, "").await
    }

    /// Exchange an emailed code for a bearer token.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<String, ApiError> {
        let body = OtpRequest { email, otp };
        let resp = self
            .send(self.http.post(self.url("/auth/verify-otp")).json(&body))
            .await?;
        Ok(decode::<TokenResponse>(resp).await?.token)
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = Credentials { email, password };
        let resp = self
            .send(self.http.post(self.url("/auth/login")).json(&body))
            .await?;
        Ok(decode::<TokenResponse>(resp).await?.token)
    }

    /// "Who am I" for the persisted token.
    pub async fn me(&self) -> Result<UserInfo, ApiError> {
        let resp = self.send(self.http.get(self.url("/me"))).await?;
        Ok(decode::<MeResponse>(resp).await?.user)
    }

    /// All notes of the current user, in server order.
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let resp = self.send(self.http.get(self.url("/notes"))).await?;
        Ok(decode::<NotesResponse>(resp).await?.notes)
    }

    pub async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        let body = NewNote { title, content };
        let resp = self
            .send(self.http.post(self.url("/notes")).json(&body))
            .await?;
        Ok(decode::<NoteResponse>(resp).await?.note)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/notes/{id}"))))
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Run a request through the interceptor and map non-success statuses.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let resp = self.interceptor.authorize(request).send().await?;
        let status = resp.status();
        tracing::debug!("{} {}", status.as_u16(), resp.url().path());

        if self.interceptor.inspect(status) {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.json::<ErrorBody>().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: body.message,
            });
        }
        Ok(resp)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
