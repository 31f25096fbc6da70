use crate::{
    ClientError, FeedbackRequest, HospitalRequest, LoginResponse, RemoteSettings,
    Result as ClientResult, SlaughterhouseRequest, TwoFactorRequest, TwoFactorResponse,
};

use ls_core::Preferences;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the LivestockSync REST API
pub struct ApiClient {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8000")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and map non-success statuses to [`ClientError::Api`].
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!("Request failed with {status}: {text}");
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(status, &text),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get(&self, path: &str) -> ClientResult<Value> {
        self.execute(self.request(Method::GET, path)).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        self.execute(self.request(method, path).json(body)).await
    }

    async fn delete(&self, path: &str) -> ClientResult<Value> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = self
            .send_json(Method::POST, "/api/auth/login", &LoginRequest { email, password })
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    pub async fn dashboard_stats(&self) -> ClientResult<Value> {
        self.get("/api/admin/dashboard/stats").await
    }

    /// Most recent activities, newest first. Unwraps the `activities` array.
    pub async fn recent_activities(&self, limit: u32) -> ClientResult<Vec<Value>> {
        let body = self
            .get(&format!(
                "/api/admin/dashboard/recent-activities?limit={limit}"
            ))
            .await?;
        Ok(array_field(body, "activities"))
    }

    // =========================================================================
    // Users
    // =========================================================================

    pub async fn list_users(&self) -> ClientResult<Value> {
        self.get("/api/admin/users").await
    }

    pub async fn user_count(&self) -> ClientResult<u64> {
        let body = self.get("/api/admin/users/count").await?;
        Ok(count_field(&body, "total_users"))
    }

    /// Partial update; `fields` is sent as-is.
    pub async fn update_user(&self, id: &str, fields: &Value) -> ClientResult<Value> {
        self.send_json(Method::PUT, &format!("/api/admin/users/{id}"), fields)
            .await
    }

    pub async fn delete_user(&self, id: &str) -> ClientResult<Value> {
        self.delete(&format!("/api/admin/users/{id}")).await
    }

    // =========================================================================
    // Hospitals
    // =========================================================================

    pub async fn list_hospitals(&self) -> ClientResult<Value> {
        self.get("/api/admin/hospitals").await
    }

    pub async fn hospital_count(&self) -> ClientResult<u64> {
        let body = self.get("/api/admin/hospitals/count").await?;
        Ok(count_field(&body, "total_hospitals"))
    }

    pub async fn create_hospital(&self, hospital: &HospitalRequest) -> ClientResult<Value> {
        self.send_json(Method::POST, "/api/admin/hospitals", hospital)
            .await
    }

    pub async fn update_hospital(
        &self,
        id: &str,
        hospital: &HospitalRequest,
    ) -> ClientResult<Value> {
        self.send_json(Method::PUT, &format!("/api/admin/hospitals/{id}"), hospital)
            .await
    }

    pub async fn delete_hospital(&self, id: &str) -> ClientResult<Value> {
        self.delete(&format!("/api/admin/hospitals/{id}")).await
    }

    // =========================================================================
    // Slaughterhouses
    // =========================================================================

    pub async fn list_slaughterhouses(&self) -> ClientResult<Value> {
        self.get("/api/admin/slaughterhouses").await
    }

    pub async fn slaughterhouse_count(&self) -> ClientResult<u64> {
        let body = self.get("/api/admin/slaughterhouses/count").await?;
        Ok(count_field(&body, "total_slaughterhouses"))
    }

    pub async fn create_slaughterhouse(
        &self,
        slaughterhouse: &SlaughterhouseRequest,
    ) -> ClientResult<Value> {
        self.send_json(Method::POST, "/api/admin/slaughterhouses", slaughterhouse)
            .await
    }

    pub async fn update_slaughterhouse(
        &self,
        id: &str,
        slaughterhouse: &SlaughterhouseRequest,
    ) -> ClientResult<Value> {
        self.send_json(
            Method::PUT,
            &format!("/api/admin/slaughterhouses/{id}"),
            slaughterhouse,
        )
        .await
    }

    pub async fn delete_slaughterhouse(&self, id: &str) -> ClientResult<Value> {
        self.delete(&format!("/api/admin/slaughterhouses/{id}"))
            .await
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    pub async fn list_feedback(&self) -> ClientResult<Value> {
        self.get("/api/admin/feedback").await
    }

    pub async fn submit_feedback(&self, feedback: &FeedbackRequest) -> ClientResult<Value> {
        self.send_json(Method::POST, "/api/feedback", feedback)
            .await
    }

    // =========================================================================
    // User settings
    // =========================================================================

    pub async fn save_user_settings(
        &self,
        user_id: &str,
        prefs: &Preferences,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct SettingsRequest<'a> {
            user_id: &'a str,
            settings: RemoteSettings,
        }

        let body = SettingsRequest {
            user_id,
            settings: RemoteSettings::from(prefs),
        };
        self.send_json(Method::POST, "/api/user/settings", &body)
            .await
    }

    pub async fn get_user_settings(&self, user_id: &str) -> ClientResult<Preferences> {
        let body = self.get(&format!("/api/user/settings/{user_id}")).await?;
        let remote: RemoteSettings = serde_json::from_value(body)?;
        Ok(Preferences::from(remote))
    }

    // =========================================================================
    // Two-factor authentication
    // =========================================================================

    /// Switch 2FA on for `user_id`.
    ///
    /// A malformed code is rejected locally without a request. The local
    /// `twoFactorAuth` preference should only be set once this succeeds.
    pub async fn setup_two_factor(
        &self,
        user_id: &str,
        verification_code: &str,
    ) -> ClientResult<TwoFactorResponse> {
        let code = validate_verification_code(verification_code)?;
        self.two_factor("/api/user/two-factor-auth", user_id, true, Some(code))
            .await
    }

    pub async fn disable_two_factor(&self, user_id: &str) -> ClientResult<TwoFactorResponse> {
        self.two_factor("/api/user/two-factor-auth", user_id, false, None)
            .await
    }

    /// Check a code against an account that already has 2FA on.
    pub async fn verify_two_factor(
        &self,
        user_id: &str,
        verification_code: &str,
    ) -> ClientResult<TwoFactorResponse> {
        let code = validate_verification_code(verification_code)?;
        self.two_factor("/api/user/verify-2fa", user_id, true, Some(code))
            .await
    }

    async fn two_factor(
        &self,
        path: &str,
        user_id: &str,
        enabled: bool,
        verification_code: Option<&str>,
    ) -> ClientResult<TwoFactorResponse> {
        let request = TwoFactorRequest {
            user_id,
            enabled,
            verification_code,
        };
        let body = self.send_json(Method::POST, path, &request).await?;
        Ok(serde_json::from_value(body)?)
    }
}

/// Codes are exactly six ASCII digits.
pub(crate) fn validate_verification_code(code: &str) -> ClientResult<&str> {
    let code = code.trim();
    if code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(code)
    } else {
        Err(ClientError::invalid_input(
            "verification code must be 6 digits",
        ))
    }
}

/// Human-readable message from an error body.
///
/// The server answers `{ "detail": "..." }`; validation failures carry a
/// list under `detail` instead.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());

    match detail {
        Some(Value::String(message)) => message,
        Some(other) => other.to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

fn array_field(mut body: Value, key: &str) -> Vec<Value> {
    match body.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn count_field(body: &Value, key: &str) -> u64 {
    body.get(key).and_then(Value::as_u64).unwrap_or(0)
}
