//! User management endpoints.

use tracing::instrument;

use crate::client::GrafanaClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::params::RequestParams;

/// Typed access to Grafana's user endpoints.
///
/// | Operation | Method | Path |
/// |-----------|--------|------|
/// | [`get_current_user`](Self::get_current_user) | GET | /api/user |
/// | [`get_user_by_id`](Self::get_user_by_id) | GET | /api/users/{id} |
/// | [`update_user`](Self::update_user) | PUT | /api/users/{id} |
/// | [`delete_user`](Self::delete_user) | DELETE | /api/admin/users/{id} |
///
/// Every operation expects an `application/json` response and resolves to
/// the parsed body.
///
/// ## Examples
///
/// ```rust,ignore
/// use grafana::{ClientConfig, GrafanaClient, UserService};
///
/// let client = GrafanaClient::new(ClientConfig::from_env()?)?;
/// let me = UserService::new(&client).get_current_user().await?;
/// println!("logged in as {}", me["login"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    client: &'a GrafanaClient,
}

impl<'a> UserService<'a> {
    pub fn new(client: &'a GrafanaClient) -> Self {
        Self { client }
    }

    /// Fetches the user owning the bearer token.
    #[instrument(name = "grafana.users.current", skip(self))]
    pub async fn get_current_user(&self) -> Result<serde_json::Value, ApiError> {
        self.client
            .request_json("/api/user", RequestParams::new(), RestMethod::Get)
            .await
    }

    /// Fetches a user by numeric id.
    #[instrument(name = "grafana.users.get", skip(self))]
    pub async fn get_user_by_id(&self, user_id: i64) -> Result<serde_json::Value, ApiError> {
        self.client
            .request_json(&format!("/api/users/{user_id}"), RequestParams::new(), RestMethod::Get)
            .await
    }

    /// Updates a user; `data` is sent as the JSON body.
    #[instrument(name = "grafana.users.update", skip(self, data))]
    pub async fn update_user(
        &self,
        user_id: i64,
        data: RequestParams,
    ) -> Result<serde_json::Value, ApiError> {
        self.client
            .request_json(&format!("/api/users/{user_id}"), data, RestMethod::Put)
            .await
    }

    /// Deletes a user through the admin API.
    #[instrument(name = "grafana.users.delete", skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> Result<serde_json::Value, ApiError> {
        self.client
            .request_json(
                &format!("/api/admin/users/{user_id}"),
                RequestParams::new(),
                RestMethod::Delete,
            )
            .await
    }
}

impl GrafanaClient {
    /// Returns the user endpoints bound to this client.
    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }
}
