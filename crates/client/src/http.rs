//! reqwest-backed implementation of the gateway contract.
//!
//! All authenticated requests carry `Authorization: Bearer <token>`; event
//! reads go out without the header when no token is supplied (public view).
//! A `422` response carries a field-keyed error object which is mapped back
//! into [`FieldErrors`]; any other error status becomes
//! [`ClientError::Backend`].

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use campus_core::{EventId, FieldErrors, Role, UserId};
use campus_events::EventRecord;

use crate::gateway::{ApiGateway, LoginResponse, UserSummary};
use crate::ClientError;

/// HTTP gateway to the university backend.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    http: Client,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    async fn accept(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(ClientError::Validation(field_errors_from_body(&body)));
        }
        if !status.is_success() {
            return Err(ClientError::Backend {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// Flatten a 422 body (`field -> message` or `field -> [messages]`) into
/// [`FieldErrors`]. Unrecognized shapes flatten to an empty set.
fn field_errors_from_body(body: &Value) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let Value::Object(map) = body else {
        return errors;
    };
    for (field, value) in map {
        let message = match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        };
        errors.insert(field.clone(), message);
    }
    errors
}

/// Role-specific deletion endpoint.
fn delete_user_path(role: Role) -> &'static str {
    match role {
        Role::Administrator => "eliminar-admin/",
        Role::Teacher => "eliminar-maestro/",
        Role::Student => "eliminar-alumno/",
    }
}

fn list_users_path(role: Role) -> &'static str {
    match role {
        Role::Administrator => "lista-admins/",
        Role::Teacher => "lista-maestros/",
        Role::Student => "lista-alumnos/",
    }
}

// Directory rows nest the account fields under `user`.
#[derive(Debug, Deserialize)]
struct RosterRow {
    id: UserId,
    user: RosterAccount,
}

#[derive(Debug, Deserialize, Default)]
struct RosterAccount {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
}

impl From<RosterRow> for UserSummary {
    fn from(row: RosterRow) -> Self {
        UserSummary {
            id: row.id,
            first_name: row.user.first_name,
            last_name: row.user.last_name,
            email: row.user.email,
        }
    }
}

impl HttpGateway {
    async fn fetch_roster(&self, role: Role, token: &str) -> Result<Vec<UserSummary>, ClientError> {
        let response = Self::auth(self.http.get(self.url(list_users_path(role))), Some(token))
            .send()
            .await?;
        let rows = Self::accept(response).await?.json::<Vec<RosterRow>>().await?;
        Ok(rows.into_iter().map(UserSummary::from).collect())
    }
}

impl ApiGateway for HttpGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .http
            .post(self.url("token/"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    async fn logout(&self, token: &str) -> Result<(), ClientError> {
        let response = Self::auth(self.http.get(self.url("logout/")), Some(token))
            .send()
            .await?;
        Self::accept(response).await?;
        Ok(())
    }

    async fn list_events(&self, token: Option<&str>) -> Result<Vec<EventRecord>, ClientError> {
        let response = Self::auth(self.http.get(self.url("eventos-academicos/")), token)
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    async fn get_event(&self, id: EventId, token: Option<&str>) -> Result<EventRecord, ClientError> {
        let request = self
            .http
            .get(self.url("evento-academico/"))
            .query(&[("id", id.as_i64())]);
        let response = Self::auth(request, token).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    async fn create_event(&self, event: &EventRecord, token: &str) -> Result<EventRecord, ClientError> {
        let response = Self::auth(self.http.post(self.url("evento-academico/")), Some(token))
            .json(event)
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    async fn update_event(&self, event: &EventRecord, token: &str) -> Result<EventRecord, ClientError> {
        // The id travels in the body on update.
        let response = Self::auth(self.http.put(self.url("evento-academico/")), Some(token))
            .json(event)
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    async fn delete_event(&self, id: EventId, token: &str) -> Result<(), ClientError> {
        let request = self
            .http
            .delete(self.url("evento-academico/"))
            .query(&[("id", id.as_i64())]);
        let response = Self::auth(request, Some(token)).send().await?;
        Self::accept(response).await?;
        Ok(())
    }

    async fn list_admins(&self, token: &str) -> Result<Vec<UserSummary>, ClientError> {
        self.fetch_roster(Role::Administrator, token).await
    }

    async fn list_teachers(&self, token: &str) -> Result<Vec<UserSummary>, ClientError> {
        self.fetch_roster(Role::Teacher, token).await
    }

    async fn list_students(&self, token: &str) -> Result<Vec<UserSummary>, ClientError> {
        self.fetch_roster(Role::Student, token).await
    }

    async fn delete_user(&self, role: Role, id: UserId, token: &str) -> Result<(), ClientError> {
        let request = self
            .http
            .delete(self.url(delete_user_path(role)))
            .query(&[("id", id.as_i64())]);
        let response = Self::auth(request, Some(token)).send().await?;
        Self::accept(response).await?;
        Ok(())
    }
}
