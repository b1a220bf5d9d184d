//! Test support: a canned-response gateway stub and session helpers.

use std::sync::Mutex;

use campus_auth::{Identity, SessionStore};
use campus_core::{EventId, Role, UserId};
use campus_events::EventRecord;

use crate::gateway::{ApiGateway, LoginResponse, UserSummary};
use crate::ClientError;

pub fn session_as(id: i64, role: Role) -> SessionStore {
    let session = SessionStore::new();
    session.save_identity(Identity::new(
        UserId::new(id),
        "Usuario Prueba",
        role,
        format!("tok-{id}"),
    ));
    session
}

pub fn summary(id: i64, first_name: &str) -> UserSummary {
    UserSummary {
        id: UserId::new(id),
        first_name: first_name.to_string(),
        last_name: "Prueba".to_string(),
        email: format!("{}@uni.mx", first_name.to_lowercase()),
    }
}

/// Gateway stub: canned responses, every call recorded by name.
#[derive(Default)]
pub struct StubGateway {
    pub(crate) calls: Mutex<Vec<String>>,
    pub events: Vec<EventRecord>,
    pub admins: Vec<UserSummary>,
    pub teachers: Vec<UserSummary>,
    pub students: Vec<UserSummary>,
    pub fail_logout: bool,
    /// Error to return from create/update (e.g. a mapped 422).
    pub submit_error: Option<ClientError>,
}

impl StubGateway {
    fn called(&self, name: impl Into<String>) {
        self.calls.lock().unwrap().push(name.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, name: &str) -> bool {
        self.calls().iter().any(|c| c == name || c.starts_with(&format!("{name}(")))
    }
}

impl ApiGateway for StubGateway {
    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse, ClientError> {
        self.called("login");
        Ok(LoginResponse {
            id: UserId::new(5),
            role: Role::Teacher,
            display_name: username.to_string(),
            token: "tok-5".to_string(),
        })
    }

    async fn logout(&self, _token: &str) -> Result<(), ClientError> {
        self.called("logout");
        if self.fail_logout {
            return Err(ClientError::Backend { status: 500 });
        }
        Ok(())
    }

    async fn list_events(&self, token: Option<&str>) -> Result<Vec<EventRecord>, ClientError> {
        self.called(format!("list_events(auth={})", token.is_some()));
        Ok(self.events.clone())
    }

    async fn get_event(&self, id: EventId, _token: Option<&str>) -> Result<EventRecord, ClientError> {
        self.called(format!("get_event({id})"));
        self.events
            .iter()
            .find(|e| e.id == Some(id))
            .cloned()
            .ok_or(ClientError::Backend { status: 404 })
    }

    async fn create_event(&self, event: &EventRecord, _token: &str) -> Result<EventRecord, ClientError> {
        self.called("create_event");
        if let Some(err) = &self.submit_error {
            return Err(err.clone());
        }
        let mut created = event.clone();
        created.id = Some(EventId::new(1));
        Ok(created)
    }

    async fn update_event(&self, event: &EventRecord, _token: &str) -> Result<EventRecord, ClientError> {
        self.called("update_event");
        if let Some(err) = &self.submit_error {
            return Err(err.clone());
        }
        Ok(event.clone())
    }

    async fn delete_event(&self, id: EventId, _token: &str) -> Result<(), ClientError> {
        self.called(format!("delete_event({id})"));
        Ok(())
    }

    async fn list_admins(&self, _token: &str) -> Result<Vec<UserSummary>, ClientError> {
        self.called("list_admins");
        Ok(self.admins.clone())
    }

    async fn list_teachers(&self, _token: &str) -> Result<Vec<UserSummary>, ClientError> {
        self.called("list_teachers");
        Ok(self.teachers.clone())
    }

    async fn list_students(&self, _token: &str) -> Result<Vec<UserSummary>, ClientError> {
        self.called("list_students");
        Ok(self.students.clone())
    }

    async fn delete_user(&self, role: Role, id: UserId, _token: &str) -> Result<(), ClientError> {
        self.called(format!("delete_user({}, {id})", role.as_str()));
        Ok(())
    }
}
