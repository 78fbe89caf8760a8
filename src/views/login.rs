//! Login View
//!
//! Credential form. On success the token and display name are persisted and
//! the user is handed back to the caller, who decides where to go next.

use crate::client::{Backend, ClientError, ClientResult};
use crate::i18n::{Catalog, Language, TextKey};
use crate::session::{LoginRequest, LoginResponse, User};
use crate::storage::{self, keys, Storage};

/// Why a login attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Message supplied by the backend, shown verbatim
    Api(String),
    /// Anything else; shown as the localized "login failed" text
    Generic,
}

impl LoginError {
    pub fn from_client(err: &ClientError) -> Self {
        match err.api_message() {
            Some(message) => LoginError::Api(message.to_string()),
            None => LoginError::Generic,
        }
    }

    pub fn message(&self, language: Language, catalog: &Catalog) -> String {
        match self {
            LoginError::Api(message) => message.clone(),
            LoginError::Generic => catalog.text(language, TextKey::LoginFailed),
        }
    }
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<LoginError>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both fields are required
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Start an attempt: clears the previous error and yields the request,
    /// or `None` when a required field is empty.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if !self.can_submit() {
            return None;
        }
        self.error = None;
        Some(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Settle an attempt. On success the credentials are persisted and the
    /// user is returned for the "logged in" callback.
    pub fn finish(
        &mut self,
        outcome: ClientResult<LoginResponse>,
        storage: &dyn Storage,
    ) -> Option<User> {
        match outcome {
            Ok(response) => {
                storage::persist(storage, keys::AUTH_TOKEN, &response.token);
                storage::persist(storage, keys::USER_NAME, response.user.display_name());
                Some(response.user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.error = Some(LoginError::from_client(&e));
                None
            }
        }
    }

    /// Run a full attempt and invoke `on_logged_in` on success
    pub async fn submit<B, F>(&mut self, backend: &B, storage: &dyn Storage, on_logged_in: F)
    where
        B: Backend + ?Sized,
        F: FnOnce(User),
    {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let outcome = backend.login(&request).await;
        if let Some(user) = self.finish(outcome, storage) {
            on_logged_in(user);
        }
    }

    /// Inline error text, if any
    pub fn error_message(&self, language: Language, catalog: &Catalog) -> Option<String> {
        self.error
            .as_ref()
            .map(|error| error.message(language, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::ApiClient;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (MemoryStorage, MockTransport, ApiClient<MockTransport>) {
        let storage = MemoryStorage::new();
        let transport = MockTransport::new();
        let client = ApiClient::new("http://api.test", transport.clone(), Rc::new(storage.clone()));
        (storage, transport, client)
    }

    fn filled() -> LoginForm {
        LoginForm {
            username: "anna".into(),
            password: "secret".into(),
            error: None,
        }
    }

    #[tokio::test]
    async fn test_successful_login_persists_and_calls_back() {
        let (storage, transport, client) = setup();
        transport.respond(200, r#"{"token": "tok-1", "user": {"name": "Anna"}}"#);

        let received = RefCell::new(None);
        let mut form = filled();
        form.submit(&client, &storage, |user| *received.borrow_mut() = Some(user))
            .await;

        assert_eq!(received.into_inner(), Some(User::named("Anna")));
        assert_eq!(storage.get(keys::AUTH_TOKEN).as_deref(), Some("tok-1"));
        assert_eq!(storage.get(keys::USER_NAME).as_deref(), Some("Anna"));
        assert_eq!(form.error, None);
    }

    #[tokio::test]
    async fn test_api_message_shown_verbatim() {
        let (storage, transport, client) = setup();
        transport.respond(401, r#"{"error": "Benutzer gesperrt!"}"#);

        let mut form = filled();
        form.submit(&client, &storage, |_| panic!("must not log in"))
            .await;

        assert_eq!(form.error, Some(LoginError::Api("Benutzer gesperrt!".into())));
        let catalog = Catalog::builtin();
        // Verbatim regardless of the active language
        assert_eq!(
            form.error_message(Language::En, &catalog).as_deref(),
            Some("Benutzer gesperrt!")
        );
        assert_eq!(storage.get(keys::AUTH_TOKEN), None);
    }

    #[tokio::test]
    async fn test_generic_message_is_localized() {
        let (storage, transport, client) = setup();
        transport.respond(500, "oops");

        let mut form = filled();
        form.submit(&client, &storage, |_| {}).await;

        assert_eq!(form.error, Some(LoginError::Generic));
        let catalog = Catalog::builtin();
        assert_eq!(
            form.error_message(Language::En, &catalog).as_deref(),
            Some("Login failed")
        );
        assert_eq!(
            form.error_message(Language::De, &catalog).as_deref(),
            Some("Login fehlgeschlagen")
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_generic() {
        let (storage, transport, client) = setup();
        transport.fail(ClientError::Network("refused".into()));

        let mut form = filled();
        form.submit(&client, &storage, |_| {}).await;
        assert_eq!(form.error, Some(LoginError::Generic));
    }

    #[tokio::test]
    async fn test_empty_fields_send_nothing() {
        let (storage, transport, client) = setup();

        let mut form = LoginForm {
            username: "anna".into(),
            ..LoginForm::default()
        };
        form.submit(&client, &storage, |_| {}).await;

        assert_eq!(transport.request_count(), 0);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut form = filled();
        form.error = Some(LoginError::Generic);

        let request = form.begin_submit().unwrap();
        assert_eq!(request.username, "anna");
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_catalog_keys_instead_of_prose() {
        let mut table = crate::i18n::Table::new();
        table.insert(TextKey::LoginFailed, "login.failed".into());
        let catalog = Catalog::builtin().with_table(Language::En, table);

        assert_eq!(
            LoginError::Generic.message(Language::En, &catalog),
            "login.failed"
        );
    }
}
