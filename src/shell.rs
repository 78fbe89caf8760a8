//! Application Shell
//!
//! Owns everything shared between views: the storage handle, the router,
//! the in-memory session and the language preference. Views get the shell
//! passed in; nothing here is global.
//!
//! Writes happen only at three transitions: the session bootstrap, a
//! successful login, and logout.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::client::{Backend, ClientResult};
use crate::i18n::{Catalog, Language, TextKey};
use crate::router::{Route, Router};
use crate::session::{MeResponse, Session, User};
use crate::storage::{self, keys, Storage};

/// Shared application state
pub struct Shell {
    storage: Rc<dyn Storage>,
    router: Router,
    catalog: Catalog,
    session: RefCell<Option<Session>>,
    language: Cell<Language>,
}

impl Shell {
    /// Language is restored from storage; unknown codes fall back to English
    pub fn new(storage: Rc<dyn Storage>, router: Router) -> Self {
        Self::with_default_language(storage, router, Language::default())
    }

    /// Like [`new`](Self::new) with a different fallback language
    pub fn with_default_language(
        storage: Rc<dyn Storage>,
        router: Router,
        fallback: Language,
    ) -> Self {
        let language = storage
            .get(keys::LANGUAGE)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(fallback);

        Self {
            storage,
            router,
            catalog: Catalog::builtin(),
            session: RefCell::new(None),
            language: Cell::new(language),
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch language and remember the choice
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        storage::persist(self.storage(), keys::LANGUAGE, language.code());
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog lookup in the active language
    pub fn text(&self, key: TextKey) -> String {
        self.catalog.text(self.language(), key)
    }

    /// Session user's name, else the name cached by an earlier load
    pub fn display_name(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.user.display_name().to_string())
            .filter(|name| !name.is_empty())
            .or_else(|| {
                self.storage
                    .get(keys::USER_NAME)
                    .filter(|name| !name.is_empty())
            })
    }

    /// Probe the backend for an existing session. Runs once per load.
    pub async fn bootstrap<B: Backend + ?Sized>(&self, backend: &B) -> bool {
        let probe = backend.me().await;
        self.apply_probe(probe)
    }

    /// Settle the route from a session probe outcome.
    ///
    /// Authenticated users never stay on the login screen; anonymous users
    /// never stay anywhere else.
    pub fn apply_probe(&self, probe: ClientResult<MeResponse>) -> bool {
        match probe {
            Ok(me) => {
                tracing::info!(user = me.user.display_name(), "Existing session found");
                self.establish(me.user);
                if self.route() == Route::Login {
                    self.router.navigate(Route::Dashboard);
                }
                true
            }
            Err(e) => {
                tracing::info!(error = %e, "No active session");
                self.session.replace(None);
                if self.route() != Route::Login {
                    self.router.navigate(Route::Login);
                }
                false
            }
        }
    }

    /// Login view succeeded: adopt the user and show the dashboard
    pub fn logged_in(&self, user: User) {
        tracing::info!(user = user.display_name(), "Logged in");
        self.establish(user);
        self.router.navigate(Route::Dashboard);
    }

    /// Drop the client-side session. The token is not revoked server-side.
    pub fn logout(&self) {
        tracing::info!("Logging out");
        storage::forget(self.storage(), keys::AUTH_TOKEN);
        storage::forget(self.storage(), keys::USER_NAME);
        self.session.replace(None);
        self.router.navigate(Route::Login);
    }

    fn establish(&self, user: User) {
        storage::persist(self.storage(), keys::USER_NAME, user.display_name());
        let token = self.storage.get(keys::AUTH_TOKEN);
        self.session.replace(Some(Session { user, token }));
    }
}
