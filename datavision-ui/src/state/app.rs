//! App State
//!
//! Reactive mirror of the [`Shell`]. The shell stays the single owner of
//! session, route and language; signals here only follow it so views
//! re-render.

use leptos::*;
use std::rc::Rc;

use datavision::client::ApiClient;
use datavision::i18n::{Catalog, Language, TextKey};
use datavision::router::{Route, Router};
use datavision::session::User;
use datavision::storage::Storage;
use datavision::Shell;

use crate::api::{self, GlooTransport};
use crate::state::{BrowserLocation, LocalStorage};

pub type Client = ApiClient<GlooTransport>;

/// App state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    shell: StoredValue<Rc<Shell>>,
    client: StoredValue<Rc<Client>>,
    /// Current view
    pub route: RwSignal<Route>,
    /// Active language
    pub language: RwSignal<Language>,
    /// Name shown in the dashboard header
    pub user_name: RwSignal<Option<String>>,
}

/// Build the shell over browser backends and provide it to the component tree
pub fn provide_app_state() -> AppState {
    let storage: Rc<dyn Storage> = Rc::new(LocalStorage::open());
    let base_url = api::get_api_base();
    let client = ApiClient::new(&base_url, GlooTransport, Rc::clone(&storage));
    let shell = Shell::new(storage, Router::new(Rc::new(BrowserLocation)));

    let route = create_rw_signal(shell.route());
    shell.router().subscribe(move |next| route.set(next));

    let state = AppState {
        language: create_rw_signal(shell.language()),
        user_name: create_rw_signal(shell.display_name()),
        shell: store_value(Rc::new(shell)),
        client: store_value(Rc::new(client)),
        route,
    };

    web_sys::console::log_1(&format!("DataVision backend: {}", base_url).into());
    provide_context(state);
    state
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    pub fn shell(&self) -> Rc<Shell> {
        self.shell.get_value()
    }

    pub fn client(&self) -> Rc<Client> {
        self.client.get_value()
    }

    /// Probe for an existing session. Called once per page load.
    pub fn bootstrap(&self) {
        let state = *self;
        spawn_local(async move {
            let shell = state.shell();
            shell.bootstrap(state.client().as_ref()).await;
            state.refresh_user();
        });
    }

    /// Follow a `hashchange` the router did not cause itself
    pub fn sync_route(&self) {
        self.shell().router().sync();
    }

    pub fn navigate(&self, route: Route) {
        self.shell().router().navigate(route);
    }

    /// Localized string; re-renders on language change
    pub fn text(&self, key: TextKey) -> String {
        self.localize(|language, catalog| catalog.text(language, key))
    }

    /// Run `f` with the active language and the catalog
    pub fn localize<R>(&self, f: impl FnOnce(Language, &Catalog) -> R) -> R {
        let language = self.language.get();
        let shell = self.shell();
        f(language, shell.catalog())
    }

    pub fn set_language(&self, language: Language) {
        self.shell().set_language(language);
        self.language.set(language);
    }

    pub fn logged_in(&self, user: User) {
        self.shell().logged_in(user);
        self.refresh_user();
    }

    pub fn logout(&self) {
        self.shell().logout();
        self.refresh_user();
    }

    fn refresh_user(&self) {
        self.user_name.set(self.shell().display_name());
    }
}
