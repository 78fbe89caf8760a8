//! Hash Router
//!
//! Maps the location fragment to one of two views. `#/login` is the login
//! screen, every other fragment is the dashboard.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    const LOGIN_PATH: &'static str = "/login";

    /// Route for a raw fragment such as `#/login`, `#/` or `""`
    pub fn from_fragment(fragment: &str) -> Self {
        let path = fragment.replacen('#', "", 1);
        let path = if path.is_empty() { "/" } else { path.as_str() };
        if path == Self::LOGIN_PATH {
            Route::Login
        } else {
            Route::Dashboard
        }
    }

    /// Canonical fragment written on navigation
    pub fn fragment(&self) -> &'static str {
        match self {
            Route::Login => "#/login",
            Route::Dashboard => "#/",
        }
    }
}

/// Where the fragment lives: the browser location, or memory
pub trait Location {
    fn hash(&self) -> String;

    fn set_hash(&self, hash: &str);
}

/// Fragment held in memory, for the CLI and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    hash: Rc<RefCell<String>>,
}

impl MemoryLocation {
    pub fn new(hash: &str) -> Self {
        Self {
            hash: Rc::new(RefCell::new(hash.to_string())),
        }
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn set_hash(&self, hash: &str) {
        *self.hash.borrow_mut() = hash.to_string();
    }
}

type Listener = Box<dyn Fn(Route)>;

/// Current route plus change notification
pub struct Router {
    location: Rc<dyn Location>,
    current: Cell<Route>,
    listeners: RefCell<Vec<Listener>>,
}

impl Router {
    /// Initial route is read from the location right away
    pub fn new(location: Rc<dyn Location>) -> Self {
        let current = Route::from_fragment(&location.hash());
        Self {
            location,
            current: Cell::new(current),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Write the route's fragment and pick it up immediately.
    ///
    /// A browser also fires `hashchange` afterwards; the second [`sync`](Self::sync)
    /// finds nothing new.
    pub fn navigate(&self, route: Route) {
        tracing::debug!(?route, "Navigating");
        self.location.set_hash(route.fragment());
        self.sync();
    }

    /// Re-read the location after an external change. Subscribers hear
    /// about it only if the route actually changed.
    pub fn sync(&self) -> Route {
        let route = Route::from_fragment(&self.location.hash());
        if route != self.current.replace(route) {
            for listener in self.listeners.borrow().iter() {
                listener(route);
            }
        }
        route
    }

    pub fn subscribe(&self, listener: impl Fn(Route) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment() {
        assert_eq!(Route::from_fragment("#/login"), Route::Login);
        assert_eq!(Route::from_fragment("/login"), Route::Login);
        assert_eq!(Route::from_fragment("#/"), Route::Dashboard);
        assert_eq!(Route::from_fragment(""), Route::Dashboard);
        assert_eq!(Route::from_fragment("#"), Route::Dashboard);
        assert_eq!(Route::from_fragment("#/login/extra"), Route::Dashboard);
        assert_eq!(Route::from_fragment("#/anything"), Route::Dashboard);
    }

    #[test]
    fn test_fragment_round_trips() {
        for route in [Route::Login, Route::Dashboard] {
            assert_eq!(Route::from_fragment(route.fragment()), route);
        }
    }

    #[test]
    fn test_initial_route_from_location() {
        let router = Router::new(Rc::new(MemoryLocation::new("#/login")));
        assert_eq!(router.current(), Route::Login);

        let router = Router::new(Rc::new(MemoryLocation::new("")));
        assert_eq!(router.current(), Route::Dashboard);
    }

    #[test]
    fn test_navigate_updates_location() {
        let location = MemoryLocation::new("#/");
        let router = Router::new(Rc::new(location.clone()));

        router.navigate(Route::Login);
        assert_eq!(router.current(), Route::Login);
        assert_eq!(location.hash(), "#/login");
    }

    #[test]
    fn test_external_change_notifies_once() {
        let location = MemoryLocation::new("#/");
        let router = Router::new(Rc::new(location.clone()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        router.subscribe(move |route| sink.borrow_mut().push(route));

        location.set_hash("#/login");
        router.sync();
        router.sync();
        location.set_hash("#/whatever");
        router.sync();

        assert_eq!(*seen.borrow(), vec![Route::Login, Route::Dashboard]);
    }

    #[test]
    fn test_navigate_to_current_route_is_silent() {
        let router = Router::new(Rc::new(MemoryLocation::new("#/")));
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        router.subscribe(move |_| counter.set(counter.get() + 1));

        router.navigate(Route::Dashboard);
        assert_eq!(calls.get(), 0);
    }
}
