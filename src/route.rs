//! Path routing on top of the browser History API.

use std::fmt;

use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    BlogIndex,
    /// `/blog/:id`. Unknown ids still render an article; see `blog::article_for`.
    BlogPost { id: String },
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["blog"] => Route::BlogIndex,
            ["blog", id] => match urlencoding::decode(id) {
                Ok(id) => Route::BlogPost { id: id.into_owned() },
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::BlogIndex => "/blog".to_string(),
            Route::BlogPost { id } => format!("/blog/{}", urlencoding::encode(id)),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn post(id: &str) -> Route {
        Route::BlogPost { id: id.to_string() }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Push `route` onto the session history. Listeners registered through
/// [`use_route`] re-render.
pub fn navigate(route: &Route) {
    BrowserHistory::new().push(route.to_path());
}

fn current_route() -> Route {
    Route::parse(BrowserHistory::new().location().path())
}

/// The route for the current location, kept in sync with pushes and
/// back/forward navigation.
#[hook]
pub fn use_route() -> Route {
    let route = use_state(current_route);
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = BrowserHistory::new().listen(move || route.set(current_route()));
            move || drop(listener)
        });
    }
    (*route).clone()
}
