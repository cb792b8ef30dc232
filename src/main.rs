mod api;
mod blog;
mod components;
mod config;
mod pages;
mod route;
mod wizard;

use std::rc::Rc;

use gloo::console::log;
use yew::prelude::*;

use api::WaitlistClient;
use config::SiteConfig;
use pages::{BlogIndex, BlogPost, LandingPage, NotFound};
use route::{use_route, Route};

#[function_component(App)]
fn app() -> Html {
    let route = use_route();
    let client = use_memo((), |_| WaitlistClient::new(&SiteConfig::load()));

    use_effect_with(route.clone(), |route| {
        log!(format!("route {route}"));
        || ()
    });

    page(route, client)
}

/// The page for `route`. Posts are keyed by id so moving between articles
/// remounts the view.
fn page(route: Route, client: Rc<WaitlistClient>) -> Html {
    match route {
        Route::Landing => html! { <LandingPage {client} /> },
        Route::BlogIndex => html! { <BlogIndex /> },
        Route::BlogPost { id } => {
            let key = id.clone();
            html! { <BlogPost key={key} id={id} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::Key;

    fn client() -> Rc<WaitlistClient> {
        Rc::new(WaitlistClient::new(&SiteConfig::default()))
    }

    #[test]
    fn test_post_page_is_keyed_by_id() {
        let html = page(Route::post("any-id"), client());
        assert_eq!(html.key(), Some(&Key::from("any-id")));
    }

    #[test]
    fn test_other_pages_are_unkeyed() {
        assert_eq!(page(Route::Landing, client()).key(), None);
        assert_eq!(page(Route::BlogIndex, client()).key(), None);
        assert_eq!(page(Route::NotFound, client()).key(), None);
    }
}
