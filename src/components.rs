//! Site chrome shared by every page: links, navbars, footer.

use web_sys::window;
use yew::prelude::*;

use crate::route::{navigate, Route};

pub const BRAND: &str = "Do Zero AI";

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor with a real `href` that navigates in-app on a plain left click.
/// Modified clicks (new tab, new window) are left to the browser.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
                return;
            }
            e.prevent_default();
            navigate(&to);
        })
    };

    html! {
        <a href={props.to.to_path()} class={props.class.clone()} aria-label={props.aria_label.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}

/// Landing page navbar: brand, blog link, waitlist anchor.
#[function_component(LandingNav)]
pub fn landing_nav() -> Html {
    html! {
        <nav class="nav" role="navigation" aria-label="Main navigation">
            <div class="brand">{ BRAND }</div>
            <div class="nav-links">
                <Link to={Route::BlogIndex} aria_label="Read our blog">{ "Blog" }</Link>
                <a href="#waitlist" class="current" aria-current="page">{ "Waitlist" }</a>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogNavProps {
    /// Show "Back to Home" instead of the Home/Blog pair.
    #[prop_or_default]
    pub back_home: bool,
}

#[function_component(BlogNav)]
pub fn blog_nav(props: &BlogNavProps) -> Html {
    html! {
        <nav class="nav">
            <Link to={Route::Landing} class="brand">{ BRAND }</Link>
            if props.back_home {
                <Link to={Route::Landing} class="nav-links">{ "← Back to Home" }</Link>
            } else {
                <div class="nav-links">
                    <Link to={Route::Landing}>{ "Home" }</Link>
                    <Link to={Route::BlogIndex}>{ "Blog" }</Link>
                </div>
            }
        </nav>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="brand">{ BRAND }</div>
            <div class="nav-links">
                <Link to={Route::Landing}>{ "Home" }</Link>
                <Link to={Route::BlogIndex}>{ "Blog" }</Link>
            </div>
            <div class="fine">{ "© 2026 Do Zero AI. All rights reserved." }</div>
        </footer>
    }
}

/// Set `document.title` while the calling page is mounted.
#[hook]
pub fn use_document_title(title: String) {
    use_effect_with(title, |title| {
        if let Some(doc) = window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
        || ()
    });
}

/// `<title>` text for a page.
pub fn page_title(page: &str) -> String {
    if page.is_empty() {
        BRAND.to_string()
    } else {
        format!("{page} | {BRAND}")
    }
}
