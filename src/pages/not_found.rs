use yew::prelude::*;

use crate::components::{page_title, use_document_title, BlogNav, SiteFooter};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_document_title(page_title("Not found"));

    html! {
        <div class="page">
            <BlogNav back_home=true />
            <section class="hero">
                <h1 class="h1">{ "404" }</h1>
                <p class="sub">{ "Nothing lives at this address." }</p>
            </section>
            <SiteFooter />
        </div>
    }
}
