use gloo::console::debug;
use web_sys::window;
use yew::prelude::*;

use crate::blog::{self, share_links};
use crate::components::{page_title, use_document_title, BlogNav, Link, SiteFooter};
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub id: AttrValue,
}

/// Absolute URL of a post, for share links.
fn post_url(route: &Route) -> String {
    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{}", route.to_path())
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let article = blog::article_for(&props.id);
    let post = article.summary;

    use_document_title(page_title(post.title));

    use_effect_with(props.id.clone(), move |id| {
        if id.as_str() != post.id {
            debug!(format!("no article body for {id:?}, showing {}", post.id));
        }
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    let shares = share_links(&post_url(&Route::post(post.id)), post.title);

    html! {
        <div class="page">
            <BlogNav />

            <header class="hero narrow">
                <Link to={Route::BlogIndex} class="back">{ "← Back to Blog" }</Link>
                <div class="meta-row">
                    <span class="tag">{ post.category.label() }</span>
                </div>
                <h1 class="h1">{ post.title }</h1>
                <p class="sub">{ post.excerpt }</p>
                <div class="meta-row muted">
                    <span>{ post.author }</span>
                    <span>{ article.long_date }</span>
                    <span>{ post.read_time }</span>
                </div>
            </header>

            <article class="section narrow">
                <div class="card glass">
                    <div class="prose">
                        { Html::from_html_unchecked(AttrValue::from(article.body_html)) }
                    </div>

                    <div class="tags">
                        { for article.tags.iter().map(|t| html! { <span key={*t} class="tag muted">{ *t }</span> }) }
                    </div>

                    <div class="share">
                        <span class="muted">{ "Share:" }</span>
                        { for shares.into_iter().map(|s| html! {
                            <a key={s.network} href={s.href} target="_blank" rel="noopener noreferrer"
                               aria-label={format!("Share on {}", s.network)}>
                                { s.network }
                            </a>
                        }) }
                    </div>
                </div>
            </article>

            <section class="section narrow">
                <h2 class="card-t">{ "Related Articles" }</h2>
                <div class="grid two">
                    { for blog::related(article).into_iter().map(|r| html! {
                        <article key={r.id}>
                            <Link to={Route::post(r.id)} class="card glass">
                                <span class="tag">{ r.category.label() }</span>
                                <h3 class="post-t">{ r.title }</h3>
                            </Link>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section narrow">
                <div class="card glass cta">
                    <h2 class="card-t">{ "Ready to Experience Autonomous Execution?" }</h2>
                    <p class="card-p">
                        { "Join our waitlist to get early access to Do Zero AI and be among the first to experience the future of work." }
                    </p>
                    <Link to={Route::Landing} class="btn">{ "Join the Waitlist" }</Link>
                </div>
            </section>

            <SiteFooter />
        </div>
    }
}
