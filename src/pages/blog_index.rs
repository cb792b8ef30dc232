use yew::prelude::*;

use crate::blog::{self, Filter, PostSummary};
use crate::components::{page_title, use_document_title, BlogNav, Link, SiteFooter};
use crate::route::Route;

#[function_component(BlogIndex)]
pub fn blog_index() -> Html {
    use_document_title(page_title("Blog"));

    let filter = use_state(Filter::default);

    let buttons = Filter::ALL.iter().map(|&f| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(f))
        };
        let class = if *filter == f { "chip active" } else { "chip" };
        html! {
            <button key={f.label()} {class} {onclick} aria-pressed={(*filter == f).to_string()}>
                { f.label() }
            </button>
        }
    });

    let featured = blog::featured(*filter).map(|post| {
        html! {
            <section class="section">
                <article class="featured">
                    <Link to={Route::post(post.id)} class="card glass">
                        <div class="meta-row">
                            <span class="tag">{ post.category.label() }</span>
                            <span class="muted">{ "Featured" }</span>
                        </div>
                        <h2 class="featured-t">{ post.title }</h2>
                        <p class="card-p">{ post.excerpt }</p>
                        <div class="meta-row muted">
                            <span>{ post.author }</span>
                            <span>{ post.date }</span>
                            <span>{ post.read_time }</span>
                        </div>
                    </Link>
                </article>
            </section>
        }
    });

    let grid = blog::grid(*filter);

    html! {
        <div class="page">
            <BlogNav back_home=true />

            <section class="hero">
                <h1 class="h1">{ "Blog" }</h1>
                <p class="sub">
                    { "Expert insights on AI automation, autonomous execution, and the future of intelligent workflows." }
                </p>
            </section>

            <section class="section">
                <div class="chips">{ for buttons }</div>
            </section>

            { for featured }

            <section class="section">
                if grid.is_empty() {
                    <p class="muted">{ "No more posts in this category yet." }</p>
                } else {
                    <div class="grid">
                        { for grid.into_iter().map(post_card) }
                    </div>
                }
            </section>

            <SiteFooter />
        </div>
    }
}

fn post_card(post: &'static PostSummary) -> Html {
    html! {
        <article key={post.id} class="post">
            <Link to={Route::post(post.id)} class="card glass">
                <span class="tag">{ post.category.label() }</span>
                <h3 class="post-t">{ post.title }</h3>
                <p class="card-p clamp">{ post.excerpt }</p>
                <div class="meta-row muted">
                    <span>{ post.date }</span>
                    <span>{ post.read_time }</span>
                </div>
            </Link>
        </article>
    }
}
