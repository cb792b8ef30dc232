use std::rc::Rc;

use gloo::console::{debug, error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::WaitlistClient;
use crate::components::{page_title, use_document_title, LandingNav};
use crate::wizard::{Stage, Wizard};

const FEATURES: [&str; 3] = ["Autonomous", "Secure", "Invisible"];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub client: Rc<WaitlistClient>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingProps) -> Html {
    use_document_title(page_title(""));

    // The wizard lives in a RefCell so a second click sees the loading flag
    // immediately, before Yew gets around to re-rendering.
    let wizard = use_mut_ref(Wizard::new);
    let redraw = use_force_update();

    let oninput = {
        let wizard = wizard.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Err(err) = wizard.borrow_mut().set_field(input.value()) {
                debug!(format!("edit ignored: {err}"));
            }
            redraw.force_update();
        })
    };

    let onsubmit = {
        let wizard = wizard.clone();
        let redraw = redraw.clone();
        let client = props.client.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let entry = match wizard.borrow_mut().begin_submit() {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(format!("submit ignored: {err}"));
                    return;
                }
            };
            redraw.force_update();

            let wizard = wizard.clone();
            let redraw = redraw.clone();
            let client = client.clone();
            spawn_local(async move {
                let outcome = client.join_waitlist(&entry).await;
                if let Err(err) = &outcome {
                    error!(format!("joinWaitlist failed: {err}"));
                }
                let settled = wizard.borrow_mut().finish_submit(&outcome);
                match settled {
                    Ok(stage) => log!(format!("waitlist stage: {stage}")),
                    Err(err) => debug!(format!("stale submission result: {err}")),
                }
                redraw.force_update();
            });
        })
    };

    let onskip = {
        let wizard = wizard.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let skipped = wizard.borrow_mut().skip();
            match skipped {
                Ok(stage) => log!(format!("waitlist step skipped, now at {stage}")),
                Err(err) => debug!(format!("skip ignored: {err}")),
            }
            redraw.force_update();
        })
    };

    let snapshot = wizard.borrow().clone();
    let stage = snapshot.stage();
    let loading = snapshot.is_loading();

    let body = if stage.is_terminal() {
        html! {
            <div class="success" role="status" aria-live="polite">
                <div class="check" aria-hidden="true">{ "✓" }</div>
                <p class="fine">{ format!("Priority access for {}", snapshot.email()) }</p>
            </div>
        }
    } else {
        let submit_label = if loading {
            html! { <span class="spinner" aria-hidden="true"></span> }
        } else if stage == Stage::Socials {
            html! { { stage.submit_label() } }
        } else {
            html! { <>{ stage.submit_label() }{ " →" }</> }
        };

        html! {
            <form class="step" {onsubmit} aria-label={format!("{stage} submission form")}>
                <input
                    id={format!("{stage}-input")}
                    type={stage.input_type()}
                    placeholder={stage.placeholder()}
                    autocomplete={stage.autocomplete()}
                    value={snapshot.field(stage).to_string()}
                    required={stage == Stage::Email}
                    disabled={loading}
                    {oninput}
                />
                <button type="submit" class="btn" disabled={loading}>{ submit_label }</button>
                if stage.is_skippable() {
                    <button type="button" class="skip" disabled={loading} onclick={onskip}>
                        { "Skip this step" }
                    </button>
                }
            </form>
        }
    };

    html! {
        <div class="landing">
            <div class="noise" aria-hidden="true"></div>
            <LandingNav />

            <div class="backdrop" aria-hidden="true">
                <h1 class="massive">{ "SOMETHING" }<br />{ "AMAZING" }<br />{ "IS COMING" }</h1>
            </div>

            <main id="waitlist" class="waitlist" aria-label="Waitlist signup form">
                <div class="card glass">
                    <h2 class="card-t">{ stage.title() }</h2>
                    <p class="card-p">{ stage.subtitle() }</p>

                    { body }

                    <footer class="features">
                        { for FEATURES.iter().map(|f| html! { <span key={*f}>{ *f }</span> }) }
                    </footer>
                </div>
            </main>
        </div>
    }
}
