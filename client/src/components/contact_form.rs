//! Contact section with an inline-validated form.
//!
//! Submission is simulated: a valid form goes busy for
//! [`SUBMIT_LATENCY_MS`], then resets and shows a success notice for
//! [`SUCCESS_NOTICE_MS`]. Both timers die with the component.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[cfg(feature = "hydrate")]
use crate::consts::{SUBMIT_LATENCY_MS, SUCCESS_NOTICE_MS};
use crate::state::contact::{self, Field, SUCCESS_MESSAGE, SubmitOutcome};

#[cfg(feature = "hydrate")]
#[derive(Default)]
struct FormTimers {
    send: Option<gloo_timers::callback::Timeout>,
    notice: Option<gloo_timers::callback::Timeout>,
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(contact::ContactForm::new());

    #[cfg(feature = "hydrate")]
    let timers = StoredValue::new_local(FormTimers::default());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        timers.try_update_value(|t| {
            t.send.take();
            t.notice.take();
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = form.try_update(contact::ContactForm::submit);
        if outcome != Some(SubmitOutcome::Started) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let send = gloo_timers::callback::Timeout::new(SUBMIT_LATENCY_MS, move || {
                let Some(Some(ticket)) = form.try_update(contact::ContactForm::finish_submission) else {
                    return;
                };
                log::debug!("contact form sent (simulated)");
                let dismiss = gloo_timers::callback::Timeout::new(SUCCESS_NOTICE_MS, move || {
                    form.update(|f| {
                        f.dismiss_notice(ticket);
                    });
                });
                timers.update_value(|t| t.notice = Some(dismiss));
            });
            timers.update_value(|t| t.send = Some(send));
        }
    };

    let rows = Field::EVERY.into_iter().map(|field| field_row(form, field)).collect_view();

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">"Get in Touch"</h2>
                <form class="contact-form" novalidate=true on:submit=on_submit>
                    {rows}
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || form.with(contact::ContactForm::is_busy)
                    >
                        {move || form.with(contact::ContactForm::submit_label)}
                    </button>
                    <Show when=move || form.with(|f| f.notice().is_some())>
                        <div class="form-success" role="status">{SUCCESS_MESSAGE}</div>
                    </Show>
                </form>
            </div>
        </section>
    }
}

fn field_row(form: RwSignal<contact::ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_owned());
    let error = move || form.with(|f| f.error(field));
    let on_input = move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)));

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                class="form-control"
                class:error=move || error().is_some()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.key()
                name=field.key()
                type=input_type(field)
                class="form-control"
                class:error=move || error().is_some()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.key()>{field.label()}</label>
            {control}
            <span class="error-message" role="alert">{move || error().unwrap_or_default()}</span>
        </div>
    }
}

fn input_type(field: Field) -> &'static str {
    if field == Field::Email { "email" } else { "text" }
}
