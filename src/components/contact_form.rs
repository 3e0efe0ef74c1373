use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::validator::{validate, FieldError, FieldKind};
use crate::overlay::manager::Variant;
use crate::Overlays;

#[derive(Serialize, Clone, Debug)]
struct ContactPayload {
    name: String,
    email: String,
    message: String,
}

/// Failure branch of the simulated delivery. Kept for parity with a real
/// transport; never constructed.
#[derive(Debug)]
pub struct SubmitError;

// Stand-in for the network round trip: waits, logs the payload, succeeds.
async fn deliver(payload: &ContactPayload) -> Result<(), SubmitError> {
    TimeoutFuture::new(config::SUBMIT_SIMULATED_DELAY_MS).await;
    let body = serde_json::to_string(payload).unwrap_or_default();
    log!("contact form payload:", body);
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitPhase {
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitPhase {
    fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Sending => "Sending...",
            SubmitPhase::Sent => "Message Sent!",
            SubmitPhase::Failed => "Error - Try Again",
        }
    }

    fn button_class(self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some("sending"),
            SubmitPhase::Sent => Some("sent"),
            SubmitPhase::Failed => Some("failed"),
        }
    }
}

fn error_hint(error: Option<FieldError>) -> Html {
    match error {
        Some(err) => html! { <div class="error-message">{ err.message() }</div> },
        None => html! {},
    }
}

fn group_class(error: Option<FieldError>) -> Classes {
    classes!("form-group", error.map(|_| "error"))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let overlays = use_context::<Overlays>().expect("overlay context not provided");

    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let name_error = use_state(|| None::<FieldError>);
    let email_error = use_state(|| None::<FieldError>);
    let message_error = use_state(|| None::<FieldError>);
    let phase = use_state(|| SubmitPhase::Idle);

    let on_name_blur = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |e: FocusEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            name_error.set(validate(FieldKind::Text, true, &value).err());
            name.set(value);
        })
    };
    let on_name_input = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
            name_error.set(None);
        })
    };

    let on_email_blur = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: FocusEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            email_error.set(validate(FieldKind::Email, true, &value).err());
            email.set(value);
        })
    };
    let on_email_input = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
            email_error.set(None);
        })
    };

    let on_message_blur = {
        let message = message.clone();
        let message_error = message_error.clone();
        Callback::from(move |e: FocusEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            message_error.set(validate(FieldKind::Text, true, &value).err());
            message.set(value);
        })
    };
    let on_message_input = {
        let message = message.clone();
        let message_error = message_error.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
            message_error.set(None);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let message_error = message_error.clone();
        let phase = phase.clone();
        let overlays = overlays.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *phase != SubmitPhase::Idle {
                return;
            }

            let name_check = validate(FieldKind::Text, true, &name);
            let email_check = validate(FieldKind::Email, true, &email);
            let message_check = validate(FieldKind::Text, true, &message);
            name_error.set(name_check.err());
            email_error.set(email_check.err());
            message_error.set(message_check.err());
            if name_check.is_err() || email_check.is_err() || message_check.is_err() {
                return;
            }

            let payload = ContactPayload {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            phase.set(SubmitPhase::Sending);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let phase = phase.clone();
            let overlays = overlays.clone();
            spawn_local(async move {
                match deliver(&payload).await {
                    Ok(()) => {
                        phase.set(SubmitPhase::Sent);
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        overlays.notify("Message sent successfully!", Variant::Success);
                    }
                    Err(_) => {
                        phase.set(SubmitPhase::Failed);
                        overlays.notify("Failed to send message. Please try again.", Variant::Error);
                    }
                }
                TimeoutFuture::new(config::SUBMIT_RESET_DELAY_MS).await;
                phase.set(SubmitPhase::Idle);
            });
        })
    };

    html! {
        <form class="form" novalidate=true onsubmit={onsubmit}>
            <div class={group_class(*name_error)}>
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    required=true
                    value={(*name).clone()}
                    onblur={on_name_blur}
                    oninput={on_name_input}
                />
                { error_hint(*name_error) }
            </div>
            <div class={group_class(*email_error)}>
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    required=true
                    value={(*email).clone()}
                    onblur={on_email_blur}
                    oninput={on_email_input}
                />
                { error_hint(*email_error) }
            </div>
            <div class={group_class(*message_error)}>
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    required=true
                    value={(*message).clone()}
                    onblur={on_message_blur}
                    oninput={on_message_input}
                />
                { error_hint(*message_error) }
            </div>
            <button
                type="submit"
                class={classes!("btn-primary", phase.button_class())}
                disabled={*phase != SubmitPhase::Idle}
            >
                { phase.button_label() }
            </button>
        </form>
    }
}
