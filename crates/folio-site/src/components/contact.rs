//! Contact page: social links and the validated message form.

use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::{Acknowledgment, ContactForm, Field, FieldError, FormPhase};

use crate::state::{SinkHandle, SiteContext};

use super::icons::SocialLinkRow;
use super::page_title::PageTitle;

#[component]
pub fn ContactPage() -> Element {
    let ctx = use_context::<SiteContext>();
    let sink = use_context::<SinkHandle>();
    let palette = ctx.palette();

    // Fresh, empty form every time the page mounts.
    let mut form = use_signal(ContactForm::new);
    let mut ack = use_signal(Acknowledgment::new);

    let submitting = form.read().phase() == FormPhase::Submitting;
    let form_error = form.read().form_error().map(str::to_string);

    let on_submit = move |_: MouseEvent| {
        let submission = form.write().begin_submit();
        let Ok(values) = submission else {
            return;
        };
        let sink = sink.clone();
        spawn(async move {
            let result = sink.0.deliver(&values).await;
            let delivered = result.is_ok();
            form.write().finish_submit(result);
            if !delivered {
                return;
            }

            let timer = ack.write().show();
            let generation = timer.wait().await;
            ack.write().expire(generation);
        });
    };

    rsx! {
        section { class: "page contact-page",
            PageTitle { text: "Contact" }

            div {
                class: "glass-card contact-card",
                style: "background: {palette.paper};",

                SocialLinkRow { links: PROFILE.links, large: true }

                div { class: "contact-form",
                    for field in Field::ALL {
                        {
                            let value = form.read().value(field).to_string();
                            let error = form.read().visible_error(field);

                            rsx! {
                                FormField {
                                    key: "{field.name()}",
                                    field,
                                    value,
                                    error,
                                    disabled: submitting,
                                    oninput: move |text: String| form.write().set_field(field, text),
                                    onblur: move |_: ()| form.write().blur(field),
                                }
                            }
                        }
                    }

                    if let Some(message) = form_error {
                        div { class: "form-error", role: "alert", "{message}" }
                    }

                    button {
                        class: "submit-button",
                        style: "background: {palette.accent_gradient};",
                        disabled: submitting,
                        onclick: on_submit,
                        if submitting { "Sending..." } else { "Send Message" }
                    }
                }
            }

            if let Some(message) = ack.read().message() {
                div {
                    class: "snackbar",
                    role: "status",
                    onclick: move |_| ack.write().dismiss(),
                    "{message}"
                }
            }
        }
    }
}

/// Labelled input with its inline error. The message field is a textarea.
#[component]
fn FormField(
    field: Field,
    value: String,
    error: Option<FieldError>,
    disabled: bool,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let id = format!("contact-{}", field.name());
    let class = if error.is_some() { "form-field invalid" } else { "form-field" };
    let input_type = if field == Field::Email { "email" } else { "text" };

    rsx! {
        div { class: "{class}",
            label { r#for: "{id}", "{field.label()}" }
            if field == Field::Message {
                textarea {
                    id: "{id}",
                    name: "{field.name()}",
                    rows: "4",
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |evt| oninput.call(evt.value()),
                    onblur: move |_| onblur.call(()),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{field.name()}",
                    r#type: "{input_type}",
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |evt| oninput.call(evt.value()),
                    onblur: move |_| onblur.call(()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                        }
                    },
                }
            }
            if let Some(error) = error {
                div { class: "field-error", "{error}" }
            }
        }
    }
}
