use leptos::prelude::*;

use crate::shared::errors::AppError;
use crate::shared::forms::{FlagBinding, TextBinding};
use crate::shared::i18n::use_language;

#[component]
pub fn TextField(
    #[prop(into)]
    label: Signal<String>,
    bind: TextBinding,
    /// HTML input type; `text` when omitted
    #[prop(optional)]
    input_type: &'static str,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    view! {
        <label class="form-field">
            <span class="form-field__label">
                {move || label.get()}
                {required.then_some(" *")}
            </span>
            <input
                class="form-field__input"
                type=input_type
                prop:value=move || bind.value.get()
                on:input=move |ev| bind.set.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(#[prop(into)] label: Signal<String>, bind: TextBinding) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{move || label.get()}</span>
            <textarea
                class="form-field__input"
                rows="4"
                prop:value=move || bind.value.get()
                on:input=move |ev| bind.set.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)]
    label: Signal<String>,
    bind: TextBinding,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{move || label.get()}</span>
            <select
                class="form-field__input"
                prop:value=move || bind.value.get()
                on:change=move |ev| bind.set.run(event_target_value(&ev))
            >
                {move || options.get().into_iter().map(|(value, text)| {
                    let selected_value = value.clone();
                    view! {
                        <option value=value selected=move || bind.value.get() == selected_value>{text}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn CheckField(#[prop(into)] label: Signal<String>, bind: FlagBinding) -> impl IntoView {
    view! {
        <label class="form-field form-field--check">
            <input
                type="checkbox"
                prop:checked=move || bind.checked.get()
                on:change=move |ev| bind.set.run(event_target_checked(&ev))
            />
            <span class="form-field__label">{move || label.get()}</span>
        </label>
    }
}

/// Error under a form, if any.
#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<AppError>>) -> impl IntoView {
    let lang = use_language();
    move || {
        error.get().map(|e| {
            view! { <div class="form-error" role="alert">{e.user_message(lang.get())}</div> }
        })
    }
}
