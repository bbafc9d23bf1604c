use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::shared::api_utils::{api_url, resource_path};
use crate::shared::components::form_field::FormError;
use crate::shared::errors::AppError;
use crate::shared::forms::validation_notice;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::query::use_query_client;
use crate::shared::upload::upload_file;

/// File picker with a progress bar posting to `<resource>/upload`.
///
/// On success the resource is invalidated so mounted lists refetch.
#[component]
pub fn FileUpload(
    resource: &'static str,
    /// Text fields sent alongside the file
    #[prop(into)]
    fields: Signal<Vec<(&'static str, String)>>,
    /// `accept` attribute of the file input
    #[prop(optional)]
    accept: &'static str,
    /// Checks on the accompanying fields; nothing is sent when it fails
    #[prop(optional)]
    validate: Option<Callback<(), Result<(), AppError>>>,
    /// Called after the server accepted the file
    on_uploaded: Callback<()>,
    /// Extra inputs rendered above the file picker
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let tx = Texts::of("upload");
    let client = use_query_client();
    let notifications = use_notifications();

    let file = StoredValue::new_local(None::<File>);
    let file_name = RwSignal::new(String::new());
    let progress = RwSignal::new(None::<u8>);
    let error = RwSignal::new(None::<AppError>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        file_name.set(picked.as_ref().map(File::name).unwrap_or_default());
        file.set_value(picked);
    };

    let reject = move |e: AppError| {
        let (title, body) = validation_notice(&e, tx.lang());
        notifications.error(title, body);
        error.set(Some(e));
    };

    let start = move || {
        if progress.get_untracked().is_some() {
            return;
        }
        if let Some(check) = validate {
            if let Err(e) = check.run(()) {
                reject(e);
                return;
            }
        }
        let Some(selected) = file.get_value() else {
            reject(AppError::validation(tx.get("file_required")));
            return;
        };
        error.set(None);
        progress.set(Some(0));

        let url = api_url(&resource_path(resource, None, Some("upload")));
        let extra = fields.get_untracked();
        let client = client.with_value(|c| c.clone());
        let lang = tx.lang();
        spawn_local(async move {
            log::debug!("uploading {} to {}", selected.name(), url);
            let result = upload_file(&url, &selected, &extra, move |pct| {
                progress.try_set(Some(pct));
            })
            .await;
            let mounted = progress.try_get_untracked().is_some();
            match result {
                Ok(_) => {
                    client.invalidate(resource);
                    notifications.success(tx.get("uploaded"), selected.name());
                    if mounted {
                        file.try_update_value(|f| *f = None);
                        file_name.set(String::new());
                        progress.set(None);
                        on_uploaded.run(());
                    }
                }
                Err(e) => {
                    log::error!("upload to {} failed: {}", url, e);
                    let e = AppError::Mutation(e);
                    notifications.error(tx.get("upload_failed"), e.user_message(lang));
                    error.try_set(Some(e));
                    progress.try_set(None);
                }
            }
        });
    };

    view! {
        <div class="upload-panel">
            {children.map(|c| c())}
            <label class="upload-panel__picker">
                {icon("upload")}
                <span>
                    {move || {
                        let name = file_name.get();
                        if name.is_empty() { tx.get("choose_file") } else { name }
                    }}
                </span>
                <input
                    type="file"
                    class="upload-panel__input"
                    accept=accept
                    on:change=on_file_change
                />
            </label>
            {move || progress.get().map(|pct| view! {
                <div class="upload-panel__progress">
                    <progress max="100" value=pct.to_string()></progress>
                    <span>{format!("{}%", pct)}</span>
                </div>
            })}
            <FormError error=error />
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || progress.get().is_some())
                on_click=move |_| start()
            >
                {move || {
                    if progress.get().is_some() { tx.get("uploading") } else { tx.get("upload") }
                }}
            </Button>
        </div>
    }
}
