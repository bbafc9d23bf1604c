use contracts::domain::a206_platform_settings::aggregate::{SecuritySettings, SystemSettings};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a206_platform_settings::api;
use crate::domain::a206_platform_settings::model::{validate_security, validate_system};
use crate::shared::components::form_field::{CheckField, FormError, TextField};
use crate::shared::errors::AppError;
use crate::shared::components::list_state::ListStateView;
use crate::shared::forms::{bind_flag, bind_text, parse_number, AfterSuccess, FormDraft};
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{list_view_state, ListViewState};
use crate::shared::query::{
    use_entity, use_mutation, EntityList, FetchOptions, MutationHandle, MutationMessages,
    MutationRequest,
};
use crate::system::auth::context::use_signed_in;

/// Form state following the server copy of a settings object.
fn synced_draft<T>(source: EntityList<Option<T>>) -> RwSignal<FormDraft<T>>
where
    T: Clone + Default + PartialEq + Send + Sync + 'static,
{
    let draft = RwSignal::new(FormDraft::<T>::default());
    Effect::new(move |_| {
        if let Some(value) = source.data.get() {
            draft.set(FormDraft::new(value));
        }
    });
    draft
}

fn object_state<T: Send + Sync + 'static>(source: EntityList<Option<T>>) -> Signal<ListViewState> {
    Signal::derive(move || {
        let present = source.data.with(|v| usize::from(v.is_some()));
        list_view_state(
            source.is_loading.get(),
            source.error.get().as_ref(),
            present,
            present,
        )
    })
}

/// Validate, then PUT; the form keeps its values whatever the outcome.
fn save_section<T>(
    mutation: MutationHandle,
    draft: RwSignal<FormDraft<T>>,
    validate: impl FnOnce(&T) -> Result<(), AppError>,
    request: fn(&T) -> MutationRequest,
    messages: MutationMessages,
) where
    T: Clone + Default + Send + Sync + 'static,
{
    let Some(value) = mutation.submission(draft, validate) else {
        return;
    };
    mutation.dispatch(request(&value), messages, move |result| {
        draft.try_update(|d| d.settle(&result, AfterSuccess::Keep));
    });
}

#[component]
#[allow(non_snake_case)]
fn SectionActions(
    #[prop(into)] pending: Signal<bool>,
    on_save: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let tx = Texts::of("settings");
    view! {
        <Space>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=pending
                on_click=move |_| on_save.run(())
            >
                {icon("check")}
                " "
                {move || tx.common("save")}
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_reset.run(())
            >
                {move || tx.get("reset")}
            </Button>
        </Space>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PlatformSettingsView() -> impl IntoView {
    let tx = Texts::of("settings");
    let signed_in = use_signed_in();
    let system = use_entity::<SystemSettings>(api::SYSTEM_SETTINGS, FetchOptions::enabled_when(signed_in));
    let security =
        use_entity::<SecuritySettings>(api::SECURITY_SETTINGS, FetchOptions::enabled_when(signed_in));
    let mutation = use_mutation();

    let system_draft = synced_draft(system);
    let security_draft = synced_draft(security);

    let save_system = move || {
        let lang = tx.lang();
        save_section(
            mutation,
            system_draft,
            |s| validate_system(s, lang),
            api::save_system,
            MutationMessages::new(tx.get("saved"), tx.get("save_failed")),
        );
    };
    let save_security = move || {
        save_section(
            mutation,
            security_draft,
            validate_security,
            api::save_security,
            MutationMessages::new(tx.get("saved"), tx.get("save_failed")),
        );
    };
    let reset_system = move || {
        if let Some(s) = system.data.get_untracked() {
            system_draft.set(FormDraft::new(s));
        }
    };
    let reset_security = move || {
        if let Some(s) = security.data.get_untracked() {
            security_draft.set(FormDraft::new(s));
        }
    };

    // Pending state depends on the target only, not on the body.
    let system_write = api::save_system(&SystemSettings::default());
    let security_write = api::save_security(&SecuritySettings::default());
    let system_pending = Signal::derive(move || mutation.is_pending_for(&system_write));
    let security_pending = Signal::derive(move || mutation.is_pending_for(&security_write));

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">{move || tx.get("title")}</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        system.refresh();
                        security.refresh();
                    }
                >
                    {icon("refresh")}
                    " "
                    {move || tx.common("refresh")}
                </Button>
            </Flex>

            <div class="form-card">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3>{icon("settings")} " " {move || tx.get("system")}</h3>
                    <SectionActions
                        pending=system_pending
                        on_save=Callback::new(move |_| save_system())
                        on_reset=Callback::new(move |_| reset_system())
                    />
                </Flex>
                <ListStateView state=object_state(system) empty_text=tx.signal("empty")>
                    <h4>{move || tx.get("platform")}</h4>
                    <div class="form-grid">
                        <TextField
                            label=tx.signal("site_name")
                            bind=bind_text(system_draft, |s| s.platform.site_name.clone(), |s, v| s.platform.site_name = v)
                            required=true
                        />
                        <TextField
                            label=tx.signal("version")
                            bind=bind_text(system_draft, |s| s.platform.version.clone(), |s, v| s.platform.version = v)
                        />
                        <TextField
                            label=tx.signal("environment")
                            bind=bind_text(system_draft, |s| s.platform.environment.clone(), |s, v| s.platform.environment = v)
                        />
                        <CheckField
                            label=tx.signal("maintenance")
                            bind=bind_flag(system_draft, |s| s.platform.maintenance, |s, v| s.platform.maintenance = v)
                        />
                    </div>
                    <h4>{move || tx.get("features")}</h4>
                    <div class="form-grid">
                        <CheckField
                            label=tx.signal("registration_open")
                            bind=bind_flag(system_draft, |s| s.features.registration_open, |s, v| s.features.registration_open = v)
                        />
                        <CheckField
                            label=tx.signal("payment_processing")
                            bind=bind_flag(system_draft, |s| s.features.payment_processing, |s, v| s.features.payment_processing = v)
                        />
                        <CheckField
                            label=tx.signal("geo_location")
                            bind=bind_flag(system_draft, |s| s.features.geo_location, |s, v| s.features.geo_location = v)
                        />
                        <CheckField
                            label=tx.signal("whatsapp_integration")
                            bind=bind_flag(system_draft, |s| s.features.whatsapp_integration, |s, v| s.features.whatsapp_integration = v)
                        />
                        <CheckField
                            label=tx.signal("sms_notifications")
                            bind=bind_flag(system_draft, |s| s.features.sms_notifications, |s, v| s.features.sms_notifications = v)
                        />
                    </div>
                    <h4>{move || tx.get("limits")}</h4>
                    <div class="form-grid">
                        <TextField
                            label=tx.signal("max_users_per_school")
                            bind=bind_text(
                                system_draft,
                                |s| s.limits.max_users_per_school.to_string(),
                                |s, v| s.limits.max_users_per_school = parse_number(&v),
                            )
                            input_type="number"
                        />
                        <TextField
                            label=tx.signal("max_schools_per_commercial")
                            bind=bind_text(
                                system_draft,
                                |s| s.limits.max_schools_per_commercial.to_string(),
                                |s, v| s.limits.max_schools_per_commercial = parse_number(&v),
                            )
                            input_type="number"
                        />
                        <TextField
                            label=tx.signal("api_rate_limit")
                            bind=bind_text(
                                system_draft,
                                |s| s.limits.api_rate_limit.to_string(),
                                |s, v| s.limits.api_rate_limit = parse_number(&v),
                            )
                            input_type="number"
                        />
                        <TextField
                            label=tx.signal("file_upload_limit")
                            bind=bind_text(
                                system_draft,
                                |s| s.limits.file_upload_limit.to_string(),
                                |s, v| s.limits.file_upload_limit = parse_number(&v),
                            )
                            input_type="number"
                        />
                    </div>
                    <FormError error=Signal::derive(move || system_draft.with(|d| d.error.clone())) />
                </ListStateView>
            </div>

            <div class="form-card">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3>{icon("shield")} " " {move || tx.get("security")}</h3>
                    <SectionActions
                        pending=security_pending
                        on_save=Callback::new(move |_| save_security())
                        on_reset=Callback::new(move |_| reset_security())
                    />
                </Flex>
                <ListStateView state=object_state(security) empty_text=tx.signal("empty")>
                    <h4>{move || tx.get("authentication")}</h4>
                    <div class="form-grid">
                        <CheckField
                            label=tx.signal("two_factor_required")
                            bind=bind_flag(security_draft, |s| s.authentication.two_factor_required, |s, v| s.authentication.two_factor_required = v)
                        />
                        <TextField
                            label=tx.signal("session_timeout")
                            bind=bind_text(
                                security_draft,
                                |s| s.authentication.session_timeout.to_string(),
                                |s, v| s.authentication.session_timeout = parse_number(&v),
                            )
                            input_type="number"
                        />
                        <TextField
                            label=tx.signal("password_min_length")
                            bind=bind_text(
                                security_draft,
                                |s| s.authentication.password_min_length.to_string(),
                                |s, v| s.authentication.password_min_length = parse_number(&v),
                            )
                            input_type="number"
                        />
                        <TextField
                            label=tx.signal("max_login_attempts")
                            bind=bind_text(
                                security_draft,
                                |s| s.authentication.max_login_attempts.to_string(),
                                |s, v| s.authentication.max_login_attempts = parse_number(&v),
                            )
                            input_type="number"
                        />
                    </div>
                    <h4>{move || tx.get("permissions")}</h4>
                    <div class="form-grid">
                        <CheckField
                            label=tx.signal("strict_role_access")
                            bind=bind_flag(security_draft, |s| s.permissions.strict_role_access, |s, v| s.permissions.strict_role_access = v)
                        />
                        <CheckField
                            label=tx.signal("admin_approval_required")
                            bind=bind_flag(security_draft, |s| s.permissions.admin_approval_required, |s, v| s.permissions.admin_approval_required = v)
                        />
                        <CheckField
                            label=tx.signal("audit_logging")
                            bind=bind_flag(security_draft, |s| s.permissions.audit_logging, |s, v| s.permissions.audit_logging = v)
                        />
                    </div>
                    <h4>{move || tx.get("encryption")}</h4>
                    <div class="form-grid">
                        <CheckField
                            label=tx.signal("data_at_rest")
                            bind=bind_flag(security_draft, |s| s.encryption.data_at_rest, |s, v| s.encryption.data_at_rest = v)
                        />
                        <CheckField
                            label=tx.signal("data_in_transit")
                            bind=bind_flag(security_draft, |s| s.encryption.data_in_transit, |s, v| s.encryption.data_in_transit = v)
                        />
                        <TextField
                            label=tx.signal("token_expiry")
                            bind=bind_text(
                                security_draft,
                                |s| s.encryption.token_expiry.to_string(),
                                |s, v| s.encryption.token_expiry = parse_number(&v),
                            )
                            input_type="number"
                        />
                    </div>
                    <FormError error=Signal::derive(move || security_draft.with(|d| d.error.clone())) />
                </ListStateView>
            </div>
        </div>
    }
}
