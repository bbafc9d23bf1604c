use contracts::domain::a101_freelancer_profile::aggregate::FreelancerProfile;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a101_freelancer_profile::api;
use crate::domain::a101_freelancer_profile::model::ProfileForm;
use crate::shared::components::form_field::{FormError, TextAreaField, TextField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{format_value, StatCard};
use crate::shared::forms::{bind_text, parse_number, AfterSuccess, FormDraft};
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::list_view_state;
use crate::shared::query::{use_entity, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn FreelancerProfileDetails() -> impl IntoView {
    let tx = Texts::of("profile");
    let profile = use_entity::<FreelancerProfile>(
        api::PROFILE,
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(FormDraft::<ProfileForm>::default());

    // Follow the server copy unless the user is in the middle of an edit.
    Effect::new(move |_| {
        let loaded = profile.data.get();
        if let Some(p) = loaded {
            if !editing.get_untracked() {
                draft.set(FormDraft::new(ProfileForm::from_profile(&p)));
            }
        }
    });

    let state = Signal::derive(move || {
        let present = profile.data.with(|p| usize::from(p.is_some()));
        list_view_state(
            profile.is_loading.get(),
            profile.error.get().as_ref(),
            present,
            present,
        )
    });
    let completeness = Signal::derive(move || {
        profile
            .data
            .with(|p| p.as_ref().map(FreelancerProfile::completeness_percent))
            .unwrap_or_default()
    });

    let save = move || {
        let lang = tx.lang();
        let payload = mutation.submission(draft, |v| v.validate(lang));
        let Some(form) = payload else {
            return;
        };
        mutation.dispatch(
            api::save_profile(&form.to_dto()),
            MutationMessages::new(tx.get("saved"), tx.get("save_failed")),
            move |result| {
                draft.try_update(|d| d.settle(&result, AfterSuccess::Keep));
                if result.is_ok() {
                    editing.try_set(false);
                }
            },
        );
    };

    let discard = move || {
        editing.set(false);
        if let Some(p) = profile.data.get_untracked() {
            draft.set(FormDraft::new(ProfileForm::from_profile(&p)));
        }
    };

    let field = move |key: &'static str, value: String| {
        view! {
            <div class="profile-field">
                <span class="profile-field__label">{move || tx.get(key)}</span>
                <span class="profile-field__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">{move || tx.get("title")}</h2>
                <Space>
                    {view! {
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || profile.data.with(Option::is_none))
                                on_click=move |_| editing.set(true)
                            >
                                {icon("settings")}
                                " "
                                {move || tx.get("edit")}
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || mutation.is_pending())
                            on_click=move |_| save()
                        >
                            {icon("check")}
                            " "
                            {move || tx.common("save")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| discard()
                        >
                            {move || tx.common("cancel")}
                        </Button>
                    </Show>
                    }.into_any()}
                </Space>
            </Flex>

            <ListStateView state=state empty_text=tx.signal("empty")>
                <div class="stat-grid">
                    <StatCard
                        label=tx.signal("completeness")
                        icon_name="user"
                        value=completeness
                        format=ValueFormat::Percent { decimals: 0 }
                        status=Signal::derive(move || {
                            if completeness.get() >= 80.0 {
                                IndicatorStatus::Good
                            } else {
                                IndicatorStatus::Warning
                            }
                        })
                    />
                    <StatCard
                        label=tx.signal("rating")
                        icon_name="star"
                        value=Signal::derive(move || profile.data.with(|p| p.as_ref().map(|p| p.rating).unwrap_or_default()))
                        format=ValueFormat::Number { decimals: 1 }
                        subtitle=Signal::derive(|| "/5".to_string())
                    />
                    <StatCard
                        label=tx.signal("total_students")
                        icon_name="users"
                        value=Signal::derive(move || {
                            profile.data.with(|p| p.as_ref().map(|p| f64::from(p.total_students)).unwrap_or_default())
                        })
                        format=ValueFormat::Integer
                    />
                </div>

                <Show
                    when=move || editing.get()
                    fallback=move || {
                        let form = draft.with(|d| d.value.clone());
                        let rate = format_value(form.dto.hourly_rate, &ValueFormat::fcfa());
                        view! {
                            <div class="profile-card">
                                {field("first_name", form.dto.first_name)}
                                {field("last_name", form.dto.last_name)}
                                {field("email", form.dto.email)}
                                {field("phone", form.dto.phone)}
                                {field("location", form.dto.location)}
                                {field("hourly_rate", rate)}
                                {field("experience_years", form.dto.experience_years.to_string())}
                                {field("specializations", form.specializations)}
                                {field("languages", form.languages)}
                                {field("bio", form.dto.bio)}
                            </div>
                        }
                    }
                >
                    <div class="form-card">
                        <div class="form-grid">
                            <TextField
                                label=tx.signal("first_name")
                                bind=bind_text(draft, |f| f.dto.first_name.clone(), |f, v| f.dto.first_name = v)
                                required=true
                            />
                            <TextField
                                label=tx.signal("last_name")
                                bind=bind_text(draft, |f| f.dto.last_name.clone(), |f, v| f.dto.last_name = v)
                                required=true
                            />
                            <TextField
                                label=tx.signal("email")
                                bind=bind_text(draft, |f| f.dto.email.clone(), |f, v| f.dto.email = v)
                                input_type="email"
                                required=true
                            />
                            <TextField
                                label=tx.signal("phone")
                                bind=bind_text(draft, |f| f.dto.phone.clone(), |f, v| f.dto.phone = v)
                                input_type="tel"
                            />
                            <TextField
                                label=tx.signal("location")
                                bind=bind_text(draft, |f| f.dto.location.clone(), |f, v| f.dto.location = v)
                            />
                            <TextField
                                label=tx.signal("hourly_rate")
                                bind=bind_text(
                                    draft,
                                    |f| f.dto.hourly_rate.to_string(),
                                    |f, v| f.dto.hourly_rate = parse_number(&v),
                                )
                                input_type="number"
                            />
                            <TextField
                                label=tx.signal("experience_years")
                                bind=bind_text(
                                    draft,
                                    |f| f.dto.experience_years.to_string(),
                                    |f, v| f.dto.experience_years = parse_number(&v),
                                )
                                input_type="number"
                            />
                            <TextField
                                label=tx.signal("specializations")
                                bind=bind_text(draft, |f| f.specializations.clone(), |f, v| f.specializations = v)
                            />
                            <TextField
                                label=tx.signal("languages")
                                bind=bind_text(draft, |f| f.languages.clone(), |f, v| f.languages = v)
                            />
                        </div>
                        <TextAreaField
                            label=tx.signal("bio")
                            bind=bind_text(draft, |f| f.dto.bio.clone(), |f, v| f.dto.bio = v)
                        />
                        <FormError error=Signal::derive(move || draft.with(|d| d.error.clone())) />
                    </div>
                </Show>
            </ListStateView>
        </div>
    }
}
