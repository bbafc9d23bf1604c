use contracts::domain::a107_teaching_zone::aggregate::{CreateZoneDto, TeachingZone, TrackedStudent};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::GeolocationPosition;

use crate::domain::a107_teaching_zone::api;
use crate::domain::a107_teaching_zone::model::{
    self, ZoneDraft, ACTIVE_STUDENTS, COMPLETED, STUDENTS_TODAY,
};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::form_field::{FormError, SelectField, TextAreaField, TextField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::date_utils::format_datetime;
use crate::shared::forms::{bind_text, validation_notice, AfterSuccess, FormDraft};
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::notifications::use_notifications;
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

/// One-shot browser position lookup.
fn locate(on_found: impl FnOnce(f64, f64) + 'static, on_error: impl FnOnce(String) + 'static) {
    let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());
    let Some(geolocation) = geolocation else {
        on_error("geolocation unavailable".to_string());
        return;
    };
    let success = Closure::once_into_js(move |value: JsValue| {
        match value.dyn_into::<GeolocationPosition>() {
            Ok(position) => {
                let coords = position.coords();
                on_found(coords.latitude(), coords.longitude());
            }
            Err(_) => log::warn!("unexpected geolocation payload"),
        }
    });
    let failure = Closure::once_into_js(move |e: JsValue| on_error(format!("{:?}", e)));
    if let Err(e) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
    ) {
        log::error!("getCurrentPosition failed: {:?}", e);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn GeolocationView() -> impl IntoView {
    let tx = Texts::of("geolocation");
    let signed_in = use_signed_in();
    let zones = use_entity_list::<TeachingZone>(
        api::ZONES,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(signed_in),
    );
    let students = use_entity_list::<TrackedStudent>(
        api::TRACKED_STUDENTS,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(signed_in),
    );
    let mutation = use_mutation();
    let create_target = StoredValue::new(api::create_zone(&CreateZoneDto::default()));
    let notifications = use_notifications();

    let context = StoredValue::new(FilterContext::now());
    let zone_filter = RwSignal::new(FilterState::default());
    let student_filter = RwSignal::new(FilterState::default());

    let visible_zones = Memo::new(move |_| {
        zones.data.with(|items| {
            zone_filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let visible_students = Memo::new(move |_| {
        students.data.with(|items| {
            student_filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let zone_stats = Memo::new(move |_| {
        zones
            .data
            .with(|items| context.with_value(|ctx| TeachingZone::summarize(items, ctx)))
    });
    let student_stats = Memo::new(move |_| {
        students
            .data
            .with(|items| context.with_value(|ctx| TrackedStudent::summarize(items, ctx)))
    });
    let zone_state = Signal::derive(move || {
        list_view_state(
            zones.is_loading.get(),
            zones.error.get().as_ref(),
            zones.data.with(Vec::len),
            visible_zones.with(Vec::len),
        )
    });
    let student_state = Signal::derive(move || {
        list_view_state(
            students.is_loading.get(),
            students.error.get().as_ref(),
            students.data.with(Vec::len),
            visible_students.with(Vec::len),
        )
    });

    let show_form = RwSignal::new(false);
    let locating = RwSignal::new(false);
    let draft = RwSignal::new(FormDraft::<ZoneDraft>::default());

    let use_my_position = move || {
        locating.set(true);
        locate(
            move |lat, lng| {
                locating.try_set(false);
                draft.try_update(|d| {
                    d.value.lat = format!("{:.6}", lat);
                    d.value.lng = format!("{:.6}", lng);
                });
            },
            move |e| {
                log::warn!("position lookup failed: {}", e);
                locating.try_set(false);
                notifications.error(tx.get("position_failed"), String::new());
            },
        );
    };

    let submit = move || {
        let lang = tx.lang();
        let Some(converted) = draft.try_update(|d| {
            let converted = d.value.to_dto(lang);
            d.error = converted.as_ref().err().cloned();
            converted
        }) else {
            return;
        };
        let dto = match converted {
            Ok(dto) => dto,
            Err(e) => {
                let (title, body) = validation_notice(&e, lang);
                notifications.error(title, body);
                return;
            }
        };
        mutation.dispatch(
            api::create_zone(&dto),
            MutationMessages::new(tx.get("zone_created"), tx.get("create_failed")),
            move |result| {
                draft.try_update(|d| d.settle(&result, AfterSuccess::Reset));
                if result.is_ok() {
                    show_form.try_set(false);
                }
            },
        );
    };

    let remove = move |zone: &TeachingZone| {
        let question = tx.get("confirm_delete").replace("{name}", &zone.name);
        if !confirm_action(&question) {
            return;
        }
        mutation.dispatch(
            api::delete_zone(zone.id),
            MutationMessages::new(tx.get("zone_deleted"), tx.get("delete_failed")),
            |_| {},
        );
    };

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">{move || tx.get("title")}</h2>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_form.update(|open| *open = !*open)
                    >
                        {icon("plus")}
                        " "
                        {move || tx.get("add_zone")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            zones.refresh();
                            students.refresh();
                        }
                    >
                        {icon("refresh")}
                        " "
                        {move || tx.common("refresh")}
                    </Button>
                </Space>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("zones")
                    icon_name="map-pin"
                    value=metric(zone_stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("students_today")
                    icon_name="users"
                    value=metric(zone_stats, STUDENTS_TODAY)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("active_students")
                    icon_name="activity"
                    value=metric(student_stats, ACTIVE_STUDENTS)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("completed")
                    icon_name="check"
                    value=metric(student_stats, COMPLETED)
                    format=ValueFormat::Integer
                />
            </div>

            <Show when=move || show_form.get()>
                <div class="form-card">
                    <h3>{move || tx.get("new_zone")}</h3>
                    <div class="form-grid">
                        <TextField
                            label=tx.signal("zone_name")
                            bind=bind_text(draft, |d| d.name.clone(), |d, v| d.name = v)
                            required=true
                        />
                        <SelectField
                            label=tx.signal("kind")
                            bind=bind_text(draft, |d| d.kind.clone(), |d, v| d.kind = v)
                            options=translated_options(tx, "kind_", &model::ZONE_KINDS)
                        />
                        <TextField
                            label=tx.signal("latitude")
                            bind=bind_text(draft, |d| d.lat.clone(), |d, v| d.lat = v)
                            required=true
                        />
                        <TextField
                            label=tx.signal("longitude")
                            bind=bind_text(draft, |d| d.lng.clone(), |d, v| d.lng = v)
                            required=true
                        />
                        <TextField
                            label=tx.signal("radius")
                            bind=bind_text(draft, |d| d.radius.clone(), |d, v| d.radius = v)
                            input_type="number"
                        />
                    </div>
                    <TextAreaField
                        label=tx.signal("description")
                        bind=bind_text(draft, |d| d.description.clone(), |d, v| d.description = v)
                    />
                    <FormError error=Signal::derive(move || draft.with(|d| d.error.clone())) />
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || locating.get())
                            on_click=move |_| use_my_position()
                        >
                            {icon("map-pin")}
                            " "
                            {move || tx.get("use_my_position")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || create_target.with_value(|r| mutation.is_pending_for(r)))
                            on_click=move |_| submit()
                        >
                            {move || tx.common("save")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| show_form.set(false)
                        >
                            {move || tx.common("cancel")}
                        </Button>
                    </Space>
                </div>
            </Show>

            <h3 class="module-view__section">{move || tx.get("zones")}</h3>
            <FilterBar
                filter=zone_filter
                options=translated_options(tx, "kind_", &model::ZONE_KINDS)
                search_placeholder=tx.signal("search_zones")
            />
            <ListStateView state=zone_state empty_text=tx.signal("no_zones")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=180.0>{move || tx.get("zone_name")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("kind")}</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>{move || tx.get("position")}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || tx.get("radius")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("students_today")}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible_zones.get().into_iter().map(|zone| {
                            let delete_request = api::delete_zone(zone.id);
                            let kind = tx.get(&format!("kind_{}", zone.kind));
                            let position = format!(
                                "{:.4}, {:.4}",
                                zone.coordinates.lat, zone.coordinates.lng
                            );
                            let radius = format!("{:.0} m", zone.radius);
                            let name = zone.name.clone();
                            let students_today = zone.students_today;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{kind}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{position}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{radius}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{students_today}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || {
                                                    mutation.is_pending_for(&delete_request)
                                                })
                                                on_click=move |_| remove(&zone)
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </ListStateView>

            <h3 class="module-view__section">{move || tx.get("students")}</h3>
            <FilterBar
                filter=student_filter
                options=translated_options(tx, "student_", &model::STUDENT_STATUSES)
                search_placeholder=tx.signal("search_students")
            />
            <ListStateView state=student_state empty_text=tx.signal("no_students")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=180.0>{move || tx.get("student")}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || tx.get("subject")}</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>{move || tx.get("location")}</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>{move || tx.get("last_update")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("status")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible_students.get().into_iter().map(|student| {
                            let status_label = tx.get(&format!("student_{}", student.status));
                            let badge = format!("badge badge--{}", student.status);
                            let updated = format_datetime(&student.last_update);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{student.student_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{student.subject}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{student.location}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{updated}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class=badge>{status_label}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </ListStateView>
        </div>
    }
}
