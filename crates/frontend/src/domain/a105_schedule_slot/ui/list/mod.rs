use contracts::domain::a105_schedule_slot::aggregate::{CreateScheduleSlotDto, ScheduleSlot};
use contracts::shared::indicators::ValueFormat;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a105_schedule_slot::api;
use crate::domain::a105_schedule_slot::model::{self, ACTIVE, RECURRING, THIS_WEEK};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::form_field::{CheckField, FormError, SelectField, TextField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::date_utils::format_time_range;
use crate::shared::forms::{bind_flag, bind_text, parse_number, AfterSuccess, FormDraft};
use crate::shared::i18n::{day_name, Texts};
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

fn blank_slot() -> CreateScheduleSlotDto {
    CreateScheduleSlotDto {
        day_of_week: 1,
        recurring: true,
        kind: model::KINDS[0].to_string(),
        ..Default::default()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ScheduleSlotList() -> impl IntoView {
    let tx = Texts::of("schedule");
    let slots = use_entity_list::<ScheduleSlot>(
        api::SCHEDULE,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();
    let create_target = StoredValue::new(api::create_slot(&CreateScheduleSlotDto::default()));

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let visible = Memo::new(move |_| {
        let mut rows = slots.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        });
        rows.sort_by(|a, b| {
            a.day_of_week
                .cmp(&b.day_of_week)
                .then_with(|| a.start_time.cmp(&b.start_time))
        });
        rows
    });
    let stats = Memo::new(move |_| {
        slots
            .data
            .with(|items| context.with_value(|ctx| ScheduleSlot::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            slots.is_loading.get(),
            slots.error.get().as_ref(),
            slots.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let day_options = Signal::derive(move || {
        let lang = tx.lang();
        (1..=7u8)
            .map(|d| (d.to_string(), day_name(d, lang)))
            .collect::<Vec<_>>()
    });
    let status_options = translated_options(tx, "status_", &model::STATUSES);
    let filter_options = Signal::derive(move || {
        let mut options = day_options.get();
        options.extend(status_options.get());
        options
    });

    let show_form = RwSignal::new(false);
    let draft = RwSignal::new(FormDraft::new(blank_slot()));

    let submit = move || {
        let lang = tx.lang();
        let payload = mutation.submission(draft, |v| model::validate_new_slot(v, lang));
        let Some(dto) = payload else {
            return;
        };
        mutation.dispatch(
            api::create_slot(&dto),
            MutationMessages::new(tx.get("created"), tx.get("create_failed")),
            move |result| {
                draft.try_update(|d| {
                    d.settle(&result, AfterSuccess::Reset);
                    if result.is_ok() {
                        d.value = blank_slot();
                    }
                });
                if result.is_ok() {
                    show_form.try_set(false);
                }
            },
        );
    };

    let remove = move |id: i64| {
        if !confirm_action(&tx.get("confirm_delete")) {
            return;
        }
        mutation.dispatch(
            api::delete_slot(id),
            MutationMessages::new(tx.get("deleted"), tx.get("delete_failed")),
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
                        {move || tx.get("add")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| slots.refresh()
                    >
                        {icon("refresh")}
                        " "
                        {move || tx.common("refresh")}
                    </Button>
                </Space>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("total")
                    icon_name="calendar"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("recurring")
                    icon_name="refresh"
                    value=metric(stats, RECURRING)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("active")
                    icon_name="check"
                    value=metric(stats, ACTIVE)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("this_week")
                    icon_name="clock"
                    value=metric(stats, THIS_WEEK)
                    format=ValueFormat::Integer
                />
            </div>

            <Show when=move || show_form.get()>
                <div class="form-card">
                    <h3>{move || tx.get("new_slot")}</h3>
                    <div class="form-grid">
                        <TextField
                            label=tx.signal("slot_title")
                            bind=bind_text(draft, |d| d.title.clone(), |d, v| d.title = v)
                            required=true
                        />
                        <TextField
                            label=tx.signal("subject")
                            bind=bind_text(draft, |d| d.subject.clone(), |d, v| d.subject = v)
                        />
                        <TextField
                            label=tx.signal("class")
                            bind=bind_text(draft, |d| d.student_class.clone(), |d, v| d.student_class = v)
                        />
                        <SelectField
                            label=tx.signal("day")
                            bind=bind_text(
                                draft,
                                |d| d.day_of_week.to_string(),
                                |d, v| d.day_of_week = parse_number(&v),
                            )
                            options=day_options
                        />
                        <TextField
                            label=tx.signal("start_time")
                            bind=bind_text(draft, |d| d.start_time.clone(), |d, v| d.start_time = v)
                            input_type="time"
                            required=true
                        />
                        <TextField
                            label=tx.signal("end_time")
                            bind=bind_text(draft, |d| d.end_time.clone(), |d, v| d.end_time = v)
                            input_type="time"
                            required=true
                        />
                        <TextField
                            label=tx.signal("location")
                            bind=bind_text(draft, |d| d.location.clone(), |d, v| d.location = v)
                        />
                        <SelectField
                            label=tx.signal("kind")
                            bind=bind_text(draft, |d| d.kind.clone(), |d, v| d.kind = v)
                            options=translated_options(tx, "kind_", &model::KINDS)
                        />
                        <CheckField
                            label=tx.signal("recurring_weekly")
                            bind=bind_flag(draft, |d| d.recurring, |d, v| d.recurring = v)
                        />
                    </div>
                    <FormError error=Signal::derive(move || draft.with(|d| d.error.clone())) />
                    <Space>
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

            <FilterBar
                filter=filter
                options=filter_options
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=110.0>{move || tx.get("day")}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || tx.get("time")}</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>{move || tx.get("slot_title")}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || tx.get("class")}</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>{move || tx.get("location")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("status")}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|slot| {
                            let id = slot.id;
                            let delete_request = api::delete_slot(id);
                            let day = day_name(slot.day_of_week, tx.lang());
                            let status_label = tx.get(&format!("status_{}", slot.status));
                            let badge = format!("badge badge--{}", slot.status);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {day}
                                            {slot.recurring.then(|| view! {
                                                <span class="cell-secondary" title=tx.get("recurring_weekly")>
                                                    {icon("refresh")}
                                                </span>
                                            })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {format_time_range(&slot.start_time, &slot.end_time)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>{slot.title}</strong>
                                            <div class="cell-secondary">{slot.subject}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{slot.student_class}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{slot.location}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class=badge>{status_label}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || {
                                                    mutation.is_pending_for(&delete_request)
                                                })
                                                on_click=move |_| remove(id)
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
        </div>
    }
}
