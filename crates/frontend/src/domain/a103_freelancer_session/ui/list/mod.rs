use contracts::domain::a103_freelancer_session::aggregate::{CreateSessionDto, FreelancerSession};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a103_freelancer_session::api;
use crate::domain::a103_freelancer_session::model::{self, COMPLETED, SCHEDULED, THIS_WEEK};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::form_field::{FormError, SelectField, TextAreaField, TextField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::date_utils::{format_date, format_time_range};
use crate::shared::forms::{bind_text, AfterSuccess, FormDraft};
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn FreelancerSessionList() -> impl IntoView {
    let tx = Texts::of("sessions");
    let sessions = use_entity_list::<FreelancerSession>(
        api::SESSIONS,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();
    let create_target = StoredValue::new(api::create_session(&CreateSessionDto::default()));

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let visible = Memo::new(move |_| {
        sessions.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let stats = Memo::new(move |_| {
        sessions
            .data
            .with(|items| context.with_value(|ctx| FreelancerSession::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            sessions.is_loading.get(),
            sessions.error.get().as_ref(),
            sessions.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let show_form = RwSignal::new(false);
    let draft = RwSignal::new(FormDraft::new(CreateSessionDto {
        kind: model::KINDS[0].to_string(),
        ..Default::default()
    }));

    let submit = move || {
        let lang = tx.lang();
        let payload = mutation.submission(draft, |v| model::validate_new_session(v, lang));
        let Some(dto) = payload else {
            return;
        };
        mutation.dispatch(
            api::create_session(&dto),
            MutationMessages::new(tx.get("created"), tx.get("create_failed")),
            move |result| {
                draft.try_update(|d| d.settle(&result, AfterSuccess::Reset));
                if result.is_ok() {
                    show_form.try_set(false);
                }
            },
        );
    };

    let cancel = move |id: i64| {
        if !confirm_action(&tx.get("confirm_cancel")) {
            return;
        }
        mutation.dispatch(
            api::cancel_session(id),
            MutationMessages::new(tx.get("cancelled"), tx.get("cancel_failed")),
            |_| {},
        );
    };

    let remove = move |id: i64| {
        if !confirm_action(&tx.get("confirm_delete")) {
            return;
        }
        mutation.dispatch(
            api::delete_session(id),
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
                        on_click=move |_| sessions.refresh()
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
                    label=tx.signal("completed")
                    icon_name="check"
                    value=metric(stats, COMPLETED)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("scheduled")
                    icon_name="clock"
                    value=metric(stats, SCHEDULED)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("this_week")
                    icon_name="activity"
                    value=metric(stats, THIS_WEEK)
                    format=ValueFormat::Integer
                />
            </div>

            <Show when=move || show_form.get()>
                <div class="form-card">
                    <h3>{move || tx.get("new_session")}</h3>
                    <div class="form-grid">
                        <TextField
                            label=tx.signal("session_title")
                            bind=bind_text(draft, |d| d.title.clone(), |d, v| d.title = v)
                            required=true
                        />
                        <TextField
                            label=tx.signal("subject")
                            bind=bind_text(draft, |d| d.subject.clone(), |d, v| d.subject = v)
                        />
                        <TextField
                            label=tx.signal("student")
                            bind=bind_text(draft, |d| d.student_name.clone(), |d, v| d.student_name = v)
                        />
                        <TextField
                            label=tx.signal("date")
                            bind=bind_text(draft, |d| d.date.clone(), |d, v| d.date = v)
                            input_type="date"
                            required=true
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
                    </div>
                    <TextAreaField
                        label=tx.signal("notes")
                        bind=bind_text(draft, |d| d.notes.clone(), |d, v| d.notes = v)
                    />
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
                options=translated_options(tx, "filter_", &model::FILTERS)
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=200.0>{move || tx.get("session_title")}</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=150.0>{move || tx.get("student")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("date")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("time")}</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>{move || tx.get("location")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("status")}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|session| {
                            let id = session.id;
                            let cancel_request = api::cancel_session(id);
                            let delete_request = api::delete_session(id);
                            let cancellable = model::can_cancel(&session);
                            let status_label = tx.get(&format!("filter_{}", session.status));
                            let badge = format!("badge badge--{}", session.status);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>{session.title}</strong>
                                            <div class="cell-secondary">{session.subject}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{session.student_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_date(&session.date)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {format_time_range(&session.start_time, &session.end_time)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{session.location}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class=badge>{status_label}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {cancellable.then(|| view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || {
                                                        mutation.is_pending_for(&cancel_request)
                                                    })
                                                    on_click=move |_| cancel(id)
                                                >
                                                    {icon("x")}
                                                </Button>
                                            })}
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
