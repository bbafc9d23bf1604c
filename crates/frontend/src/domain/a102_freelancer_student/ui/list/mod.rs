use contracts::domain::a102_freelancer_student::aggregate::{CreateStudentDto, FreelancerStudent};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a102_freelancer_student::api;
use crate::domain::a102_freelancer_student::model::{
    self, ACTIVE_STUDENTS, AVERAGE_GRADE, EXCELLENT, NEEDS_ATTENTION,
};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::form_field::{FormError, TextField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::forms::{bind_text, AfterSuccess, FormDraft};
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::list_utils::{highlight_matches, SortState};
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn FreelancerStudentList() -> impl IntoView {
    let tx = Texts::of("students");
    let students = use_entity_list::<FreelancerStudent>(
        api::STUDENTS,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();
    let create_target = StoredValue::new(api::create_student(&CreateStudentDto::default()));

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());
    let sort = SortState::new("");

    let visible = Memo::new(move |_| {
        let mut rows = students.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        });
        sort.apply(&mut rows);
        rows
    });
    let stats = Memo::new(move |_| {
        students
            .data
            .with(|items| context.with_value(|ctx| FreelancerStudent::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            students.is_loading.get(),
            students.error.get().as_ref(),
            students.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let show_form = RwSignal::new(false);
    let draft = RwSignal::new(FormDraft::<CreateStudentDto>::default());

    let submit = move || {
        let lang = tx.lang();
        let payload = mutation.submission(draft, |v| model::validate_new_student(v, lang));
        let Some(dto) = payload else {
            return;
        };
        mutation.dispatch(
            api::create_student(&dto),
            MutationMessages::new(tx.get("created"), tx.get("create_failed")),
            move |result| {
                draft.try_update(|d| d.settle(&result, AfterSuccess::Reset));
                if result.is_ok() {
                    show_form.try_set(false);
                }
            },
        );
    };

    let remove = move |student: &FreelancerStudent| {
        let question = tx
            .get("confirm_delete")
            .replace("{name}", &student.display_name());
        if !confirm_action(&question) {
            return;
        }
        mutation.dispatch(
            api::delete_student(student.id),
            MutationMessages::new(tx.get("deleted"), tx.get("delete_failed")),
            |_| {},
        );
    };

    let sortable_header = move |field: &'static str, key: &'static str| {
        view! {
            <span class="sortable-header" on:click=move |_| sort.toggle(field)>
                {move || tx.get(key)}
                {move || sort.indicator(field)}
            </span>
        }
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
                        on_click=move |_| students.refresh()
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
                    icon_name="users"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("excellent")
                    icon_name="star"
                    value=metric(stats, EXCELLENT)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("active")
                    icon_name="trending-up"
                    value=metric(stats, ACTIVE_STUDENTS)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("needs_attention")
                    icon_name="alert"
                    value=metric(stats, NEEDS_ATTENTION)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.with(|s| s.get(NEEDS_ATTENTION)) > 0.0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Neutral
                        }
                    })
                />
                <StatCard
                    label=tx.signal("average_grade")
                    icon_name="book"
                    value=metric(stats, AVERAGE_GRADE)
                    format=ValueFormat::Number { decimals: 1 }
                    subtitle=Signal::derive(|| "/20".to_string())
                />
            </div>

            <Show when=move || show_form.get()>
                <div class="form-card">
                    <h3>{move || tx.get("new_student")}</h3>
                    <div class="form-grid">
                        <TextField
                            label=tx.signal("first_name")
                            bind=bind_text(draft, |d| d.first_name.clone(), |d, v| d.first_name = v)
                            required=true
                        />
                        <TextField
                            label=tx.signal("last_name")
                            bind=bind_text(draft, |d| d.last_name.clone(), |d, v| d.last_name = v)
                            required=true
                        />
                        <TextField
                            label=tx.signal("email")
                            bind=bind_text(draft, |d| d.email.clone(), |d, v| d.email = v)
                            input_type="email"
                        />
                        <TextField
                            label=tx.signal("phone")
                            bind=bind_text(draft, |d| d.phone.clone(), |d, v| d.phone = v)
                            input_type="tel"
                        />
                        <TextField
                            label=tx.signal("grade")
                            bind=bind_text(draft, |d| d.grade.clone(), |d, v| d.grade = v)
                        />
                        <TextField
                            label=tx.signal("school")
                            bind=bind_text(draft, |d| d.school_name.clone(), |d, v| d.school_name = v)
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
                options=translated_options(tx, "status_", &model::STATUSES)
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=200.0>
                                {sortable_header("name", "name")}
                            </TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=180.0>
                                {move || tx.get("email")}
                            </TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || tx.get("grade")}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>
                                {sortable_header("grade", "average")}
                            </TableHeaderCell>
                            <TableHeaderCell min_width=100.0>
                                {sortable_header("attendance", "attendance")}
                            </TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || tx.get("status")}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let needle = filter.with(|f| f.search_term.clone());
                            visible.get().into_iter().map(|student| {
                                let delete_request = api::delete_student(student.id);
                                let status_label = tx.get(&format!("status_{}", student.status));
                                let badge = format!("badge badge--{}", student.status);
                                let name = highlight_matches(&student.display_name(), &needle);
                                let email = student.email.clone();
                                let grade = student.grade.clone();
                                let average = format!("{:.1}/20", student.average_grade);
                                let attendance = format!("{:.0}%", student.attendance_rate);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{email}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{grade}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{average}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{attendance}</TableCellLayout>
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
                                                    on_click=move |_| remove(&student)
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStateView>
        </div>
    }
}
