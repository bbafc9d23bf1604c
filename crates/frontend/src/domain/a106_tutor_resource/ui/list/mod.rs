use contracts::domain::a106_tutor_resource::aggregate::TutorResource;
use contracts::shared::indicators::ValueFormat;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a106_tutor_resource::api;
use crate::domain::a106_tutor_resource::model::{
    self, ResourceUploadDraft, PUBLIC, THIS_MONTH, TOTAL_DOWNLOADS,
};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::file_upload::FileUpload;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::form_field::{CheckField, SelectField, TextField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::forms::{bind_flag, bind_text, FormDraft};
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn TutorResourceList() -> impl IntoView {
    let tx = Texts::of("resources");
    let resources = use_entity_list::<TutorResource>(
        api::RESOURCES,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let visible = Memo::new(move |_| {
        resources.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let stats = Memo::new(move |_| {
        resources
            .data
            .with(|items| context.with_value(|ctx| TutorResource::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            resources.is_loading.get(),
            resources.error.get().as_ref(),
            resources.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let show_upload = RwSignal::new(false);
    let draft = RwSignal::new(FormDraft::<ResourceUploadDraft>::default());

    let toggle = move |resource: &TutorResource| {
        mutation.dispatch(
            api::toggle_visibility(resource),
            MutationMessages::new(tx.get("visibility_updated"), tx.get("update_failed")),
            |_| {},
        );
    };

    let remove = move |id: i64| {
        if !confirm_action(&tx.get("confirm_delete")) {
            return;
        }
        mutation.dispatch(
            api::delete_resource(id),
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
                        on_click=move |_| show_upload.update(|open| *open = !*open)
                    >
                        {icon("upload")}
                        " "
                        {move || tx.get("add")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| resources.refresh()
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
                    icon_name="book"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("public")
                    icon_name="globe"
                    value=metric(stats, PUBLIC)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("downloads")
                    icon_name="download"
                    value=metric(stats, TOTAL_DOWNLOADS)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("this_month")
                    icon_name="calendar"
                    value=metric(stats, THIS_MONTH)
                    format=ValueFormat::Integer
                />
            </div>

            <Show when=move || show_upload.get()>
                <div class="form-card">
                    <h3>{move || tx.get("new_resource")}</h3>
                    <FileUpload
                        resource=api::RESOURCES
                        fields=Signal::derive(move || draft.with(|d| d.value.fields()))
                        accept=".pdf,.doc,.docx,.ppt,.pptx,.mp4,.png,.jpg"
                        validate=Callback::new(move |_| {
                            draft.with_untracked(|d| d.value.validate(tx.lang()))
                        })
                        on_uploaded=Callback::new(move |_| {
                            draft.set(FormDraft::default());
                            show_upload.set(false);
                        })
                    >
                        <div class="form-grid">
                            <TextField
                                label=tx.signal("resource_title")
                                bind=bind_text(draft, |d| d.title.clone(), |d, v| d.title = v)
                                required=true
                            />
                            <TextField
                                label=tx.signal("subject")
                                bind=bind_text(draft, |d| d.subject.clone(), |d, v| d.subject = v)
                            />
                            <SelectField
                                label=tx.signal("kind")
                                bind=bind_text(draft, |d| d.kind.clone(), |d, v| d.kind = v)
                                options=translated_options(tx, "filter_", &model::KINDS)
                            />
                            <CheckField
                                label=tx.signal("make_public")
                                bind=bind_flag(draft, |d| d.is_public, |d, v| d.is_public = v)
                            />
                        </div>
                    </FileUpload>
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
                            <TableHeaderCell resizable=true min_width=220.0>{move || tx.get("resource_title")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("kind")}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || tx.get("subject")}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || tx.get("size")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("uploaded_at")}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || tx.get("downloads")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("visibility")}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|resource| {
                            let id = resource.id;
                            let toggle_request = api::toggle_visibility(&resource);
                            let delete_request = api::delete_resource(id);
                            let kind = tx.get(&format!("filter_{}", resource.kind));
                            let visibility = if resource.is_public {
                                tx.get("filter_public")
                            } else {
                                tx.get("filter_private")
                            };
                            let visibility_icon = if resource.is_public { "lock" } else { "globe" };
                            let uploaded = format_date(&resource.uploaded_at);
                            let title = resource.title.clone();
                            let subject = resource.subject.clone();
                            let size = format!("{} {}", resource.size, resource.format);
                            let downloads = resource.downloads;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{title}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{kind}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{subject}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{size}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{uploaded}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{downloads}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{visibility}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || {
                                                    mutation.is_pending_for(&toggle_request)
                                                })
                                                on_click=move |_| toggle(&resource)
                                            >
                                                {icon(visibility_icon)}
                                            </Button>
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
