use contracts::domain::a203_admin_document::aggregate::{AdminDocument, CATEGORIES};
use contracts::shared::indicators::ValueFormat;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a203_admin_document::api;
use crate::domain::a203_admin_document::model::{self, DocumentUploadDraft, TOTAL_DOWNLOADS};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::file_upload::FileUpload;
use crate::shared::components::filter_panel::FilterBar;
use crate::shared::components::form_field::{SelectField, TextField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::config::app_config;
use crate::shared::date_utils::format_date;
use crate::shared::export::export_csv;
use crate::shared::forms::{bind_text, FormDraft};
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::notifications::use_notifications;
use crate::shared::query::{use_mutation, use_paged_list, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

fn category_options() -> Signal<Vec<(String, String)>> {
    Signal::derive(|| {
        CATEGORIES
            .iter()
            .map(|c| (c.to_string(), c.to_string()))
            .collect()
    })
}

#[component]
#[allow(non_snake_case)]
pub fn AdminDocumentList() -> impl IntoView {
    let tx = Texts::of("documents");
    let notifications = use_notifications();
    let page = RwSignal::new(1u32);
    let page_size = app_config().ui.page_size;
    let documents = use_paged_list::<AdminDocument>(
        api::DOCUMENTS,
        Signal::derive(move || ListQuery::paged(page.get(), page_size)),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let visible = Memo::new(move |_| {
        documents.data.with(|p| {
            filter.with(|f| context.with_value(|ctx| filter_entities(&p.items, f, ctx)))
        })
    });
    let stats = Memo::new(move |_| {
        documents
            .data
            .with(|p| context.with_value(|ctx| AdminDocument::summarize(&p.items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            documents.is_loading.get(),
            documents.error.get().as_ref(),
            documents.data.with(|p| p.items.len()),
            visible.with(Vec::len),
        )
    });
    let total_pages = Signal::derive(move || documents.data.with(|p| p.total_pages));

    // Going past the last page after deletions would show an empty table.
    Effect::new(move |_| {
        let last = total_pages.get();
        if page.get_untracked() > last {
            page.set(last);
        }
    });

    let show_upload = RwSignal::new(false);
    let draft = RwSignal::new(FormDraft::<DocumentUploadDraft>::default());

    let remove = move |id: i64, name: &str| {
        if !confirm_action(&tx.get("confirm_delete").replace("{name}", name)) {
            return;
        }
        mutation.dispatch(
            api::delete_document(id),
            MutationMessages::new(tx.get("deleted"), tx.get("delete_failed")),
            |_| {},
        );
    };

    let export = move || {
        let headers = ["name", "kind", "category", "size", "uploaded_by", "updated_at"]
            .map(|key| tx.get(key));
        let rows = visible.get_untracked();
        if let Err(e) = export_csv(&rows, &model::export_columns(headers), "documents.csv") {
            log::warn!("document export failed: {}", e);
            notifications.error(tx.get("export_failed"), e);
        }
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
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        {icon("download")}
                        " "
                        {move || tx.common("export_csv")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| documents.refresh()
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
                    icon_name="file"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("downloads")
                    icon_name="download"
                    value=metric(stats, TOTAL_DOWNLOADS)
                    format=ValueFormat::Integer
                />
            </div>

            <Show when=move || show_upload.get()>
                <div class="form-card">
                    <h3>{move || tx.get("new_document")}</h3>
                    <FileUpload
                        resource=api::DOCUMENTS
                        fields=Signal::derive(move || draft.with(|d| d.value.fields()))
                        accept=".pdf,.doc,.docx,.xls,.xlsx,.csv,.txt"
                        on_uploaded=Callback::new(move |_| {
                            draft.set(FormDraft::default());
                            show_upload.set(false);
                        })
                    >
                        <div class="form-grid">
                            <SelectField
                                label=tx.signal("category")
                                bind=bind_text(draft, |d| d.category.clone(), |d, v| d.category = v)
                                options=category_options()
                            />
                            <TextField
                                label=tx.signal("description")
                                bind=bind_text(draft, |d| d.description.clone(), |d, v| d.description = v)
                            />
                        </div>
                    </FileUpload>
                </div>
            </Show>

            <FilterBar
                filter=filter
                options=category_options()
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=240.0>{move || tx.get("name")}</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>{move || tx.get("category")}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || tx.get("size")}</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>{move || tx.get("uploaded_by")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("updated_at")}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || tx.get("downloads")}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|doc| {
                            let id = doc.id;
                            let name = doc.name.clone();
                            let delete_request = api::delete_document(id);
                            let updated = format_date(&doc.updated_at);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>{doc.name}</strong>
                                            <div class="cell-secondary">{doc.kind}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="badge badge--primary">{doc.category}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{doc.size}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{doc.uploaded_by}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{updated}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{doc.downloads}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || {
                                                    mutation.is_pending_for(&delete_request)
                                                })
                                                on_click=move |_| remove(id, &name)
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
                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    on_page_change=Callback::new(move |p: u32| page.set(p))
                />
            </ListStateView>

            <div class="category-grid">
                {CATEGORIES.iter().copied().map(|category| {
                    view! {
                        <div class="category-tile">
                            <strong>{move || stats.with(|s| s.get(category) as u64)}</strong>
                            <span class="cell-secondary">{category}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
