use chrono::Utc;
use contracts::domain::a205_admin_message::aggregate::{Conversation, AUDIENCES, PRIORITIES};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a205_admin_message::api;
use crate::domain::a205_admin_message::model::{MessageDraft, TEMPLATES, UNREAD};
use crate::shared::components::confirm::ConfirmDialog;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::form_field::{FormError, SelectField, TextAreaField};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::date_utils::format_datetime;
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
pub fn CommunicationsView() -> impl IntoView {
    let tx = Texts::of("communications");
    let conversations = use_entity_list::<Conversation>(
        api::CONVERSATIONS,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let visible = Memo::new(move |_| {
        conversations.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let stats = Memo::new(move |_| {
        conversations
            .data
            .with(|items| context.with_value(|ctx| Conversation::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            conversations.is_loading.get(),
            conversations.error.get().as_ref(),
            conversations.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let draft = RwSignal::new(FormDraft::<MessageDraft>::default());
    let confirm_open = RwSignal::new(false);
    let audience_options = translated_options(tx, "audience_", AUDIENCES);
    let priority_options = translated_options(tx, "priority_", PRIORITIES);

    let review = move || {
        let lang = tx.lang();
        let valid = mutation.submission(draft, |v| v.validate(lang)).is_some();
        if valid {
            confirm_open.set(true);
        }
    };

    let send = move || {
        let lang = tx.lang();
        let payload = mutation.submission(draft, |v| v.validate(lang));
        let Some(message) = payload else {
            return;
        };
        mutation.dispatch(
            api::send_message(&message.to_dto(Utc::now())),
            MutationMessages::new(tx.get("sent"), tx.get("send_failed")),
            move |result| {
                draft.try_update(|d| {
                    d.settle(&result, AfterSuccess::Keep);
                    if result.is_ok() {
                        d.value.message.clear();
                    }
                });
            },
        );
    };

    let summary_line = move |key: &'static str, value: Signal<String>| {
        view! {
            <div class="profile-field">
                <span class="profile-field__label">{move || tx.get(key)}</span>
                <span class="profile-field__value">{move || value.get()}</span>
            </div>
        }
    };

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">{move || tx.get("title")}</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| conversations.refresh()
                >
                    {icon("refresh")}
                    " "
                    {move || tx.common("refresh")}
                </Button>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("total")
                    icon_name="mail"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("unread")
                    icon_name="eye"
                    value=metric(stats, UNREAD)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.with(|s| s.get(UNREAD)) > 0.0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Neutral
                        }
                    })
                />
            </div>

            <div class="form-card">
                <h3>{move || tx.get("new_message")}</h3>
                <div class="form-grid">
                    <SelectField
                        label=tx.signal("audience")
                        bind=bind_text(draft, |d| d.audience.clone(), |d, v| d.audience = v)
                        options=audience_options
                    />
                    <SelectField
                        label=tx.signal("priority")
                        bind=bind_text(draft, |d| d.priority.clone(), |d, v| d.priority = v)
                        options=priority_options
                    />
                </div>
                <TextAreaField
                    label=tx.signal("message")
                    bind=bind_text(draft, |d| d.message.clone(), |d, v| d.message = v)
                />
                <div class="template-buttons">
                    <span class="cell-secondary">{move || tx.get("templates")}</span>
                    {TEMPLATES.iter().copied().map(|template| view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                let text = tx.get(&format!("template_{template}_text"));
                                draft.update(|d| d.value.message = text);
                            }
                        >
                            {move || tx.get(&format!("template_{template}"))}
                        </Button>
                    }).collect_view()}
                </div>
                <FormError error=Signal::derive(move || draft.with(|d| d.error.clone())) />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || mutation.is_pending())
                    on_click=move |_| review()
                >
                    {icon("send")}
                    " "
                    {move || tx.get("send")}
                </Button>
            </div>

            <ConfirmDialog
                open=confirm_open
                title=tx.signal("confirm_title")
                confirm_label=tx.signal("send")
                cancel_label=Signal::derive(move || tx.common("cancel"))
                on_confirm=Callback::new(move |_| send())
            >
                {summary_line(
                    "audience",
                    Signal::derive(move || tx.get(&format!("audience_{}", draft.with(|d| d.value.audience.clone())))),
                )}
                {summary_line(
                    "priority",
                    Signal::derive(move || tx.get(&format!("priority_{}", draft.with(|d| d.value.priority.clone())))),
                )}
                <p class="message-preview">{move || draft.with(|d| d.value.message.clone())}</p>
            </ConfirmDialog>

            <FilterBar
                filter=filter
                options=audience_options
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=180.0>{move || tx.get("recipient")}</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=260.0>{move || tx.get("last_message")}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || tx.get("priority")}</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>{move || tx.get("sent_at")}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || tx.get("status")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|conversation| {
                            let audience = tx.get(&format!("audience_{}", conversation.audience));
                            let priority = tx.get(&format!("priority_{}", conversation.priority));
                            let priority_badge = format!("badge badge--{}", conversation.priority);
                            let status = tx.get(&format!("delivery_{}", conversation.status));
                            let status_badge = format!("badge badge--{}", conversation.status);
                            let sent_at = format_datetime(&conversation.timestamp);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>{conversation.recipient}</strong>
                                            <div class="cell-secondary">{audience}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{conversation.last_message}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class=priority_badge>{priority}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{sent_at}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class=status_badge>{status}</span>
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
