use crate::auth::use_app;
use gesintvisit::history::{
    self, EMPTY_DETAIL, EMPTY_TITLE, FetchTicket, HistoryDisplay, HistoryView, LOADING_MESSAGE,
};
use gesintvisit::{VisitRecord, VisitType};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let ctx = use_app();
    let view_state = RwSignal::new(HistoryView::for_today());

    // 结果按令牌提交，过期的响应在 commit 中被丢弃
    let run = move |ticket: FetchTicket| {
        let api = ctx.api();
        spawn_local(async move {
            let result = history::fetch(&api, &ticket).await;
            view_state.try_update(|v| v.commit(&ticket, result));
        });
    };

    // 挂载时首次拉取；之后每次历史版本变化都整体重新拉取
    let revision = ctx.history_revision_signal();
    Effect::new(move |_| {
        let revision = revision.get();
        if let Some(Some(ticket)) = view_state.try_update(|v| v.observe_revision(revision)) {
            run(ticket);
        }
    });

    let on_date_input = move |ev: leptos::ev::Event| {
        let date = event_target_value(&ev);
        if let Some(Some(ticket)) = view_state.try_update(|v| v.set_date(&date)) {
            run(ticket);
        }
    };

    let warning = move || view_state.with(|v| v.warning().map(str::to_string));

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between gap-4 p-6 pb-2">
                    <div class="form-control">
                        <label class="label" for="filter-date">
                            <span class="label-text">"Filtrar por Fecha"</span>
                        </label>
                        <input
                            id="filter-date"
                            type="date"
                            class="input input-bordered input-sm"
                            prop:value=move || view_state.with(|v| v.filter_date().to_string())
                            on:input=on_date_input
                        />
                    </div>
                    <span class="text-xs font-semibold text-base-content/60">
                        {move || view_state.with(HistoryView::count_label)}
                    </span>
                </div>

                <Show when=move || warning().is_some()>
                    <div role="alert" class="alert alert-warning mx-6">
                        <span>{move || warning().unwrap_or_default()}</span>
                        <button
                            class="btn btn-sm btn-ghost"
                            on:click=move |_| view_state.update(|v| v.dismiss_warning())
                        >
                            "✕"
                        </button>
                    </div>
                </Show>

                {move || view_state.with(|v| match v.display() {
                    HistoryDisplay::Loading => view! {
                        <div class="flex flex-col items-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                            <p class="mt-2 font-semibold text-base-content/60">{LOADING_MESSAGE}</p>
                        </div>
                    }
                    .into_any(),
                    HistoryDisplay::Empty => view! {
                        <div class="text-center py-12">
                            <h4 class="text-lg font-bold text-base-content/60">{EMPTY_TITLE}</h4>
                            <p class="text-sm text-base-content/40">{EMPTY_DETAIL}</p>
                        </div>
                    }
                    .into_any(),
                    HistoryDisplay::Rows(rows) => {
                        let rows = rows.to_vec();
                        view! {
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Hora"</th>
                                            <th>"Casa / Residente"</th>
                                            <th>"Tipo"</th>
                                            <th>"Visitante"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|record| view! { <HistoryRow record=record /> })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any()
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn HistoryRow(record: VisitRecord) -> impl IntoView {
    let badge_class = match record.visit_type {
        VisitType::Visita => "badge badge-primary badge-sm uppercase font-black",
        VisitType::Encomienda => "badge badge-warning badge-sm uppercase font-black",
    };

    view! {
        <tr class="hover">
            <td class="font-extrabold text-primary">{record.time_of_day()}</td>
            <td>
                <div class="font-black">{format!("Casa {}", record.house_number)}</div>
                <div class="text-xs text-base-content/60">{record.resident_name.clone()}</div>
            </td>
            <td>
                <span class=badge_class>{record.visit_type.label()}</span>
            </td>
            <td>
                <div class="font-bold">{record.visitor_name.clone()}</div>
                <div class="text-xs text-base-content/60">{record.visitor_detail()}</div>
            </td>
        </tr>
    }
}
