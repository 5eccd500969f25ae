use crate::auth::use_app;
use gesintvisit::registration::RegistrationForm;
use gesintvisit::VisitType;
use gesintvisit_shared::date::local_now_timestamp;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

const NOTICE_DURATION: Duration = Duration::from_secs(4);

#[component]
pub fn RegistrationPanel() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(RegistrationForm::new());

    // 挂载时加载住户列表，失败时列表为空
    let api = ctx.api();
    spawn_local(async move {
        let houses = api.list_houses().await;
        form.try_update(|f| f.set_houses(houses));
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = ctx.current_user();
        let Some(Ok(visit)) =
            form.try_update(|f| f.begin_submit(user.as_ref(), local_now_timestamp()))
        else {
            return;
        };

        let api = ctx.api();
        spawn_local(async move {
            let result = api.create_visit(&visit).await;
            if let Some(Some(record)) = form.try_update(|f| f.complete_submit(result)) {
                ctx.record_visit(record);
            }
        });
    };

    // 每条通知各自计时，到期只关闭自己
    let notice = Memo::new(move |_| form.with(|f| f.notice().cloned()));
    let notice_seq = Memo::new(move |_| form.with(RegistrationForm::notice_seq));
    Effect::new(move |_| {
        let seq = notice_seq.get();
        if form.with_untracked(|f| f.notice().is_some()) {
            set_timeout(
                move || {
                    form.try_update(|f| f.expire_notice(seq));
                },
                NOTICE_DURATION,
            );
        }
    });

    let selected_house = move || form.with(|f| f.selected_house().cloned());
    let is_submitting = move || form.with(RegistrationForm::is_submitting);

    let type_button = move |visit_type: VisitType| {
        view! {
            <button
                type="button"
                class=move || {
                    if form.with(|f| f.visit_type()) == visit_type {
                        "btn btn-primary flex-1"
                    } else {
                        "btn btn-outline flex-1"
                    }
                }
                on:click=move |_| form.update(|f| f.set_visit_type(visit_type))
            >
                {visit_type.label()}
            </button>
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body space-y-3" on:submit=on_submit>
                <h3 class="card-title">"Nueva Entrada"</h3>

                <div class="form-control">
                    <label class="label" for="house">
                        <span class="label-text">"Destino (Casa / Residente)"</span>
                    </label>
                    <select
                        id="house"
                        class="select select-bordered"
                        disabled=move || form.with(RegistrationForm::is_loading_houses)
                        prop:value=move || selected_house().map(|h| h.id).unwrap_or_default()
                        on:change=move |ev| {
                            let id = event_target_value(&ev);
                            form.update(|f| {
                                f.select_house((!id.is_empty()).then_some(id.as_str()));
                            });
                        }
                    >
                        <option value="">
                            {move || if form.with(RegistrationForm::is_loading_houses) {
                                "Cargando casas..."
                            } else {
                                "Seleccione una casa"
                            }}
                        </option>
                        <For
                            each=move || form.with(|f| f.houses().to_vec())
                            key=|house| house.id.clone()
                            children=move |house| {
                                view! {
                                    <option value=house.id.clone()>
                                        {format!("Casa {} - {}", house.number, house.resident_name)}
                                    </option>
                                }
                            }
                        />
                    </select>

                    {move || selected_house().map(|house| {
                        let phone = house.phone.clone().map(|phone| {
                            let href = format!("tel:{}", phone.split_whitespace().collect::<String>());
                            view! { <a class="link link-secondary font-bold" href=href>{phone}</a> }
                        });
                        view! {
                            <div class="mt-2 px-1 flex flex-col gap-1 text-sm">
                                <span class="font-semibold text-base-content/70">
                                    "Residente: " {house.resident_name}
                                </span>
                                {phone}
                            </div>
                        }
                    })}
                </div>

                <div class="divider my-0"></div>

                <div class="flex gap-2">
                    {type_button(VisitType::Visita)}
                    {type_button(VisitType::Encomienda)}
                </div>

                <div class="form-control">
                    <label class="label" for="visitor-name">
                        <span class="label-text">"Nombre del Visitante / Repartidor"</span>
                    </label>
                    <input
                        id="visitor-name"
                        type="text"
                        class="input input-bordered"
                        prop:value=move || form.with(|f| f.visitor_name().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_visitor_name(value));
                        }
                    />
                </div>

                <div class="grid grid-cols-12 gap-2">
                    <div class="form-control col-span-7">
                        <label class="label" for="visitor-rut">
                            <span class="label-text">"RUT"</span>
                        </label>
                        <input
                            id="visitor-rut"
                            type="text"
                            placeholder="12.345.678-9"
                            class="input input-bordered"
                            prop:value=move || form.with(|f| f.visitor_rut().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.set_visitor_rut(value));
                            }
                        />
                    </div>
                    <div class="form-control col-span-5">
                        <label class="label" for="plate">
                            <span class="label-text">"Patente"</span>
                        </label>
                        <input
                            id="plate"
                            type="text"
                            placeholder="Opcional"
                            class="input input-bordered"
                            prop:value=move || form.with(|f| f.plate().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.set_plate(&value));
                            }
                        />
                    </div>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary btn-lg"
                    disabled=move || !form.with(RegistrationForm::can_submit)
                >
                    {move || if is_submitting() {
                        view! { <span class="loading loading-spinner"></span> }.into_any()
                    } else {
                        "Confirmar Ingreso".into_any()
                    }}
                </button>
            </form>
        </div>

        <Show when=move || notice.get().is_some()>
            <div class="toast toast-bottom toast-center z-50">
                <div class=move || {
                    if notice.get().is_some_and(|n| n.is_error()) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.get().map(|n| n.message).unwrap_or_default()}</span>
                    <Show when=move || notice.get().is_some_and(|n| !n.is_error())>
                        <button class="btn btn-sm btn-ghost" on:click=move |_| ctx.go_to_history()>
                            "Ver historial"
                        </button>
                    </Show>
                    <button
                        class="btn btn-sm btn-circle btn-ghost"
                        on:click=move |_| form.update(|f| f.dismiss_notice())
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </Show>
    }
}
