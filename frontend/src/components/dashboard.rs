use crate::auth::use_app;
use crate::components::history::HistoryPanel;
use crate::components::registration::RegistrationPanel;
use gesintvisit::Tab;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let active_tab = ctx.active_tab_signal();

    let concierge_name = move || {
        ctx.state
            .with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())
    };

    let tab_button = move |tab: Tab| {
        view! {
            <button
                role="tab"
                class=move || if active_tab.get() == tab { "tab tab-active" } else { "tab" }
                on:click=move |_| ctx.select_tab(tab)
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"GESINTVISIT PRO"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            "Conserje: " {concierge_name}
                        </span>
                    </div>
                    <div class="flex-none">
                        <button on:click=move |_| ctx.logout() class="btn btn-outline btn-error">
                            "SALIR"
                        </button>
                    </div>
                </div>

                <div role="tablist" class="tabs tabs-boxed bg-base-100">
                    {tab_button(Tab::Registration)}
                    {tab_button(Tab::History)}
                </div>

                // 切换标签页时重新挂载对应流程
                {move || match active_tab.get() {
                    Tab::Registration => view! { <RegistrationPanel /> }.into_any(),
                    Tab::History => view! { <HistoryPanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}
