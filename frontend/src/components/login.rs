use crate::auth::use_app;
use gesintvisit::login::LoginForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(LoginForm::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        // 字段为空或已在提交中时不发请求
        let Some(Ok(credentials)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        let api = ctx.api();
        spawn_local(async move {
            let result = api
                .authenticate(&credentials.rut, &credentials.password)
                .await;
            if let Some(Some(user)) = form.try_update(|f| f.complete_submit(result)) {
                ctx.login(user);
            }
        });
    };

    let error_msg = move || form.with(|f| f.error().map(str::to_string));
    let is_submitting = move || form.with(LoginForm::is_submitting);

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"GESINTVISIT"</h1>
                    <p class="text-base-content/70">"Control de acceso de conserjería"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="rut">
                                <span class="label-text">"RUT"</span>
                            </label>
                            <input
                                id="rut"
                                type="text"
                                placeholder="12.345.678-9"
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_rut(value));
                                }
                                prop:value=move || form.with(|f| f.rut().to_string())
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_password(value));
                                }
                                prop:value=move || form.with(|f| f.password().to_string())
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "Ingresando..." }.into_any()
                                } else {
                                    "INGRESAR".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
