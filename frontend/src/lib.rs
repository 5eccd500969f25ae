//! GesintVisit 前端应用
//!
//! 界面状态全部放在核心 crate 的状态机里，这里只负责绑定信号和渲染：
//! - `web`: 浏览器端 HTTP 客户端与 API 地址解析
//! - `auth`: 应用上下文（视图状态控制器 + 网关）
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod dashboard;
    pub mod history;
    pub mod login;
    pub mod registration;
}

pub(crate) mod web {
    mod http;

    pub use http::GlooHttpClient;

    use gesintvisit::ApiConfig;

    /// 按页面主机名解析 API 地址
    pub fn api_config() -> ApiConfig {
        let hostname = leptos::prelude::window()
            .location()
            .hostname()
            .unwrap_or_default();
        ApiConfig::for_host(&hostname)
    }
}

use crate::auth::AppContext;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;

use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建应用上下文，API 地址在启动时解析一次
    let ctx = AppContext::new(web::api_config());
    provide_context(ctx);

    // 2. 只在认证状态真正变化时切换页面
    let is_authenticated = ctx.is_authenticated_signal();

    view! {
        <Show when=move || is_authenticated.get() fallback=|| view! { <LoginPage /> }>
            <DashboardPage />
        </Show>
    }
}
