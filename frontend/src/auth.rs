//! 应用上下文
//!
//! 持有视图状态控制器（用户、内存历史、当前标签页）和 API 网关。
//! 子组件只读状态，变化一律通过这里的方法交回控制器。

use crate::web::GlooHttpClient;
use gesintvisit::{ApiConfig, AppState, Tab, User, VisitApi, VisitRecord};
use leptos::logging::log;
use leptos::prelude::*;

pub type BrowserApi = VisitApi<GlooHttpClient>;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
    api: StoredValue<BrowserApi>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        log!("API base URL: {}", config.base_url());
        Self {
            state: RwSignal::new(AppState::new()),
            api: StoredValue::new(VisitApi::new(config, GlooHttpClient)),
        }
    }

    /// 网关的副本，供 `spawn_local` 中的异步任务持有
    pub fn api(&self) -> BrowserApi {
        self.api.get_value()
    }

    pub fn is_authenticated_signal(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(AppState::is_authenticated))
    }

    pub fn active_tab_signal(&self) -> Memo<Tab> {
        let state = self.state;
        Memo::new(move |_| state.with(AppState::active_tab))
    }

    pub fn history_revision_signal(&self) -> Memo<u64> {
        let state = self.state;
        Memo::new(move |_| state.with(AppState::history_revision))
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user().cloned())
    }

    // --- 控制器更新 ---

    pub fn login(&self, user: User) {
        log!("concierge {} signed in", user.rut);
        self.apply(|s| s.login(user));
    }

    /// 注销：用户、历史、标签页全部复位，界面回到登录页
    pub fn logout(&self) {
        log!("concierge signed out");
        self.apply(AppState::logout);
    }

    pub fn record_visit(&self, record: VisitRecord) {
        self.apply(|s| s.record_visit(record));
    }

    pub fn select_tab(&self, tab: Tab) {
        self.apply(|s| s.select_tab(tab));
    }

    pub fn go_to_history(&self) {
        self.apply(AppState::go_to_history);
    }

    fn apply(&self, f: impl FnOnce(AppState) -> AppState) {
        self.state.update(|s| *s = f(std::mem::take(s)));
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
