//! Dashboard chrome: sidebar navigation, account header, content slot.
//!
//! The collapsed-sidebar flag is the one piece of client state that
//! survives reloads; everything else is disposable.

use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::SessionCtx;

const COLLAPSED_KEY: &str = "dashboard_collapsed";

pub enum Msg {
    ToggleSidebar,
    Logout,
    SessionChanged(SessionCtx),
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct DashboardLayout {
    collapsed: bool,
    session: Option<SessionCtx>,
    _session_handle: Option<ContextHandle<SessionCtx>>,
}

impl Component for DashboardLayout {
    type Message = Msg;
    type Properties = LayoutProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, handle) = match ctx
            .link()
            .context::<SessionCtx>(ctx.link().callback(Msg::SessionChanged))
        {
            Some((session, handle)) => (Some(session), Some(handle)),
            None => (None, None),
        };
        Self {
            collapsed: LocalStorage::get(COLLAPSED_KEY).unwrap_or(false),
            session,
            _session_handle: handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleSidebar => {
                self.collapsed = !self.collapsed;
                LocalStorage::set(COLLAPSED_KEY, self.collapsed).ok();
                true
            }
            Msg::Logout => {
                if let Some(session) = &self.session {
                    session.logout.emit(());
                }
                false
            }
            Msg::SessionChanged(session) => {
                self.session = Some(session);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let aside_class = if self.collapsed {
            "sidebar collapsed"
        } else {
            "sidebar"
        };
        let toggle_label = if self.collapsed {
            "Expand sidebar"
        } else {
            "Collapse sidebar"
        };
        let user = self.session.as_ref().and_then(|s| s.user.clone());

        html! {
            <div class="layout">
                <aside class={aside_class}>
                    <div class="sidebar-head">
                        {
                            if !self.collapsed {
                                html! {
                                    <div class="brand">
                                        <span class="brand-mark">{"PS"}</span>
                                        <div>
                                            <h1>{"Programmatic SEO"}</h1>
                                            <p class="muted">{"Workspace"}</p>
                                        </div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <button
                            class="icon-btn"
                            title={toggle_label}
                            onclick={link.callback(|_| Msg::ToggleSidebar)}
                        >
                            { if self.collapsed { ">" } else { "<" } }
                        </button>
                    </div>

                    <nav class="sidebar-nav">
                        { nav_item(Route::Dashboard, "Overview", self.collapsed) }
                        { nav_item(Route::Templates, "Templates", self.collapsed) }
                        { nav_item(Route::Results, "Results", self.collapsed) }
                        { nav_item(Route::Generate, "Generate Page", self.collapsed) }
                        { nav_item(Route::GenerateBulk, "Bulk Generator", self.collapsed) }
                    </nav>

                    <div class="sidebar-foot">
                        <button class="logout-btn" onclick={link.callback(|_| Msg::Logout)}>
                            { if self.collapsed { "x" } else { "Logout" } }
                        </button>
                    </div>
                </aside>

                <div class="content">
                    <header class="topbar">
                        <div>
                            <h2>{"Dashboard"}</h2>
                            <p class="muted">{"Monitor generation, results, and templates"}</p>
                        </div>
                        {
                            match user {
                                Some(user) => html! {
                                    <div class="account">
                                        <div class="account-text">
                                            <p>{&user.email}</p>
                                            <p class="muted">{"Account"}</p>
                                        </div>
                                        <span class="avatar">
                                            {
                                                user.email
                                                    .chars()
                                                    .next()
                                                    .map(|c| c.to_ascii_uppercase().to_string())
                                                    .unwrap_or_default()
                                            }
                                        </span>
                                    </div>
                                },
                                None => html! {},
                            }
                        }
                    </header>

                    <main class="page">
                        { ctx.props().children.clone() }
                    </main>
                </div>
            </div>
        }
    }
}

fn nav_item(to: Route, label: &str, collapsed: bool) -> Html {
    html! {
        <Link<Route> classes="nav-link" {to}>
            { if collapsed { label.chars().next().unwrap_or(' ').to_string() } else { label.to_string() } }
        </Link<Route>>
    }
}
