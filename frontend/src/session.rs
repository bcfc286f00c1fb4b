//! Explicitly-scoped session context.
//!
//! The identity provider lives outside this application; after sign-in it
//! deposits a bearer token under [`TOKEN_STORAGE_KEY`]. The provider
//! component reads that token once at startup, resolves the account through
//! `GET /api/auth/me`, and exposes the result (plus a logout action) to the
//! whole UI tree. Logout clears the token and returns to the landing page;
//! nothing else in the app ever writes session state.

use gloo_storage::{LocalStorage, Storage};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::model::user::User;

use crate::api;
use crate::routes::Route;
use crate::toast::show_toast;

/// Storage key the external session provider writes the access token to.
pub const TOKEN_STORAGE_KEY: &str = "seo_dashboard_token";

/// Session accessor used by the API client on every request.
///
/// Returns `None` when no token is present; calls then go out without an
/// `Authorization` header and the backend rejects them.
pub fn access_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_STORAGE_KEY)
        .ok()
        .filter(|token| !token.is_empty())
}

/// Context value shared with every view under the provider.
#[derive(Clone, PartialEq)]
pub struct SessionCtx {
    pub user: Option<User>,
    pub loading: bool,
    pub logout: Callback<()>,
}

impl SessionCtx {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub enum Msg {
    Loaded(Option<User>),
    Logout,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct SessionProvider {
    user: Option<User>,
    loading: bool,
}

impl Component for SessionProvider {
    type Message = Msg;
    type Properties = SessionProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let user = match access_token() {
                Some(_) => api::auth::me().await.ok(),
                None => None,
            };
            link.send_message(Msg::Loaded(user));
        });
        Self {
            user: None,
            loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(user) => {
                self.user = user;
                self.loading = false;
                true
            }
            Msg::Logout => {
                LocalStorage::delete(TOKEN_STORAGE_KEY);
                self.user = None;
                show_toast("Logged out successfully.");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = SessionCtx {
            user: self.user.clone(),
            loading: self.loading,
            logout: ctx.link().callback(|_| Msg::Logout),
        };
        html! {
            <ContextProvider<SessionCtx> context={session}>
                { ctx.props().children.clone() }
            </ContextProvider<SessionCtx>>
        }
    }
}
