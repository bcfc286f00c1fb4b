//! Landing view. Authenticated sessions bounce straight to the dashboard;
//! sign-in itself belongs to the external identity provider.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::SessionCtx;

pub enum Msg {
    SessionChanged(SessionCtx),
}

pub struct Home {
    session: Option<SessionCtx>,
    _session_handle: Option<ContextHandle<SessionCtx>>,
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, handle) = match ctx
            .link()
            .context::<SessionCtx>(ctx.link().callback(Msg::SessionChanged))
        {
            Some((session, handle)) => (Some(session), Some(handle)),
            None => (None, None),
        };
        Self {
            session,
            _session_handle: handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = Some(session);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(session) = &self.session else {
            return html! {};
        };
        if session.loading {
            return html! {
                <div class="landing">
                    <p class="muted">{"Checking session..."}</p>
                </div>
            };
        }
        if session.is_authenticated() {
            return html! { <Redirect<Route> to={Route::Dashboard} /> };
        }
        html! {
            <div class="landing">
                <h1>{"Programmatic SEO"}</h1>
                <p>{"Generate landing pages from HTML templates, one at a time or in bulk from a CSV."}</p>
                <p class="muted">{"Sign in through your identity provider to open the workspace."}</p>
            </div>
        }
    }
}
