//! Waiting view: polls a bulk job until a terminal state and hands off.
//!
//! The poll timer is a [`gloo_timers::callback::Interval`] held in component
//! state; dropping the component drops the handle and no further ticks
//! fire. A response already in flight at teardown resolves into a message
//! for a dead scope and is discarded, and the settle-once tracker in
//! `common::jobs::poll` suppresses any duplicate terminal transition inside
//! a live scope.

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::WaitingView;

use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::jobs::poll::GenerationMode;

use crate::routes::JobQuery;

/// Fixed polling cadence. No backoff: transient failures just wait for the
/// next tick.
const POLL_INTERVAL_MS: u32 = 2_000;
const QUOTE_INTERVAL_MS: u32 = 46_000;

impl Component for WaitingView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let query = ctx
            .link()
            .location()
            .and_then(|location| location.query::<JobQuery>().ok())
            .unwrap_or_default();
        let mut view = WaitingView::new(query.job_id, GenerationMode::from_param(&query.mode));

        if !view.job_id.is_empty() {
            // Poll once right away; the interval takes over afterwards.
            ctx.link().send_message(Msg::Tick);
            let link = ctx.link().clone();
            view.poll_timer = Some(Interval::new(POLL_INTERVAL_MS, move || {
                link.send_message(Msg::Tick);
            }));
            let link = ctx.link().clone();
            view.quote_timer = Some(Interval::new(QUOTE_INTERVAL_MS, move || {
                link.send_message(Msg::NextQuote);
            }));
        }
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
