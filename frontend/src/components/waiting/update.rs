//! Update logic of the waiting view: the poll loop itself.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::jobs::poll::PollStep;

use crate::api;
use crate::routes::{DownloadQuery, JobQuery, Route};

use super::messages::Msg;
use super::state::WaitingView;

pub fn update(view: &mut WaitingView, ctx: &Context<WaitingView>, msg: Msg) -> bool {
    match msg {
        Msg::Tick => {
            if view.job_id.is_empty() || view.tracker.is_settled() {
                return false;
            }
            // Skip the tick if the previous request has not resolved yet.
            if view.in_flight {
                return false;
            }
            view.in_flight = true;
            let job_id = view.job_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::StatusFetched(api::bulk::status(&job_id).await));
            });
            false
        }

        Msg::StatusFetched(Ok(job)) => {
            view.in_flight = false;
            let step = view.tracker.observe(&job, view.mode);
            view.job = Some(job);
            match step {
                // Tracker already settled; a late response changes nothing.
                None => false,
                Some(PollStep::Pending) => {
                    view.error = None;
                    true
                }
                Some(PollStep::Failed) => {
                    view.stop_polling();
                    view.error = Some("Job failed. Please try again.".to_string());
                    true
                }
                Some(PollStep::Download { url }) => {
                    view.stop_polling();
                    if let Some(navigator) = ctx.link().navigator() {
                        let query = DownloadQuery {
                            job_id: Some(view.job_id.clone()),
                            mode: view.mode.as_param().to_string(),
                            url,
                        };
                        navigator.replace_with_query(&Route::Download, &query).ok();
                    }
                    false
                }
                Some(PollStep::Summary) => {
                    view.stop_polling();
                    if let Some(navigator) = ctx.link().navigator() {
                        let query = JobQuery {
                            job_id: view.job_id.clone(),
                            mode: view.mode.as_param().to_string(),
                        };
                        navigator.replace_with_query(&Route::Result, &query).ok();
                    }
                    false
                }
            }
        }

        Msg::StatusFetched(Err(err)) => {
            view.in_flight = false;
            if view.tracker.is_settled() {
                return false;
            }
            // Transient: the timer keeps running and the next tick retries.
            gloo_console::error!(format!("job status fetch failed: {err}"));
            view.error = Some("Unable to fetch job status.".to_string());
            true
        }

        Msg::NextQuote => {
            view.advance_quote();
            true
        }
    }
}
