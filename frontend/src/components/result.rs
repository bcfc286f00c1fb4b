//! Result-summary view for terminal jobs that produced no download URL.
//!
//! One-shot snapshot fetch, no polling and no links.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::jobs::BulkJob;

use crate::api::{self, ApiError};
use crate::routes::{JobQuery, Route};

pub enum Msg {
    Loaded(Result<BulkJob, ApiError>),
}

pub struct ResultView {
    query: JobQuery,
    job: Option<BulkJob>,
    error: Option<String>,
}

impl Component for ResultView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let query = ctx
            .link()
            .location()
            .and_then(|location| location.query::<JobQuery>().ok())
            .unwrap_or_default();
        if !query.job_id.is_empty() {
            let job_id = query.job_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::bulk::status(&job_id).await));
            });
        }
        Self {
            query,
            job: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(job)) => {
                self.job = Some(job);
                true
            }
            Msg::Loaded(Err(_)) => {
                self.error = Some("Unable to load job result.".to_string());
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let job_id = if self.query.job_id.is_empty() {
            "Unknown".to_string()
        } else {
            self.query.job_id.clone()
        };
        let mode_label = if self.query.mode == "bulk" { "Bulk" } else { "Single" };

        html! {
            <div class="stack">
                <div class="card">
                    <h1>{"Result"}</h1>
                    <p class="muted">{ format!("Job ID: {job_id}") }</p>
                    <p class="muted">{ format!("Type: {mode_label}") }</p>
                </div>

                {
                    match &self.error {
                        Some(error) => html! { <div class="card"><p class="muted">{error}</p></div> },
                        None => html! {},
                    }
                }

                {
                    match &self.job {
                        Some(job) => html! {
                            <div class="card stack">
                                <div class="stat-grid">
                                    <div class="stat">
                                        <p class="muted">{"Status"}</p>
                                        <p>{ job.status.label() }</p>
                                    </div>
                                    <div class="stat">
                                        <p class="muted">{"Processed"}</p>
                                        <p>{ job.processed_rows }</p>
                                    </div>
                                    <div class="stat">
                                        <p class="muted">{"Failed"}</p>
                                        <p>{ job.failed_rows }</p>
                                    </div>
                                    <div class="stat">
                                        <p class="muted">{"Total"}</p>
                                        <p>{ job.total_rows }</p>
                                    </div>
                                </div>
                                <p class="hint">{"Download links are hidden for this view."}</p>
                            </div>
                        },
                        None => html! {},
                    }
                }

                <div class="card">
                    <Link<Route> classes="button secondary" to={Route::Dashboard}>
                        {"Back to Dashboard"}
                    </Link<Route>>
                </div>
            </div>
        }
    }
}
