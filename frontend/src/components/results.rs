//! Results view: generated pages, job statistics, recent bulk jobs.
//!
//! Deletion is the only mutation the client ever performs, and it always
//! goes through a confirm dialog first.

use futures::join;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::format::format_progress_label;
use common::jobs::{JobStats, JobSummary};
use common::model::page::PageSummary;

use crate::api::{self, ApiError};
use crate::toast::show_toast;

pub enum Msg {
    Loaded {
        pages: Vec<PageSummary>,
        stats: JobStats,
        recent: Vec<JobSummary>,
    },
    LoadFailed,
    DeletePage(String),
    PageDeleted(String, Result<(), ApiError>),
    DeleteJob(String),
    JobDeleted(Result<(), ApiError>),
}

pub struct ResultsList {
    pages: Vec<PageSummary>,
    stats: JobStats,
    recent: Vec<JobSummary>,
    loading: bool,
}

impl Component for ResultsList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            pages: Vec::new(),
            stats: JobStats::default(),
            recent: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded {
                pages,
                stats,
                recent,
            } => {
                self.pages = pages;
                self.stats = stats;
                self.recent = recent;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                show_toast("Failed to load results");
                self.loading = false;
                true
            }
            Msg::DeletePage(page_id) => {
                if !confirm("Delete this page? This cannot be undone.") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::pages::delete(&page_id).await;
                    link.send_message(Msg::PageDeleted(page_id, result));
                });
                false
            }
            Msg::PageDeleted(page_id, Ok(())) => {
                self.pages.retain(|page| page.id != page_id);
                show_toast("Page deleted");
                true
            }
            Msg::PageDeleted(_, Err(err)) => {
                show_toast(&err.to_string());
                false
            }
            Msg::DeleteJob(job_id) => {
                if !confirm("Delete this bulk job? This cannot be undone.") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::JobDeleted(api::bulk::delete(&job_id).await));
                });
                false
            }
            Msg::JobDeleted(Ok(())) => {
                show_toast("Bulk job deleted");
                load(ctx);
                true
            }
            Msg::JobDeleted(Err(err)) => {
                show_toast(&err.to_string());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="stack">
                <div>
                    <h1>{"Results"}</h1>
                    <p class="muted">{"View generated results"}</p>
                </div>

                { self.stats_strip() }
                { self.pages_card(ctx) }
                { self.recent_jobs_card(ctx) }
            </div>
        }
    }
}

impl ResultsList {
    fn stats_strip(&self) -> Html {
        let stats = &self.stats;
        html! {
            <div class="stat-grid">
                { stat("Total Jobs", stats.total_jobs) }
                { stat("Queued", stats.queued) }
                { stat("Processing", stats.processing) }
                { stat("Completed", stats.completed) }
                { stat("Failed", stats.failed) }
            </div>
        }
    }

    fn pages_card(&self, ctx: &Context<Self>) -> Html {
        let body = if self.loading {
            html! { <p class="muted">{"Loading results..."}</p> }
        } else if self.pages.is_empty() {
            html! { <p class="muted">{"No generated pages yet."}</p> }
        } else {
            html! {
                <ul class="plain-list">
                    {
                        for self.pages.iter().map(|page| {
                            let page_id = page.id.clone();
                            let onclick = ctx
                                .link()
                                .callback(move |_| Msg::DeletePage(page_id.clone()));
                            html! {
                                <li key={page.id.clone()}>
                                    <div>
                                        <span>{&page.title}</span>
                                        <span class="muted">{&page.slug}</span>
                                    </div>
                                    <button class="button danger" {onclick}>{"Delete"}</button>
                                </li>
                            }
                        })
                    }
                </ul>
            }
        };
        html! {
            <div class="card">
                <h2>{"Generated Pages"}</h2>
                { body }
            </div>
        }
    }

    fn recent_jobs_card(&self, ctx: &Context<Self>) -> Html {
        if self.recent.is_empty() {
            return html! {};
        }
        html! {
            <div class="card">
                <h2>{"Recent Bulk Jobs"}</h2>
                <ul class="plain-list">
                    {
                        for self.recent.iter().map(|job| {
                            let job_id = job.id.clone();
                            let onclick = ctx
                                .link()
                                .callback(move |_| Msg::DeleteJob(job_id.clone()));
                            html! {
                                <li key={job.id.clone()}>
                                    <div>
                                        <span>
                                            { job.csv_filename.clone().unwrap_or_else(|| job.id.clone()) }
                                        </span>
                                        <span class="muted">
                                            { format!(
                                                "{} - {}",
                                                job.status.label(),
                                                format_progress_label(job.processed_rows, job.total_rows)
                                            ) }
                                        </span>
                                    </div>
                                    <button class="button danger" {onclick}>{"Delete"}</button>
                                </li>
                            }
                        })
                    }
                </ul>
            </div>
        }
    }
}

fn stat(label: &str, value: u32) -> Html {
    html! {
        <div class="stat-card">
            <p class="muted">{label}</p>
            <p class="stat-value">{value}</p>
        </div>
    }
}

fn load(ctx: &Context<ResultsList>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let (pages, stats, recent) = join!(
            api::pages::list(),
            api::jobs::stats(),
            api::jobs::recent(5),
        );
        match (pages, stats, recent) {
            (Ok(pages), Ok(stats), Ok(recent)) => {
                link.send_message(Msg::Loaded {
                    pages,
                    stats,
                    recent,
                });
            }
            _ => link.send_message(Msg::LoadFailed),
        }
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
