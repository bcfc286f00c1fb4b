//! Overview: headline counters, quick actions, recent activity.

use futures::join;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::jobs::{JobStats, JobSummary};
use common::model::page::PageSummary;
use common::model::template::TemplateSummary;

use crate::api;
use crate::routes::Route;
use crate::toast::show_toast;

pub enum Msg {
    Loaded {
        templates: Vec<TemplateSummary>,
        pages: Vec<PageSummary>,
        stats: JobStats,
        recent: Vec<JobSummary>,
    },
    LoadFailed,
}

pub struct Overview {
    templates: Vec<TemplateSummary>,
    pages: Vec<PageSummary>,
    stats: JobStats,
    recent: Vec<JobSummary>,
    loading: bool,
}

impl Component for Overview {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            // Independent reads; no ordering between them.
            let (templates, pages, stats, recent) = join!(
                api::templates::list(),
                api::pages::list(),
                api::jobs::stats(),
                api::jobs::recent(5),
            );
            match (templates, pages, stats, recent) {
                (Ok(templates), Ok(pages), Ok(stats), Ok(recent)) => {
                    link.send_message(Msg::Loaded {
                        templates,
                        pages,
                        stats,
                        recent,
                    });
                }
                _ => link.send_message(Msg::LoadFailed),
            }
        });
        Self {
            templates: Vec::new(),
            pages: Vec::new(),
            stats: JobStats::default(),
            recent: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded {
                templates,
                pages,
                stats,
                recent,
            } => {
                self.templates = templates;
                self.pages = pages;
                self.stats = stats;
                self.recent = recent;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                show_toast("Failed to load dashboard data");
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="stack">
                <div>
                    <h1>{"Dashboard"}</h1>
                    <p class="muted">{"Welcome back! Here's your overview."}</p>
                </div>

                <div class="stat-grid">
                    { stat_card(Route::Templates, "Templates", self.templates.len()) }
                    { stat_card(Route::Results, "Results", self.pages.len()) }
                    { stat_card(Route::GenerateBulk, "Bulk Jobs", self.stats.total_jobs as usize) }
                </div>

                <div class="card">
                    <h2>{"Quick Actions"}</h2>
                    <div class="action-grid">
                        <Link<Route> classes="action" to={Route::TemplateNew}>{"Create New Template"}</Link<Route>>
                        <Link<Route> classes="action" to={Route::Generate}>{"Generate Page"}</Link<Route>>
                        <Link<Route> classes="action" to={Route::GenerateBulk}>{"Bulk Generation"}</Link<Route>>
                        <Link<Route> classes="action" to={Route::Results}>{"View All Results"}</Link<Route>>
                    </div>
                </div>

                { self.recent_templates() }
                { self.recent_pages() }
                { self.recent_jobs() }
            </div>
        }
    }
}

impl Overview {
    fn recent_templates(&self) -> Html {
        if self.templates.is_empty() {
            return html! {};
        }
        html! {
            <div class="card">
                <div class="card-head">
                    <h2>{"Recent Templates"}</h2>
                    <Link<Route> to={Route::Templates}>{"View all"}</Link<Route>>
                </div>
                <ul class="plain-list">
                    {
                        for self.templates.iter().take(3).map(|template| html! {
                            <li key={template.id.clone()}>
                                <Link<Route> to={Route::TemplateEdit { id: template.id.clone() }}>
                                    <span>{&template.name}</span>
                                    <span class="muted">
                                        { format!("{} variables", template.variables.len()) }
                                    </span>
                                </Link<Route>>
                            </li>
                        })
                    }
                </ul>
            </div>
        }
    }

    fn recent_pages(&self) -> Html {
        if self.pages.is_empty() {
            return html! {};
        }
        html! {
            <div class="card">
                <div class="card-head">
                    <h2>{"Recent Results"}</h2>
                    <Link<Route> to={Route::Results}>{"View all"}</Link<Route>>
                </div>
                <ul class="plain-list">
                    {
                        for self.pages.iter().take(3).map(|page| html! {
                            <li key={page.id.clone()}>
                                <span>{&page.title}</span>
                                <span class="muted">{&page.slug}</span>
                            </li>
                        })
                    }
                </ul>
            </div>
        }
    }

    fn recent_jobs(&self) -> Html {
        if self.recent.is_empty() {
            return html! {};
        }
        html! {
            <div class="card">
                <h2>{"Recent Bulk Jobs"}</h2>
                <ul class="plain-list">
                    {
                        for self.recent.iter().map(|job| html! {
                            <li key={job.id.clone()}>
                                <span>{ job.csv_filename.clone().unwrap_or_else(|| job.id.clone()) }</span>
                                <span class={format!("status-badge {}", status_class(job))}>
                                    { job.status.label() }
                                </span>
                            </li>
                        })
                    }
                </ul>
            </div>
        }
    }
}

fn stat_card(to: Route, label: &str, count: usize) -> Html {
    html! {
        <Link<Route> classes="stat-card" {to}>
            <p class="muted">{label}</p>
            <p class="stat-value">{count}</p>
        </Link<Route>>
    }
}

fn status_class(job: &JobSummary) -> &'static str {
    use common::jobs::JobStatus::*;
    match job.status {
        Completed => "ok",
        CompletedWithErrors => "warn",
        Failed => "bad",
        Queued | Processing => "busy",
    }
}
