//! Route table and the query-parameter handoff contract.
//!
//! Generation, waiting, download, and result views share no in-memory state;
//! everything they need travels in the URL as `jobId`, `mode`, and `url`
//! (the latter percent-encoded by the query serializer).

use serde::{Deserialize, Serialize};
use yew::{html, Html};
use yew_router::prelude::*;

use crate::components::dashboard::Overview;
use crate::components::download::DownloadView;
use crate::components::generate::bulk::BulkGenerate;
use crate::components::generate::SingleGenerate;
use crate::components::home::Home;
use crate::components::layout::DashboardLayout;
use crate::components::result::ResultView;
use crate::components::results::ResultsList;
use crate::components::templates::list::TemplatesList;
use crate::components::templates::{EditTemplate, NewTemplate};
use crate::components::waiting::WaitingView;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/templates")]
    Templates,
    #[at("/dashboard/templates/new")]
    TemplateNew,
    #[at("/dashboard/templates/:id")]
    TemplateEdit { id: String },
    #[at("/dashboard/pages")]
    Results,
    #[at("/dashboard/generate")]
    Generate,
    #[at("/dashboard/generate/bulk")]
    GenerateBulk,
    #[at("/dashboard/waiting")]
    Waiting,
    #[at("/dashboard/download")]
    Download,
    #[at("/dashboard/result")]
    Result,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query parameters of the waiting and result views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobQuery {
    #[serde(rename = "jobId", default)]
    pub job_id: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            job_id: String::new(),
            mode: default_mode(),
        }
    }
}

/// Query parameters of the download-handoff view.
///
/// `job_id` is absent on the single-page path, which reaches the download
/// view straight from generation without a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadQuery {
    #[serde(rename = "jobId", default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub url: String,
}

impl Default for DownloadQuery {
    fn default() -> Self {
        Self {
            job_id: None,
            mode: default_mode(),
            url: String::new(),
        }
    }
}

fn default_mode() -> String {
    "single".to_string()
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"Page not found"}</h1>
                <p><Link<Route> to={Route::Dashboard}>{"Back to the dashboard"}</Link<Route>></p>
            </div>
        },
        dashboard_route => html! {
            <DashboardLayout>
                { dashboard_view(dashboard_route) }
            </DashboardLayout>
        },
    }
}

fn dashboard_view(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Overview /> },
        Route::Templates => html! { <TemplatesList /> },
        Route::TemplateNew => html! { <NewTemplate /> },
        Route::TemplateEdit { id } => html! { <EditTemplate {id} /> },
        Route::Results => html! { <ResultsList /> },
        Route::Generate => html! { <SingleGenerate /> },
        Route::GenerateBulk => html! { <BulkGenerate /> },
        Route::Waiting => html! { <WaitingView /> },
        Route::Download => html! { <DownloadView /> },
        Route::Result => html! { <ResultView /> },
        // Home and NotFound never reach here; switch() handles them.
        Route::Home | Route::NotFound => html! {},
    }
}
