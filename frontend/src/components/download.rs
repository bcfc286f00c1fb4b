//! Download-handoff view.
//!
//! Receives `{jobId?, mode, url}` through the query string and saves the
//! artifact client-side on demand. A failed download surfaces a blocking
//! alert; the temporary object URL is released either way (see
//! `crate::download`).

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::download::{fetch_and_save, DownloadError};
use crate::routes::{DownloadQuery, Route};

pub enum Msg {
    Start,
    Finished(Result<(), DownloadError>),
}

pub struct DownloadView {
    query: DownloadQuery,
    downloading: bool,
}

impl Component for DownloadView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let query = ctx
            .link()
            .location()
            .and_then(|location| location.query::<DownloadQuery>().ok())
            .unwrap_or_default();
        Self {
            query,
            downloading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                if self.query.url.is_empty() || self.downloading {
                    return false;
                }
                self.downloading = true;
                let url = self.query.url.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(fetch_and_save(&url).await));
                });
                true
            }
            Msg::Finished(result) => {
                self.downloading = false;
                if let Err(err) = result {
                    gloo_console::error!(format!("download failed: {err}"));
                    if let Some(window) = web_sys::window() {
                        window.alert_with_message("Failed to download file.").ok();
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let mode_label = if self.query.mode == "bulk" { "Bulk" } else { "Single" };

        let body = if self.query.url.is_empty() {
            html! {
                <div class="card">
                    <p>{"Missing download URL."}</p>
                    <Link<Route> to={Route::Generate}>{"Go back to Generate"}</Link<Route>>
                </div>
            }
        } else {
            html! {
                <div class="card stack">
                    <p>{"Your generated page is ready. Use the link below to open or download it."}</p>
                    <div class="actions">
                        <button
                            class="button"
                            disabled={self.downloading}
                            onclick={link.callback(|_| Msg::Start)}
                        >
                            { if self.downloading { "Downloading..." } else { "Download" } }
                        </button>
                        <Link<Route> classes="button secondary" to={Route::Results}>
                            {"Back to Results"}
                        </Link<Route>>
                    </div>
                </div>
            }
        };

        html! {
            <div class="stack">
                <div>
                    <h1>{"Result Download"}</h1>
                    {
                        match &self.query.job_id {
                            Some(job_id) => html! {
                                <p class="muted">{ format!("Job ID: {job_id} ({mode_label})") }</p>
                            },
                            None => html! {},
                        }
                    }
                </div>
                { body }
            </div>
        }
    }
}
