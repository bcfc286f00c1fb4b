//! Bulk generation flow: template + CSV upload, then hand the job id to the
//! waiting view.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::format::format_progress_label;
use common::jobs::BulkJob;
use common::model::template::TemplateSummary;

use crate::api::{self, ApiError};
use crate::routes::{JobQuery, Route};
use crate::toast::show_toast;

pub enum Msg {
    TemplatesLoaded(Result<Vec<TemplateSummary>, ApiError>),
    SelectTemplate(String),
    FileSelected(Option<web_sys::File>),
    Submit,
    Submitted(Result<BulkJob, ApiError>),
}

pub struct BulkGenerate {
    templates: Vec<TemplateSummary>,
    template_id: String,
    file: Option<web_sys::File>,
    job: Option<BulkJob>,
    submitting: bool,
}

impl Component for BulkGenerate {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::TemplatesLoaded(api::templates::list().await));
        });
        Self {
            templates: Vec::new(),
            template_id: String::new(),
            file: None,
            job: None,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TemplatesLoaded(Ok(templates)) => {
                self.templates = templates;
                true
            }
            Msg::TemplatesLoaded(Err(_)) => {
                show_toast("Failed to load templates");
                false
            }
            Msg::SelectTemplate(template_id) => {
                self.template_id = template_id;
                true
            }
            Msg::FileSelected(file) => {
                self.file = file;
                true
            }
            Msg::Submit => {
                if self.template_id.is_empty() {
                    show_toast("Select a template");
                    return false;
                }
                let Some(file) = self.file.clone() else {
                    show_toast("Upload a CSV file");
                    return false;
                };
                self.submitting = true;
                let template_id = self.template_id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(
                        api::bulk::create(&template_id, &file).await,
                    ));
                });
                true
            }
            Msg::Submitted(Ok(job)) => {
                self.submitting = false;
                show_toast("Bulk job queued");
                if let Some(navigator) = ctx.link().navigator() {
                    let query = JobQuery {
                        job_id: job.id.clone(),
                        mode: "bulk".to_string(),
                    };
                    navigator.push_with_query(&Route::Waiting, &query).ok();
                }
                self.job = Some(job);
                true
            }
            Msg::Submitted(Err(err)) => {
                self.submitting = false;
                show_toast(&err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="stack">
                <div>
                    <h1>{"Bulk Generation"}</h1>
                    <p class="muted">{"Upload a CSV to generate pages in bulk."}</p>
                </div>

                <div class="card stack">
                    <label class="field">
                        <span>{"Template"}</span>
                        <select onchange={link.callback(|e: Event| {
                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                            Msg::SelectTemplate(select.value())
                        })}>
                            <option value="" selected={self.template_id.is_empty()}>
                                {"Select template"}
                            </option>
                            {
                                for self.templates.iter().map(|template| html! {
                                    <option
                                        value={template.id.clone()}
                                        selected={template.id == self.template_id}
                                    >
                                        {&template.name}
                                    </option>
                                })
                            }
                        </select>
                    </label>

                    <label class="field">
                        <span>{"CSV File"}</span>
                        <input
                            type="file"
                            accept=".csv"
                            onchange={link.callback(|e: Event| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::FileSelected(input.files().and_then(|files| files.get(0)))
                            })}
                        />
                        <span class="hint">{"Make sure CSV headers match template variables."}</span>
                    </label>

                    <button
                        class="button"
                        disabled={self.submitting}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.submitting { "Uploading..." } else { "Start Bulk Job" } }
                    </button>
                </div>

                { self.job_panel() }
            </div>
        }
    }
}

impl BulkGenerate {
    fn job_panel(&self) -> Html {
        let Some(job) = &self.job else {
            return html! {};
        };
        html! {
            <div class="card stack">
                <h2>{"Job Status"}</h2>
                <p>{ format!("ID: {}", job.id) }</p>
                <p>{ format!("Status: {}", job.status.label()) }</p>
                <p>{ format!(
                    "Processed: {}",
                    format_progress_label(job.processed_rows, job.total_rows)
                ) }</p>
            </div>
        }
    }
}
