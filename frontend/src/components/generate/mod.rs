//! Single-page generation flow.
//!
//! Every declared template variable must have a non-blank value before the
//! backend is called; validation failures stay local. A successful call
//! must return a non-empty `storage_url`, which is handed to the download
//! view through the URL query.

pub mod bulk;

use std::collections::BTreeMap;

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::model::page::GeneratedPage;
use common::model::template::TemplateSummary;
use common::requests::CreatePageRequest;
use common::validate::missing_variable_values;

use crate::api::{self, ApiError};
use crate::routes::{DownloadQuery, Route};
use crate::toast::show_toast;

pub enum Msg {
    TemplatesLoaded(Result<Vec<TemplateSummary>, ApiError>),
    SelectTemplate(String),
    SetValue(String, String),
    Submit,
    Generated(Result<GeneratedPage, ApiError>),
}

pub struct SingleGenerate {
    templates: Vec<TemplateSummary>,
    template_id: String,
    values: BTreeMap<String, String>,
    submitting: bool,
    error: Option<String>,
}

impl Component for SingleGenerate {
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
            values: BTreeMap::new(),
            submitting: false,
            error: None,
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
                self.values.clear();
                self.error = None;
                true
            }
            Msg::SetValue(name, value) => {
                self.values.insert(name, value);
                true
            }
            Msg::Submit => {
                if self.template_id.is_empty() {
                    show_toast("Select a template");
                    return false;
                }
                let declared = self
                    .selected_template()
                    .map(|template| template.variables.clone())
                    .unwrap_or_default();
                if declared.is_empty() {
                    return self.fail("Template has no variables");
                }
                let missing = missing_variable_values(&declared, &self.values);
                if !missing.is_empty() {
                    // Local failure; the backend is never called.
                    return self.fail(&format!("Missing values: {}", missing.join(", ")));
                }

                self.submitting = true;
                self.error = None;
                let request = CreatePageRequest {
                    template_id: self.template_id.clone(),
                    variables: self.values.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Generated(api::pages::create(&request).await));
                });
                true
            }
            Msg::Generated(Ok(page)) => {
                self.submitting = false;
                if page.storage_url.is_empty() {
                    return self.fail("Generated page URL missing.");
                }
                show_toast("Page generated");
                if let Some(navigator) = ctx.link().navigator() {
                    let query = DownloadQuery {
                        job_id: None,
                        mode: "single".to_string(),
                        url: page.storage_url,
                    };
                    navigator.push_with_query(&Route::Download, &query).ok();
                }
                true
            }
            Msg::Generated(Err(err)) => {
                self.submitting = false;
                self.fail(&err.to_string())
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="stack">
                <div>
                    <h1>{"Generate Page"}</h1>
                    <p class="muted">{"Fill variables and generate a single SEO page."}</p>
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

                    { self.variable_inputs(ctx) }

                    <button
                        class="button"
                        disabled={self.submitting}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.submitting { "Generating..." } else { "Generate Page" } }
                    </button>

                    {
                        match &self.error {
                            Some(error) => html! { <div class="error-box">{error}</div> },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        }
    }
}

impl SingleGenerate {
    fn selected_template(&self) -> Option<&TemplateSummary> {
        self.templates
            .iter()
            .find(|template| template.id == self.template_id)
    }

    fn fail(&mut self, message: &str) -> bool {
        show_toast(message);
        self.error = Some(message.to_string());
        true
    }

    fn variable_inputs(&self, ctx: &Context<Self>) -> Html {
        let Some(template) = self.selected_template() else {
            return html! {};
        };
        html! {
            <div class="stack">
                {
                    for template.variables.iter().map(|variable| {
                        let name = variable.clone();
                        let value = self.values.get(variable).cloned().unwrap_or_default();
                        let oninput = ctx.link().callback(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::SetValue(name.clone(), input.value())
                        });
                        html! {
                            <label class="field" key={variable.clone()}>
                                <span>{variable}</span>
                                <input
                                    {value}
                                    placeholder={format!("Enter {variable}")}
                                    {oninput}
                                />
                            </label>
                        }
                    })
                }
            </div>
        }
    }
}
