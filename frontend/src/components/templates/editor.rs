//! Template editor.
//!
//! The textarea edits raw HTML; placeholder variables are extracted by the
//! backend (`POST /api/templates/validate`), never parsed locally. Each
//! edit bumps an epoch and schedules a delayed extraction; responses for a
//! stale epoch are dropped, so fast typing cannot reorder the chip row.
//! Unsaved changes are tracked with an md5 of the last-saved content.

use gloo_file::futures::read_as_text;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::template::Template;
use common::requests::{CreateTemplateRequest, UpdateTemplateRequest};

use crate::api::{self, ApiError};
use crate::toast::show_toast;

const DEFAULT_TEMPLATE: &str = "<!doctype html>\n<html>\n<head>\n  <title>{{title}}</title>\n  <meta name=\"description\" content=\"{{meta_description}}\" />\n</head>\n<body>\n  <h1>{{title}}</h1>\n  <p>{{content}}</p>\n</body>\n</html>";

/// Delay between the last keystroke and the extraction call.
const EXTRACT_DEBOUNCE_MS: u32 = 400;

pub enum Msg {
    SetName(String),
    SetHtml(String),
    FileSelected(web_sys::File),
    FileLoaded(String),
    ExtractNow(u32),
    Extracted { epoch: u32, variables: Vec<String> },
    Save,
    SaveDone(Result<Template, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct EditorProps {
    #[prop_or_default]
    pub template_id: Option<String>,
    #[prop_or_default]
    pub initial_name: String,
    #[prop_or_default]
    pub initial_html: String,
    pub on_saved: Callback<String>,
}

pub struct TemplateEditor {
    name: String,
    html_content: String,
    variables: Vec<String>,
    extract_epoch: u32,
    saving: bool,
    original_md5: Option<String>,
}

impl Component for TemplateEditor {
    type Message = Msg;
    type Properties = EditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let html_content = if props.initial_html.is_empty() {
            DEFAULT_TEMPLATE.to_string()
        } else {
            props.initial_html.clone()
        };
        let original_md5 = props
            .template_id
            .is_some()
            .then(|| compute_md5(&html_content));
        schedule_extract(ctx, 0);
        Self {
            name: props.initial_name.clone(),
            html_content,
            variables: Vec::new(),
            extract_epoch: 0,
            saving: false,
            original_md5,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => {
                self.name = name;
                true
            }
            Msg::SetHtml(content) | Msg::FileLoaded(content) => {
                if self.html_content == content {
                    return false;
                }
                self.html_content = content;
                self.extract_epoch += 1;
                schedule_extract(ctx, self.extract_epoch);
                true
            }
            Msg::FileSelected(file) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let blob = gloo_file::Blob::from(file);
                    match read_as_text(&blob).await {
                        Ok(text) => link.send_message(Msg::FileLoaded(text)),
                        Err(_) => show_toast("Could not read the selected file"),
                    }
                });
                false
            }
            Msg::ExtractNow(epoch) => {
                if epoch != self.extract_epoch {
                    return false;
                }
                let content = self.html_content.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let variables = match api::templates::extract_variables(&content).await {
                        Ok(validation) => validation.variables,
                        Err(_) => Vec::new(),
                    };
                    link.send_message(Msg::Extracted { epoch, variables });
                });
                false
            }
            Msg::Extracted { epoch, variables } => {
                if epoch != self.extract_epoch {
                    return false;
                }
                self.variables = variables;
                true
            }
            Msg::Save => {
                if self.name.trim().is_empty() {
                    show_toast("Template name is required");
                    return false;
                }
                if self.html_content.trim().is_empty() {
                    show_toast("Template content is required");
                    return false;
                }
                self.saving = true;
                let link = ctx.link().clone();
                let name = self.name.trim().to_string();
                let html_content = self.html_content.clone();
                match ctx.props().template_id.clone() {
                    Some(template_id) => spawn_local(async move {
                        let request = UpdateTemplateRequest {
                            name: Some(name),
                            html_content: Some(html_content),
                        };
                        link.send_message(Msg::SaveDone(
                            api::templates::update(&template_id, &request).await,
                        ));
                    }),
                    None => spawn_local(async move {
                        let request = CreateTemplateRequest { name, html_content };
                        link.send_message(Msg::SaveDone(api::templates::create(&request).await));
                    }),
                }
                true
            }
            Msg::SaveDone(Ok(template)) => {
                self.saving = false;
                self.original_md5 = Some(compute_md5(&self.html_content));
                show_toast(if ctx.props().template_id.is_some() {
                    "Template updated"
                } else {
                    "Template saved"
                });
                ctx.props().on_saved.emit(template.id);
                true
            }
            Msg::SaveDone(Err(err)) => {
                self.saving = false;
                show_toast(&err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let dirty = self
            .original_md5
            .as_ref()
            .is_some_and(|orig| orig != &compute_md5(&self.html_content));
        let variables_label = if self.variables.is_empty() {
            "None detected".to_string()
        } else {
            self.variables.join(", ")
        };
        let save_label = match (self.saving, ctx.props().template_id.is_some()) {
            (true, _) => "Saving...",
            (false, true) => "Save Changes",
            (false, false) => "Save Template",
        };

        html! {
            <div class="stack">
                <div class="field-row">
                    <label class="field wide">
                        <span>{"Template Name"}</span>
                        <input
                            value={self.name.clone()}
                            placeholder="Product landing page template"
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetName(input.value())
                            })}
                        />
                    </label>
                    <label class="field">
                        <span>{"Upload HTML"}</span>
                        <input
                            type="file"
                            accept=".html,.htm"
                            onchange={link.batch_callback(|e: Event| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
                            })}
                        />
                    </label>
                </div>

                <div class="card">
                    <div class="card-head">
                        <span>
                            {"Template HTML"}
                            { if dirty { html! { <span class="dirty-dot" title="Unsaved changes" /> } } else { html! {} } }
                        </span>
                        <span class="muted">{ format!("Variables: {variables_label}") }</span>
                    </div>
                    <textarea
                        class="code-editor"
                        rows="24"
                        value={self.html_content.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::SetHtml(input.value())
                        })}
                    />
                </div>

                <div class="actions-end">
                    <button
                        class="button"
                        disabled={self.saving}
                        onclick={link.callback(|_| Msg::Save)}
                    >
                        { save_label }
                    </button>
                </div>
            </div>
        }
    }
}

fn schedule_extract(ctx: &Context<TemplateEditor>, epoch: u32) {
    let link = ctx.link().clone();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(EXTRACT_DEBOUNCE_MS).await;
        link.send_message(Msg::ExtractNow(epoch));
    });
}

fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}
