use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::template::TemplateSummary;

use crate::api::{self, ApiError};
use crate::routes::Route;
use crate::toast::show_toast;

pub enum Msg {
    Loaded(Result<Vec<TemplateSummary>, ApiError>),
}

pub struct TemplatesList {
    templates: Vec<TemplateSummary>,
    loading: bool,
}

impl Component for TemplatesList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api::templates::list().await));
        });
        Self {
            templates: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(templates)) => {
                self.templates = templates;
                self.loading = false;
                true
            }
            Msg::Loaded(Err(_)) => {
                show_toast("Failed to load templates");
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = if self.loading {
            html! { <div class="card"><p class="muted">{"Loading templates..."}</p></div> }
        } else if self.templates.is_empty() {
            html! {
                <div class="card">
                    <p class="muted">{"No templates yet. Create one to get started."}</p>
                </div>
            }
        } else {
            html! {
                <div class="card">
                    <ul class="plain-list">
                        {
                            for self.templates.iter().map(|template| html! {
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
        };

        html! {
            <div class="stack">
                <div class="card-head">
                    <div>
                        <h1>{"Templates"}</h1>
                        <p class="muted">{"Manage your HTML templates"}</p>
                    </div>
                    <Link<Route> classes="button" to={Route::TemplateNew}>{"New Template"}</Link<Route>>
                </div>
                { body }
            </div>
        }
    }
}
