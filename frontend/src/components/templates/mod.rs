//! Template management: list, editor, and the new/edit route wrappers.

pub mod editor;
pub mod list;

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use common::model::template::Template;

use crate::api::{self, ApiError};
use crate::routes::Route;
use self::editor::TemplateEditor;

pub struct NewTemplate;

impl Component for NewTemplate {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigator = ctx.link().navigator();
        let on_saved = Callback::from(move |id: String| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::TemplateEdit { id });
            }
        });
        html! {
            <div class="stack">
                <div>
                    <h1>{"New Template"}</h1>
                    <p class="muted">{"Upload HTML and define variables to generate pages."}</p>
                </div>
                <TemplateEditor {on_saved} />
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EditTemplateProps {
    pub id: String,
}

pub enum EditMsg {
    Loaded(Result<Template, ApiError>),
}

pub struct EditTemplate {
    template: Option<Template>,
    error: Option<String>,
}

impl Component for EditTemplate {
    type Message = EditMsg;
    type Properties = EditTemplateProps;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(EditMsg::Loaded(api::templates::get(&id).await));
        });
        Self {
            template: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EditMsg::Loaded(Ok(template)) => {
                self.template = Some(template);
                true
            }
            EditMsg::Loaded(Err(err)) => {
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match (&self.template, &self.error) {
            (Some(template), _) => html! {
                <TemplateEditor
                    template_id={Some(template.id.clone())}
                    initial_name={template.name.clone()}
                    initial_html={template.html_content.clone()}
                    on_saved={Callback::noop()}
                />
            },
            (None, Some(error)) => html! {
                <div class="card error-box">{error}</div>
            },
            (None, None) => html! {
                <div class="card"><p class="muted">{"Loading template..."}</p></div>
            },
        };
        html! {
            <div class="stack">
                <div>
                    <h1>{"Edit Template"}</h1>
                    <p class="muted">{ format!("Template ID: {}", ctx.props().id) }</p>
                </div>
                { body }
            </div>
        }
    }
}
