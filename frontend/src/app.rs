use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::routes::{switch, Route};
use crate::session::SessionProvider;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <SessionProvider>
                    <Switch<Route> render={switch} />
                </SessionProvider>
            </BrowserRouter>
        }
    }
}
