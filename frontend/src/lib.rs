pub mod components;
pub mod config;
pub mod dom;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{results::Results, roll::Roll};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Roll,
   #[at("/results")] Results,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Roll => html! { <Roll /> },
       Route::Results => html! { <Results /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::Roll} /> },
   }
}
