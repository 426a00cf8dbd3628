use std::rc::Rc;

use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod newsletter;
mod sensors {
    pub mod scroll;
    pub mod viewport;
    pub mod visibility;
}
mod widgets {
    pub mod carousel;
    pub mod comparison_slider;
    pub mod cursor_glow;
    pub mod deferred_video;
    pub mod scroll_lock;
    pub mod swipe;
}
mod components {
    pub mod comparison_showcase;
    pub mod footer;
    pub mod header;
}
mod pages {
    pub mod company;
    pub mod hero;
    pub mod home;
    pub mod masterplan;
    pub mod news;
    pub mod not_found;
    pub mod product;
}

use content::SiteContent;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| content::load(), ());

    html! {
        <ContextProvider<Rc<SiteContent>> context={content}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
