use log::{info, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use papatya_taksi::config;
use papatya_taksi::content::{SITE_DESCRIPTION, SITE_TITLE};
use papatya_taksi::dom::{set_document_title, set_meta_description};
use papatya_taksi::pages::home::Home;

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
        // Single page site: stray paths get the same page.
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    use_mount(|| {
        if let Err(err) = set_document_title(SITE_TITLE) {
            warn!("Could not set document title: {}", err);
        }
        if let Err(err) = set_meta_description(SITE_DESCRIPTION) {
            warn!("Could not set meta description: {}", err);
        }
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
