use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod audio;
mod faq;
mod features;
mod hydration;
mod identity;
mod modal;
mod outside_click;
mod popover;
mod scroll;
mod pages {
    pub mod landing;
}
mod components {
    pub mod hero;
    pub mod nav;
    pub mod sections;
    pub mod signup_dialog;
    pub mod video_dialog;
}

use features::FeatureFlags;
use identity::IdentityProvider;
use pages::landing::Landing;


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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // Read once; every render sees the same snapshot
    let flags = use_state(FeatureFlags::from_build_env);

    let router = html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    };

    let content = match flags.identity() {
        Some(capability) => html! {
            <IdentityProvider capability={capability.clone()}>
                { router }
            </IdentityProvider>
        },
        None => router,
    };

    html! {
        <ContextProvider<FeatureFlags> context={(*flags).clone()}>
            { content }
        </ContextProvider<FeatureFlags>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
