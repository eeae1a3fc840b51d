use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod content;
pub mod forms;
pub mod components {
    pub mod features;
    pub mod fields;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod how_it_works;
    pub mod impact;
    pub mod modal;
    pub mod toast;
}
pub mod modals {
    pub mod demo;
    pub mod donor_signup;
    pub mod hospital;
    pub mod schedule;
}
pub mod pages {
    pub mod landing;
    pub mod legal;
    pub mod not_found;
}

use components::toast::ToastProvider;
use pages::{
    landing::Landing,
    legal::{HipaaCompliance, PrivacyPolicy, TermsOfService},
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/hipaa")]
    Hipaa,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Hipaa => {
            info!("Rendering HIPAA page");
            html! { <HipaaCompliance /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}
