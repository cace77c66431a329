//! dDate web frontend.
//!
//! Yew single-page app for the dating dapp: the account-creation wizard, the
//! notification feed, and profile and chat pages, backed by a JSON gateway in
//! front of the profile canister.

mod api;
mod components;
mod config;
mod error;
mod feed;
mod hooks;
mod pages;
mod principal;
mod routes;
mod storage;
mod wizard;

use config::AppConfig;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<routes::Route> render={routes::switch} />
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
