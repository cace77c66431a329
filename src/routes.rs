use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{Chat, CreateAccount, Home, NotFound, Notifications, ProfileDetail};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/create-account")]
    CreateAccount,
    #[at("/notification")]
    Notifications,
    #[at("/profile/:id")]
    Profile { id: String },
    #[at("/chat/:id")]
    Chat { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::CreateAccount => html! { <CreateAccount /> },
        Route::Notifications => html! { <Notifications /> },
        Route::Profile { id } => html! { <ProfileDetail {id} /> },
        Route::Chat { id } => html! { <Chat {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_carry_the_id() {
        assert_eq!(Route::Profile { id: "u-42".into() }.to_path(), "/profile/u-42");
        assert_eq!(Route::Chat { id: "u-7".into() }.to_path(), "/chat/u-7");
        assert_eq!(
            Route::recognize("/profile/abc"),
            Some(Route::Profile { id: "abc".into() })
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let route = Route::recognize("/nope/at/all").or_else(Route::not_found_route);
        assert_eq!(route, Some(Route::NotFound));
    }
}
