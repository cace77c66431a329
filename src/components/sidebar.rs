use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

const LINKS: [(&str, Route); 3] = [
    ("Home", Route::Home),
    ("Notifications", Route::Notifications),
    ("Edit profile", Route::CreateAccount),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
      <nav class="sidebar">
        <div class="logo">{ "DDate" }</div>
        <ul>
          { for LINKS.iter().map(|(label, route)| {
              let active = current.as_ref() == Some(route);
              html! {
                <li class={classes!(active.then_some("active"))}>
                  <Link<Route> to={route.clone()}>{ *label }</Link<Route>>
                </li>
              }
          }) }
        </ul>
      </nav>
    }
}
