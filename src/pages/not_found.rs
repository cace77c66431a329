use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
      <div class="wrap center">
        <h1 class="h1">{ "404" }</h1>
        <p class="sub">{ "Nothing lives at this address." }</p>
        <Link<Route> to={Route::Home} classes="btn">{ "Back home" }</Link<Route>>
      </div>
    }
}
