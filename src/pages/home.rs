use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Explore;
use crate::routes::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
      <div class="wrap">
        <header class="hero">
          <h1 class="h1">{ "Find your person on DDate" }</h1>
          <p class="sub">
            { "A dating app where your profile lives with you, not with us. " }
            { "Tell us who you are and who you are looking for." }
          </p>
          <div class="btns">
            <Link<Route> to={Route::CreateAccount} classes="btn primary">{ "Create account" }</Link<Route>>
            <Link<Route> to={Route::Notifications} classes="btn">{ "Notifications" }</Link<Route>>
          </div>
        </header>
        <Explore />
      </div>
    }
}
