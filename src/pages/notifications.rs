use gloo::console::{error, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{HttpBackend, ProfileSummary};
use crate::components::{Avatar, BackHeader, HeartDivider, Sidebar};
use crate::config::AppConfig;
use crate::feed::{load_feed, FeedAction, FeedState};
use crate::principal::Principal;
use crate::routes::Route;
use crate::storage::Drafts;

fn stored_principal() -> Option<Principal> {
    let Some(text) = Drafts::browser().principal() else {
        warn!("no principal in local storage, nothing to load");
        return None;
    };
    match text.parse() {
        Ok(p) => Some(p),
        Err(e) => {
            error!(format!("stored principal {text:?} is invalid: {e}"));
            None
        }
    }
}

#[function_component(Notifications)]
pub fn notifications() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigator = use_navigator();
    let feed = use_reducer(FeedState::default);

    // On mount: one fetch sequence for notifications, senders and matches.
    {
        let feed = feed.clone();
        use_effect_with((), move |_| {
            let principal = stored_principal();
            let owner = Drafts::browser().user_id();
            let backend = HttpBackend::new(&config.backend_url);
            let page_size = config.matches_page_size;
            spawn_local(async move {
                load_feed(&backend, principal, owner, page_size, |action: FeedAction| {
                    if let Some(e) = action.failure() {
                        error!(format!("feed request failed: {e}"));
                    }
                    feed.dispatch(action);
                })
                .await;
            });
            || ()
        });
    }

    let go = {
        let navigator = navigator.clone();
        Callback::from(move |route: Route| {
            if let Some(nav) = &navigator {
                nav.push(&route);
            }
        })
    };

    let profile_row = |p: &ProfileSummary, route: Route, detail: Html| {
        let go = go.clone();
        let onclick = Callback::from(move |_: MouseEvent| go.emit(route.clone()));
        html! {
          <li class="row" {onclick}>
            <Avatar src={p.avatar().map(|s| AttrValue::from(s.to_string()))} name={p.display_name().to_string()} />
            { detail }
          </li>
        }
    };

    html! {
      <div class="layout">
        <Sidebar />
        <div class="wrap">
          <BackHeader title="Notifications" />
          <HeartDivider />

          if feed.is_loading() {
            <div class="loading">{ "Loading…" }</div>
          }
          if feed.signed_out {
            <div class="err">{ "Sign in to see who liked you." }</div>
          }

          <section class="panel">
            <h2 class="h2">{ "Notifications" }</h2>
            if feed.notifications.is_empty() && !feed.is_loading() {
              <p class="muted">{ "Nothing new yet." }</p>
            }
            <ul class="list">
              { for feed.notifications.iter().map(|n| {
                  let route = Route::Profile { id: n.sender.user_id.clone() };
                  profile_row(&n.sender, route, html!{ <span>{ n.text() }</span> })
              }) }
            </ul>
          </section>

          <section class="panel">
            <h2 class="h2">{ format!("Matches ({})", feed.total_matches) }</h2>
            if feed.matches.is_empty() && !feed.is_loading() {
              <p class="muted">{ "No matches yet. Keep swiping." }</p>
            }
            <ul class="strip">
              { for feed.matches.iter().map(|m| {
                  let route = Route::Profile { id: m.user_id.clone() };
                  profile_row(m, route, html!{ <span>{ m.display_name().to_string() }</span> })
              }) }
            </ul>
          </section>

          <section class="panel">
            <h2 class="h2">{ "Messages" }</h2>
            <ul class="list">
              { for feed.matches.iter().map(|m| {
                  let route = Route::Chat { id: m.user_id.clone() };
                  profile_row(m, route, html!{
                    <div>
                      <div class="name">{ m.display_name().to_string() }</div>
                      <div class="muted">{ "Start the conversation" }</div>
                    </div>
                  })
              }) }
            </ul>
          </section>
        </div>
      </div>
    }
}
