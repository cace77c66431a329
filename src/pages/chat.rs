use yew::prelude::*;

use crate::components::{Avatar, BackHeader, Sidebar};
use crate::hooks::{use_profile, ProfileFetch};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ChatProps {
    pub id: AttrValue,
}

/// Conversation with one match. History is not served by the backend yet,
/// so every conversation starts empty.
#[function_component(Chat)]
pub fn chat(props: &ChatProps) -> Html {
    let fetch = use_profile(&props.id);

    let header = match &fetch {
        ProfileFetch::Loaded(p) => html! {
          <div class="chat-header">
            <Avatar src={p.avatar().map(|s| AttrValue::from(s.to_string()))}
              name={p.display_name().to_string()} />
            <div class="name">{ p.headline() }</div>
          </div>
        },
        ProfileFetch::Loading => html! { <div class="chat-header muted">{ "Loading…" }</div> },
        ProfileFetch::Failed => html! { <div class="chat-header err">{ "Unknown match" }</div> },
    };

    html! {
      <div class="layout">
        <Sidebar />
        <div class="wrap chat">
          <BackHeader title="Messages" back_to={Route::Notifications} />
          { header }
          <div class="conversation">
            <p class="muted center">{ "No messages yet. Say hi!" }</p>
          </div>
          <div class="composer">
            <input type="text" placeholder="Messaging is coming soon" disabled=true />
            <button type="button" disabled=true>{ "Send" }</button>
          </div>
        </div>
      </div>
    }
}
