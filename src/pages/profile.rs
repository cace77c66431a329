use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ProfileSummary;
use crate::components::{Avatar, BackHeader, HeartDivider, Sidebar};
use crate::hooks::{use_profile, ProfileFetch};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ProfileDetailProps {
    pub id: AttrValue,
}

fn profile_card(p: &ProfileSummary) -> Html {
    html! {
      <div class="panel profile">
        <Avatar src={p.avatar().map(|s| AttrValue::from(s.to_string()))}
          name={p.display_name().to_string()} large=true />
        <h2 class="h2">{ p.headline() }</h2>
        if let Some(gender) = &p.gender {
          <div class="pill">{ gender.clone() }</div>
        }
        if let Some(intro) = &p.introduction {
          <p class="intro">{ intro.clone() }</p>
        }
        <div class="gallery">
          { for p.images.iter().skip(1).map(|src| html!{ <img src={src.clone()} alt="" /> }) }
        </div>
        <Link<Route> to={Route::Chat { id: p.user_id.clone() }} classes="btn primary">
          { "Message" }
        </Link<Route>>
      </div>
    }
}

#[function_component(ProfileDetail)]
pub fn profile_detail(props: &ProfileDetailProps) -> Html {
    let fetch = use_profile(&props.id);

    html! {
      <div class="layout">
        <Sidebar />
        <div class="wrap">
          <BackHeader title="Profile" back_to={Route::Notifications} />
          <HeartDivider />
          {
            match &fetch {
                ProfileFetch::Loading => html!{ <div class="loading">{ "Loading…" }</div> },
                ProfileFetch::Loaded(p) => profile_card(p),
                ProfileFetch::Failed => html!{
                  <div class="err">{ "We could not load this profile. Please try again later." }</div>
                },
            }
          }
        </div>
      </div>
    }
}
