use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

const HEART_PATH: &str = "M10 18.35L8.55 17.03C3.4 12.36 0 9.27 0 5.5C0 2.41 2.42 0 5.5 0C7.24 0 8.91 0.81 10 2.08C11.09 0.81 12.76 0 14.5 0C17.58 0 20 2.41 20 5.5C20 9.27 16.6 12.36 11.45 17.03L10 18.35Z";

#[function_component(HeartDivider)]
pub fn heart_divider() -> Html {
    html! {
      <div class="divider">
        <hr />
        <svg class="heart" width="19" height="18" viewBox="0 0 20 19" fill="none">
          <path d={HEART_PATH} fill="currentColor" />
        </svg>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackHeaderProps {
    pub title: AttrValue,
    #[prop_or(Route::Home)]
    pub back_to: Route,
}

/// Page title with a back arrow.
#[function_component(BackHeader)]
pub fn back_header(props: &BackHeaderProps) -> Html {
    html! {
      <div class="back-header">
        <Link<Route> to={props.back_to.clone()} classes="back">{ "←" }</Link<Route>>
        <h1 class="h1">{ props.title.clone() }</h1>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub src: Option<AttrValue>,
    pub name: AttrValue,
    #[prop_or_default]
    pub large: bool,
}

/// Profile picture, or the first letter of the name when there is none.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let cls = classes!("avatar", props.large.then_some("large"));
    match &props.src {
        Some(src) => html! { <img class={cls} src={src.clone()} alt={props.name.clone()} /> },
        None => {
            let initial = props.name.chars().next().unwrap_or('?').to_uppercase().to_string();
            html! { <div class={cls}>{ initial }</div> }
        }
    }
}
