use yew::prelude::*;

use super::HeartDivider;

struct ExploreCard {
    title: &'static str,
    icon: &'static str,
    accent: &'static str,
    blurb: &'static str,
}

const CARDS: [ExploreCard; 4] = [
    ExploreCard {
        title: "Friendships",
        icon: "🤝",
        accent: "accent-yellow",
        blurb: "Meet people nearby who share your hobbies, habits and taste in movies.",
    },
    ExploreCard {
        title: "Dating",
        icon: "💘",
        accent: "accent-orange",
        blurb: "Swipe through profiles matched on the preferences you set up front.",
    },
    ExploreCard {
        title: "Marriage",
        icon: "💍",
        accent: "accent-red",
        blurb: "Looking for something long term? Say so, and we will look with you.",
    },
    ExploreCard {
        title: "Networking",
        icon: "🌐",
        accent: "accent-purple",
        blurb: "Find collaborators by what they do, where they live and what they love.",
    },
];

#[function_component(Explore)]
pub fn explore() -> Html {
    html! {
      <section class="explore">
        <h2 class="h2">{ "Explore Us" }</h2>
        <p class="sub">{ "Join Ddate To Explore The Opportunities" }</p>
        <HeartDivider />
        <div class="explore-grid">
          { for CARDS.iter().map(|card| html! {
              <div class="explore-card">
                <div class={classes!("explore-badge", card.accent)}>
                  <span class="explore-icon" aria-hidden="true">{ card.icon }</span>
                </div>
                <div>
                  <p class="explore-title">{ card.title }</p>
                  <p class="explore-blurb">{ card.blurb }</p>
                </div>
              </div>
          }) }
        </div>
      </section>
    }
}
