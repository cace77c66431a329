use gloo::console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{HttpBackend, ProfileBackend, ProfileSummary};
use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFetch {
    Loading,
    Loaded(ProfileSummary),
    Failed,
}

/// Fetches a profile whenever `id` changes.
#[hook]
pub fn use_profile(id: &str) -> ProfileFetch {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = use_state(|| ProfileFetch::Loading);

    {
        let state = state.clone();
        use_effect_with(id.to_string(), move |id| {
            state.set(ProfileFetch::Loading);
            let backend = HttpBackend::new(&config.backend_url);
            let id = id.clone();
            spawn_local(async move {
                match backend.get_profile(&id).await {
                    Ok(profile) => state.set(ProfileFetch::Loaded(profile)),
                    Err(e) => {
                        error!(format!("could not load profile {id}: {e}"));
                        state.set(ProfileFetch::Failed);
                    }
                }
            });
            || ()
        });
    }

    (*state).clone()
}
