use std::rc::Rc;

use chrono::Local;
use gloo::console::{error, log, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::HttpBackend;
use crate::components::{FieldInput, HeartDivider};
use crate::config::AppConfig;
use crate::error::SubmitError;
use crate::routes::Route;
use crate::storage::Drafts;
use crate::wizard::{account_steps, submit_profile, Answer, Phase, Schema, Submitted, Wizard};

const REMOTE_FAILURE: &str = "We could not create your profile right now. Please try again.";

fn submit_notice(err: &SubmitError) -> String {
    match err {
        SubmitError::Remote(_) => REMOTE_FAILURE.to_string(),
        other => other.to_string(),
    }
}

/// Problems with the local cache after a profile was accepted.
fn storage_warnings(done: &Submitted) -> Vec<String> {
    let mut lines: Vec<String> = done
        .storage_failures
        .iter()
        .map(|(key, e)| format!("could not store {key:?} after submit: {e}"))
        .collect();
    if done.user_id.is_none() {
        lines.push("receipt carried no user id, matches will be looked up by principal".to_string());
    }
    lines
}

#[function_component(CreateAccount)]
pub fn create_account() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigator = use_navigator();
    let redraw = use_force_update();
    let notice = use_state(|| None::<String>);
    let schema = use_memo((), |_| Schema::account(Local::now().date_naive()));

    // Drafts from earlier visits are restored once, on mount.
    let wizard = use_mut_ref(|| Wizard::new(account_steps()).with_answers(Drafts::browser().restore()));

    let on_text = {
        let wizard = wizard.clone();
        let redraw = redraw.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            wizard.borrow_mut().set_answer(field, Answer::Text(value));
            redraw.force_update();
        })
    };

    let on_toggle = {
        let wizard = wizard.clone();
        let redraw = redraw.clone();
        Callback::from(move |(field, option): (&'static str, &'static str)| {
            wizard.borrow_mut().toggle_choice(field, option);
            redraw.force_update();
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        let schema = schema.clone();
        let notice = notice.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let mut w = wizard.borrow_mut();
            let from = w.index();
            match w.advance(&schema) {
                Ok(_) => {
                    if let Err(e) = Drafts::browser().save_step(from, &w.step_answers(from)) {
                        error!(format!("could not cache step {}: {e}", from + 1));
                    }
                    notice.set(None);
                }
                Err(errors) => {
                    let fields: Vec<_> = errors.fields().collect();
                    log!(format!("step {} invalid: {}", from + 1, fields.join(", ")));
                    notice.set(Some("Please fix the highlighted fields.".to_string()));
                }
            }
            drop(w);
            redraw.force_update();
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        let notice = notice.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            wizard.borrow_mut().retreat();
            notice.set(None);
            redraw.force_update();
        })
    };

    let on_submit = {
        let wizard = wizard.clone();
        let schema = schema.clone();
        let notice = notice.clone();
        let redraw = redraw.clone();
        let backend_url = config.backend_url.clone();
        Callback::from(move |_: MouseEvent| {
            {
                let w = wizard.borrow();
                let last = w.index();
                if let Err(e) = Drafts::browser().save_step(last, &w.step_answers(last)) {
                    error!(format!("could not cache step {}: {e}", last + 1));
                }
            }
            notice.set(None);

            let wizard = wizard.clone();
            let schema: Rc<Schema> = schema.clone();
            let notice = notice.clone();
            let redraw_done = redraw.clone();
            let navigator = navigator.clone();
            let backend = HttpBackend::new(&backend_url);
            spawn_local(async move {
                let drafts = Drafts::browser();
                let outcome = submit_profile(&wizard, &schema, &backend, &drafts).await;
                redraw_done.force_update();
                match outcome {
                    Ok(done) => {
                        log!(format!("profile submitted: {}", done.receipt));
                        for line in storage_warnings(&done) {
                            error!(line);
                        }
                        match &navigator {
                            Some(nav) => nav.push(&Route::Notifications),
                            None => warn!("no router available, staying on the wizard"),
                        }
                    }
                    Err(SubmitError::InFlight) => log!("ignoring repeated submit"),
                    Err(e) => {
                        error!(format!("profile submission failed: {e}"));
                        notice.set(Some(submit_notice(&e)));
                    }
                }
            });
            redraw.force_update();
        })
    };

    let w = wizard.borrow();
    let step = w.current_step();
    let busy = w.phase() == Phase::Submitting;
    let done = w.phase() == Phase::Submitted;
    let locked = busy || done;

    html! {
      <div class="wrap wizard">
        <h1 class="h1">{ "Create your account" }</h1>
        <p class="sub">{ format!("Step {} of {}: {}", w.index() + 1, w.step_count(), step.title) }</p>
        <div class="progress">
          { for (0..w.step_count()).map(|i| {
              html!{ <span class={classes!("dot", (i <= w.index()).then_some("on"))} /> }
          }) }
        </div>
        <HeartDivider />

        <form class="panel" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
          { for step.fields.iter().map(|spec| html! {
              <FieldInput
                key={spec.name}
                spec={*spec}
                value={w.answers().get(spec.name).cloned()}
                error={w.errors().get(spec.name).map(|m| AttrValue::from(m.to_string()))}
                disabled={locked}
                on_text={on_text.clone()}
                on_toggle={on_toggle.clone()}
              />
          }) }

          {
            if let Some(msg) = &*notice {
                html!{ <div class="err">{ msg.clone() }</div> }
            } else {
                html!{}
            }
          }

          <div class="btns">
            if w.index() > 0 {
              <button type="button" onclick={on_back} disabled={locked}>{ "Back" }</button>
            }
            if w.is_last_step() {
              <button type="button" class="primary" onclick={on_submit} disabled={locked}>
                { if busy { "Submitting…" } else { "Create account" } }
              </button>
            } else {
              <button type="button" class="primary" onclick={on_next}>{ "Next" }</button>
            }
          </div>
        </form>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, DraftError};

    #[test]
    fn remote_failures_get_a_generic_notice() {
        let notice = submit_notice(&SubmitError::Remote(ApiError::Status(500)));
        assert_eq!(notice, REMOTE_FAILURE);
    }

    #[test]
    fn clean_submit_has_no_storage_warnings() {
        let done = Submitted {
            receipt: "User profile created with id: 9f86d081".into(),
            user_id: Some("9f86d081".into()),
            storage_failures: Vec::new(),
        };
        assert!(storage_warnings(&done).is_empty());
    }

    #[test]
    fn lost_user_id_write_is_reported() {
        let done = Submitted {
            receipt: "User profile created with id: 9f86d081".into(),
            user_id: Some("9f86d081".into()),
            storage_failures: vec![("user_id", DraftError::Storage("QuotaExceededError".into()))],
        };
        let lines = storage_warnings(&done);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"user_id\""));
        assert!(lines[0].contains("QuotaExceededError"));
    }

    #[test]
    fn receipt_without_id_is_reported() {
        let done = Submitted {
            receipt: "ok".into(),
            user_id: None,
            storage_failures: Vec::new(),
        };
        assert_eq!(storage_warnings(&done).len(), 1);
    }

    #[test]
    fn local_failures_explain_themselves() {
        assert_eq!(
            submit_notice(&SubmitError::MissingPrincipal),
            "you need to sign in before creating a profile"
        );
    }
}
