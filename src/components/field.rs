use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::wizard::{Answer, FieldKind, FieldSpec};

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub spec: FieldSpec,
    pub value: Option<Answer>,
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    /// Free text and single choices.
    pub on_text: Callback<(&'static str, String)>,
    /// Multi-choice chips.
    pub on_toggle: Callback<(&'static str, &'static str)>,
}

/// Renders one wizard field from its declaration, with its error underneath.
#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let name = props.spec.name;
    let current = props.value.as_ref().map(Answer::display).unwrap_or_default();

    let on_input = {
        let on_text = props.on_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_text.emit((name, input.value()));
        })
    };

    let control = match props.spec.kind {
        FieldKind::LongText => {
            let on_text = props.on_text.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                on_text.emit((name, area.value()));
            });
            html! {
              <textarea id={name} rows="4" value={current} {oninput} disabled={props.disabled} />
            }
        }
        FieldKind::Single(options) => html! {
          <div class="chips">
            { for options.iter().map(|&opt| {
                let picked = props.value.as_ref().and_then(Answer::as_text) == Some(opt);
                let on_text = props.on_text.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_text.emit((name, opt.to_string())));
                html! {
                  <button type="button" class={classes!("chip", picked.then_some("picked"))}
                    {onclick} disabled={props.disabled}>{ opt }</button>
                }
            }) }
          </div>
        },
        FieldKind::Multi(options) => html! {
          <div class="chips">
            { for options.iter().map(|&opt| {
                let picked = props
                    .value
                    .as_ref()
                    .and_then(Answer::as_list)
                    .is_some_and(|items| items.iter().any(|i| i == opt));
                let on_toggle = props.on_toggle.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_toggle.emit((name, opt)));
                html! {
                  <button type="button" class={classes!("chip", picked.then_some("picked"))}
                    {onclick} disabled={props.disabled}>{ opt }</button>
                }
            }) }
          </div>
        },
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Phone => "tel",
                FieldKind::Date => "date",
                FieldKind::Number => "number",
                _ => "text",
            };
            html! {
              <input id={name} type={input_type} value={current}
                oninput={on_input} disabled={props.disabled} />
            }
        }
    };

    html! {
      <div class={classes!("field", props.error.is_some().then_some("invalid"))}>
        <label for={name}>{ props.spec.label }</label>
        { control }
        {
          if let Some(err) = &props.error {
              html!{ <div class="err">{ err.clone() }</div> }
          } else {
              html!{}
          }
        }
      </div>
    }
}
