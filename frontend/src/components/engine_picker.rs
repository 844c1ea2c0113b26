use shared::AnalysisMode;
use yew::prelude::*;

use crate::{Model, Msg};

pub fn render_engine_picker(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="engine-picker">
            { for AnalysisMode::ALL.iter().map(|mode| {
                let mode = *mode;
                let is_selected = model.mode == mode;
                html! {
                    <button
                        class={classes!("engine-option", is_selected.then_some("selected"))}
                        title={mode.tagline()}
                        disabled={model.phase.is_submitting()}
                        onclick={link.callback(move |_| Msg::ModeSelected(mode))}
                    >
                        { mode.label() }
                    </button>
                }
            })}
        </div>
    }
}
