use yew::prelude::*;

use crate::{BackendStatus, Model};

pub fn render_header(model: &Model) -> Html {
    let (badge_class, badge_text) = match &model.backend {
        BackendStatus::Probing => ("status-badge probing", "LINK: PROBING...".to_string()),
        BackendStatus::Online(engine) => (
            "status-badge online",
            format!("LINK: SECURE ({})", engine),
        ),
        BackendStatus::Offline => ("status-badge offline", "LINK: DOWN".to_string()),
    };

    html! {
        <header class="app-header">
            <h1>{"TRUTH"}<span class="accent">{"LENS"}</span></h1>
            <p class="subtitle">
                <i class="fa-solid fa-brain"></i>
                {" MULTIMODAL FORENSICS ENGINE"}
            </p>
            <span class={badge_class}>{ badge_text }</span>
        </header>
    }
}
