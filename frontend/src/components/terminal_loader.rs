use yew::prelude::*;

use crate::Model;

pub fn render_terminal_loader(model: &Model) -> Html {
    let progress = &model.progress;

    html! {
        <div class="terminal-loader">
            <div class="terminal-header">
                <span>{"TRUTH_LENS // SYSTEM_LOG"}</span>
                <span class="terminal-lights">{"\u{25cf} \u{25cf} \u{25cf}"}</span>
            </div>
            <div class="terminal-body">
                { for progress.visible_log().iter().map(|line| html! {
                    <p class="terminal-line">
                        <span class="terminal-prompt">{"root@truth_lens:~# "}</span>
                        { *line }
                    </p>
                })}
                <p class="terminal-cursor">{"_"}</p>
            </div>
            <div class="terminal-status">
                <span>{ progress.status_message() }</span>
                <span>{ format!("{:.0}%", progress.percent()) }</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}%", progress.percent())}></div>
            </div>
        </div>
    }
}
