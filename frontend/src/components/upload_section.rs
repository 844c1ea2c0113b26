use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

use super::utils::{debounce, first_file};
use crate::{Model, Msg, Phase};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx) }
            { render_selected_file(model) }
            { render_submit_button(model, ctx) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files();
        let file = files.as_ref().and_then(first_file);

        input.set_value("");

        match file {
            Some(file) => Msg::VideoSelected(file),
            None => Msg::SetError(Some("No file selected.".into())),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="video/mp4,video/quicktime"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"DROP SUSPICIOUS FOOTAGE HERE"}</p>
                    <p class="file-types">{"MP4 / MOV Supported"}</p>
                </div>
            </div>
        </>
    }
}

fn render_selected_file(model: &Model) -> Html {
    match &model.video {
        Some(file) => html! {
            <div class="file-ready">{ format!("[FILE READY]: {}", file.name()) }</div>
        },
        None => html! {},
    }
}

fn render_submit_button(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let disabled = model.phase.is_submitting() || model.video.is_none();

    html! {
        <button
            class="analyze-btn"
            disabled={disabled}
            onclick={debounce(300, {
                let link = link.clone();
                move || link.callback(|_| Msg::Submit).emit(())
            })}
        >
            {
                if model.phase == Phase::Failed {
                    html! { <><i class="fa-solid fa-rotate-right"></i>{" RETRY ANALYSIS"}</> }
                } else {
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{" INITIATE ANALYSIS"}</> }
                }
            }
        </button>
    }
}
