use gloo_console::error;
use gloo_file::File as GlooFile;
use js_sys::Date;
use shared::{AnalysisError, AnalysisMode, AnalysisResult, freshen_media_url, normalize};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

use super::utils;
use crate::{Model, Msg, Phase, api, config};

pub fn handle_video_selected(model: &mut Model, file: GlooFile) -> bool {
    if model.phase.is_submitting() {
        return false;
    }

    if !file.raw_mime_type().starts_with("video/") {
        log::warn!("Skipping non-video file: {}", file.name());
        model.error = Some(AnalysisError::NotAVideo(file.name()).to_string());
        return true;
    }
    if file.size() == 0 {
        model.error = Some(AnalysisError::EmptyFile(file.name()).to_string());
        return true;
    }

    // A new file supersedes any prior investigation.
    model.video = Some(file);
    model.result = None;
    model.error = None;
    model.progress.reset();
    model.phase = Phase::Ready;
    true
}

pub fn handle_mode_selected(model: &mut Model, mode: AnalysisMode) -> bool {
    if model.phase.is_submitting() || model.mode == mode {
        return false;
    }
    model.mode = mode;
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    // Guarded: submitting with no file is a no-op, never a transition.
    if !model.phase.accepts_submission() {
        return false;
    }
    let Some(file) = model.video.clone() else {
        return false;
    };

    model.phase = Phase::Submitting;
    model.error = None;
    model.result = None;
    model.progress.reset();
    model.request_serial += 1;
    model.case_id = utils::generate_id();
    model.simulator.start(ctx.link());

    let serial = model.request_serial;
    let mode = model.mode;
    let link = ctx.link().clone();

    spawn_local(async move {
        let base = config::api_base_url();
        match api::request_analysis(&base, mode, &file).await {
            Ok(body) => {
                let result = normalize(&body, mode);
                link.send_message(Msg::AnalysisResolved(serial, result));
            }
            Err(err) => {
                error!(format!("Analysis request failed: {}", err));
                link.send_message(Msg::AnalysisFailed(serial, err.to_string()));
            }
        }
    });

    true
}

pub fn handle_analysis_resolved(model: &mut Model, serial: u64, mut result: AnalysisResult) -> bool {
    // A reply from a superseded request changes nothing.
    if serial != model.request_serial || !model.phase.is_submitting() {
        return false;
    }

    model.simulator.stop();

    if let Some(url) = result.video_url.take() {
        result.video_url = Some(freshen_media_url(&url, Date::now() as u64));
    }

    if result.verdict_title.as_deref() == Some("ANALYSIS ERROR") {
        log::warn!("Backend reply was not parseable JSON; publishing degraded report");
    } else {
        log::info!("Analysis resolved with score {}", result.confidence_score);
    }

    model.result = Some(result);
    model.phase = Phase::Resolved;
    true
}

pub fn handle_analysis_failed(model: &mut Model, serial: u64, message: String) -> bool {
    if serial != model.request_serial || !model.phase.is_submitting() {
        return false;
    }

    model.simulator.stop();
    model.error = Some(message);
    model.phase = Phase::Failed;
    true
}

pub fn handle_new_investigation(model: &mut Model) -> bool {
    model.result = None;
    model.error = None;
    model.progress.reset();
    model.phase = if model.video.is_some() {
        Phase::Ready
    } else {
        Phase::Idle
    };
    true
}

pub fn handle_boot_line_tick(model: &mut Model) -> bool {
    if !model.phase.is_submitting() {
        return false;
    }
    model.progress.advance_message();
    true
}

pub fn handle_progress_tick(model: &mut Model) -> bool {
    if !model.phase.is_submitting() {
        return false;
    }
    model.progress.advance_percent();
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            if let Some(file) = utils::first_file(&file_list) {
                ctx.link().send_message(Msg::VideoSelected(file));
            }
        }
    }

    true
}
