use gloo_file::File as GlooFile;
use shared::{AnalysisMode, AnalysisResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

mod api;
mod components;
mod config;
mod progress;

use components::{engine_picker, handlers, header, results, terminal_loader, upload_section, utils};
use progress::{ProgressSimulator, ProgressState};

/// One request cycle walks Idle → Ready → Submitting → Resolved | Failed.
/// Failed keeps the file and mode so the same attempt can be resubmitted
/// without re-selecting anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Submitting,
    Resolved,
    Failed,
}

impl Phase {
    pub fn accepts_submission(self) -> bool {
        matches!(self, Phase::Ready | Phase::Failed)
    }

    pub fn is_submitting(self) -> bool {
        matches!(self, Phase::Submitting)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    Probing,
    Online(String),
    Offline,
}

// Yew msg components
pub enum Msg {
    // Selection
    VideoSelected(GlooFile),
    ModeSelected(AnalysisMode),
    SetDragging(bool),
    HandleDrop(DragEvent),

    // Request lifecycle
    Submit,
    AnalysisResolved(u64, AnalysisResult),
    AnalysisFailed(u64, String),
    NewInvestigation,

    // Progress simulation ticks
    BootLineTick,
    ProgressTick,

    // UI states
    BackendProbed(BackendStatus),
    SetError(Option<String>),
}

// Main component
pub struct Model {
    pub phase: Phase,
    pub mode: AnalysisMode,
    pub video: Option<GlooFile>,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub progress: ProgressState,
    pub simulator: ProgressSimulator,
    pub backend: BackendStatus,
    pub is_dragging: bool,
    pub case_id: u64,
    pub request_serial: u64,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let base = config::api_base_url();
            let status = match api::probe_backend(&base).await {
                Some(engine) => BackendStatus::Online(engine),
                None => BackendStatus::Offline,
            };
            link.send_message(Msg::BackendProbed(status));
        });

        Self {
            phase: Phase::Idle,
            mode: AnalysisMode::default(),
            video: None,
            result: None,
            error: None,
            progress: ProgressState::new(),
            simulator: ProgressSimulator::new(),
            backend: BackendStatus::Probing,
            is_dragging: false,
            case_id: 0,
            request_serial: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Selection
            Msg::VideoSelected(file) => handlers::handle_video_selected(self, file),
            Msg::ModeSelected(mode) => handlers::handle_mode_selected(self, mode),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),

            // Request lifecycle
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::AnalysisResolved(serial, result) => {
                handlers::handle_analysis_resolved(self, serial, result)
            }
            Msg::AnalysisFailed(serial, message) => {
                handlers::handle_analysis_failed(self, serial, message)
            }
            Msg::NewInvestigation => handlers::handle_new_investigation(self),

            // Progress simulation ticks
            Msg::BootLineTick => handlers::handle_boot_line_tick(self),
            Msg::ProgressTick => handlers::handle_progress_tick(self),

            // UI states
            Msg::BackendProbed(status) => {
                self.backend = status;
                true
            }
            Msg::SetError(error) => {
                self.error = error;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header(self) }

                <main class="main-content">
                {
                    match self.phase {
                        Phase::Submitting => terminal_loader::render_terminal_loader(self),
                        Phase::Resolved => results::render_results(self, ctx),
                        _ => html! {
                            <>
                                { engine_picker::render_engine_picker(self, ctx) }
                                { upload_section::render_upload_section(self, ctx) }
                            </>
                        },
                    }
                }
                { utils::render_error_message(self) }
                </main>

                <footer class="app-footer">
                    <p>{"TruthLens | Multimodal Forensics | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Leaving the page must cancel outstanding timers like any other
        // exit path.
        self.simulator.stop();
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("TruthLens console starting...");
    yew::Renderer::<Model>::new().render();
}
