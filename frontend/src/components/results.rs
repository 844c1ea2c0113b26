use shared::{AnalysisMode, AnalysisResult, EnsembleReport, Verdict, classify};
use yew::prelude::*;

use crate::{Model, Msg};

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };

    let verdict = classify(result.confidence_score);
    let link = ctx.link();

    html! {
        <div class="results-container">
            <button class="back-btn" onclick={link.callback(|_| Msg::NewInvestigation)}>
                {"\u{2190} ANALYZE NEW FILE"}
            </button>

            { render_verdict_card(model, result, &verdict) }

            <div class="evidence-grid">
                { render_fact_check(result) }
                { render_forensic_traces(result) }
            </div>

            { render_media(result) }
            { result.ensemble.as_ref().map(render_breakdown).unwrap_or_default() }
        </div>
    }
}

fn render_verdict_card(model: &Model, result: &AnalysisResult, verdict: &Verdict) -> Html {
    let theme = verdict.theme;
    let style = format!(
        "color: {}; border-color: {}; background: {};",
        theme.color, theme.border, theme.background
    );

    html! {
        <div class="verdict-card" style={style}>
            <div class="verdict-headline">
                {
                    if verdict.is_fake {
                        html! { <i class="fa-solid fa-shield-halved verdict-icon"></i> }
                    } else {
                        html! { <i class="fa-solid fa-circle-check verdict-icon"></i> }
                    }
                }
                <div>
                    <h2>{ result.title() }</h2>
                    <p>{ format!("DEEPFAKE PROBABILITY: {}%", result.confidence_score) }</p>
                </div>
            </div>
            <div class="case-ref">
                <span class="case-label">{"ANALYSIS ID"}</span>
                <span class="case-value">{ format!("#TL-{:04}", model.case_id % 10_000) }</span>
            </div>
        </div>
    }
}

fn render_fact_check(result: &AnalysisResult) -> Html {
    let text = result
        .fact_check_analysis
        .clone()
        .unwrap_or_else(|| "No contextual data found in search index.".to_string());

    html! {
        <div class="panel fact-check-panel">
            <h3><i class="fa-solid fa-magnifying-glass"></i>{" SEARCH GROUNDING"}</h3>
            <p>{ text }</p>
        </div>
    }
}

fn render_forensic_traces(result: &AnalysisResult) -> Html {
    html! {
        <div class="panel traces-panel">
            <h3><i class="fa-solid fa-wave-square"></i>{" FORENSIC TRACES"}</h3>
            { render_evidence_list("Visual Anomalies", &result.visual_evidence, "No visual artifacts detected.") }
            {
                // Audio traces only exist on the cloud engine.
                if result.mode == AnalysisMode::Cloud {
                    render_evidence_list("Audio Anomalies", &result.audio_evidence, "Audio matches visual patterns.")
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_evidence_list(heading: &str, items: &[String], empty_note: &str) -> Html {
    html! {
        <div class="evidence-block">
            <h4>{ heading.to_string() }</h4>
            {
                if items.is_empty() {
                    html! { <span class="all-clear">{ empty_note.to_string() }</span> }
                } else {
                    html! {
                        <ul>
                            { for items.iter().map(|item| html! { <li>{ item }</li> }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn render_media(result: &AnalysisResult) -> Html {
    let Some(url) = &result.video_url else {
        return html! {};
    };

    html! {
        <div class="panel media-panel">
            <h3><i class="fa-solid fa-fire"></i>{" ACTIVATION HEATMAP"}</h3>
            {
                if result.is_demo_mode {
                    html! {
                        <span class="demo-badge">
                            {"DEMO WEIGHTS - heatmap model is an untrained placeholder"}
                        </span>
                    }
                } else {
                    html! {}
                }
            }
            <video src={url.clone()} controls={true}></video>
        </div>
    }
}

fn render_breakdown(report: &EnsembleReport) -> Html {
    let rows = [
        ("CLOUD ORACLE", report.cloud_score),
        ("HEATMAP", report.heatmap_score),
        ("NEURAL", report.neural_score),
    ];

    html! {
        <div class="panel breakdown-panel">
            <h3><i class="fa-solid fa-layer-group"></i>{" ENSEMBLE BREAKDOWN"}</h3>
            {
                if report.inconsistent {
                    html! {
                        <span class="inconsistency-note">
                            {"Telemetry incomplete - missing or invalid scores shown as 0."}
                        </span>
                    }
                } else {
                    html! {}
                }
            }
            <div class="result-bars">
                { for rows.iter().map(|&(label, score)| render_score_bar(label, score)) }
            </div>
            <div class="final-verdict-row">
                { render_score_bar("FINAL VERDICT", report.final_verdict) }
            </div>
        </div>
    }
}

fn render_score_bar(label: &str, score: u8) -> Html {
    html! {
        <div class="result-item">
            <div class="result-label">{ label.to_string() }</div>
            <div class="result-bar-container">
                <div class="result-bar" style={format!("width: {}%", score)}></div>
            </div>
            <div class="result-value">{ format!("{}%", score) }</div>
        </div>
    }
}
