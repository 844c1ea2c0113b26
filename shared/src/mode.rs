use serde::{Deserialize, Serialize};

/// Detection engine selected before submission. Immutable for the duration
/// of one request; decides the endpoint and which evidence panels matter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Cloud,
    Local,
    GradCam,
    Ensemble,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 4] = [
        AnalysisMode::Cloud,
        AnalysisMode::Local,
        AnalysisMode::GradCam,
        AnalysisMode::Ensemble,
    ];

    /// Value placed in the multipart `mode` field. The ensemble engine is
    /// addressed as `master` on the wire.
    pub fn request_field(self) -> &'static str {
        match self {
            AnalysisMode::Cloud => "cloud",
            AnalysisMode::Local => "local",
            AnalysisMode::GradCam => "gradcam",
            AnalysisMode::Ensemble => "master",
        }
    }

    /// Ensemble routes to its own aggregation endpoint; every other engine
    /// shares `/analyze` and branches server-side on the `mode` field.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            AnalysisMode::Ensemble => "/analyze_ensemble",
            _ => "/analyze",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::Cloud => "CLOUD ORACLE",
            AnalysisMode::Local => "LOCAL NEURAL",
            AnalysisMode::GradCam => "GRAD-CAM",
            AnalysisMode::Ensemble => "MASTER ENSEMBLE",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            AnalysisMode::Cloud => "Multimodal forensics with search grounding",
            AnalysisMode::Local => "On-device face sequence classifier",
            AnalysisMode::GradCam => "Heatmap overlay of suspect regions",
            AnalysisMode::Ensemble => "Every engine, one combined verdict",
        }
    }
}
