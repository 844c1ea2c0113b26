use thiserror::Error;

/// Everything that can end an analysis attempt. Validation variants are
/// recovered locally and never reach the network; transport variants are
/// terminal for the attempt and recovery is a manual resubmission. A
/// malformed payload is deliberately NOT here: the normalizer absorbs it
/// into a degraded result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No video selected for analysis.")]
    NoFileSelected,
    #[error("Skipped non-video file: {0}")]
    NotAVideo(String),
    #[error("Selected file is empty: {0}")]
    EmptyFile(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Analysis timed out waiting for the backend.")]
    Timeout,
    #[error("Server error: {status} - {body}")]
    Http { status: u16, body: String },
}

impl AnalysisError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalysisError::NoFileSelected
                | AnalysisError::NotAVideo(_)
                | AnalysisError::EmptyFile(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_local() {
        assert!(AnalysisError::NoFileSelected.is_validation());
        assert!(AnalysisError::NotAVideo("a.txt".into()).is_validation());
        assert!(AnalysisError::EmptyFile("a.mp4".into()).is_validation());
        assert!(!AnalysisError::Timeout.is_validation());
        assert!(
            !AnalysisError::Http {
                status: 502,
                body: "bad gateway".into()
            }
            .is_validation()
        );
    }
}
