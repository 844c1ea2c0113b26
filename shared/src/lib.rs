pub mod ensemble;
pub mod error;
pub mod mode;
pub mod normalize;
pub mod result;
pub mod verdict;

pub use ensemble::EnsembleReport;
pub use error::AnalysisError;
pub use mode::AnalysisMode;
pub use normalize::normalize;
pub use result::{AnalysisResult, coerce_score, freshen_media_url};
pub use verdict::{Verdict, VerdictTheme, classify, default_title};
