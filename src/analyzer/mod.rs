//! Analysis engine for deriving a version from commits and tags

pub mod observer;
pub mod version_analyzer;
pub mod window;

pub use observer::{AnalysisEvent, AnalysisObserver, Category, NoopObserver, TracingObserver};
pub use version_analyzer::{VersionAnalysis, VersionAnalyzer};
pub use window::commits_from;
