pub mod jurisdiction;
pub mod types;

pub use jurisdiction::Jurisdiction;
pub use types::{
    AnalysisResult, DetailValue, Details, IssueRecord, PageElement, ParsedPage, RiskLevel,
    ScanReport,
};
