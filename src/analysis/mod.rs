//! End-to-end analysis: runs every component for one anchor and returns
//! a report with all intermediate outputs.

pub mod pipeline;

pub use pipeline::{
    AnalysisReport, SynergyAnalysis, CATEGORY_COMPLETION, CATEGORY_KCORE, CATEGORY_RANK1,
    CATEGORY_RANK2, FEATURE_PREFIX,
};
