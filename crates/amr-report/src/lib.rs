//! Export surface for the AMR surveillance pipeline.
//!
//! Delimited tables for downstream analysis, a plain-text narrative for
//! humans, and a versioned JSON payload for machines.

mod exports;
mod narrative;
mod payload;
mod tables;

pub use exports::{
    ExportPaths, HIGH_RISK_CSV, LONG_CSV, MDR_PROFILES_CSV, NARRATIVE_TXT,
    RESISTANCE_SUMMARY_CSV, WIDE_CSV, write_all,
};
pub use narrative::{render_narrative, write_narrative};
pub use payload::{SurveillancePayload, write_report_json};
pub use tables::{write_frame_csv, write_mdr_profiles_csv, write_resistance_summary_csv};
