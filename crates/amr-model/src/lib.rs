pub mod error;
pub mod filter;
pub mod flags;
pub mod report;
pub mod schema;
pub mod susceptibility;

pub use error::{AmrError, ColumnViolation, Result};
pub use filter::FilterSelection;
pub use report::{
    CoResistanceMatrix, EsblStratifiedRow, MarRisk, MdrDriverRow, MdrProfile, NarrativeSummary,
    Prevalence, ResistanceBreakdownRow, SurveillanceReport, TopResistant,
};
pub use schema::{MAR_HIGH_RISK_THRESHOLD, REQUIRED_COLUMNS, TableSchema, columns};
pub use susceptibility::Susceptibility;
