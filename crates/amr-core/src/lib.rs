pub mod aggregate;
pub mod encode;
pub mod filter;
pub mod frame_utils;
pub mod normalize;
pub mod pipeline;
pub mod reshape;
pub mod validate;

pub use aggregate::build_report;
pub use encode::{build_encoded_frame, build_wide_frame};
pub use frame_utils::{f64_values, mask_rows, string_values};
pub use normalize::{normalize_header, normalize_headers};
pub use pipeline::{PipelineResult, process};
pub use reshape::build_long_frame;
pub use validate::validate;
