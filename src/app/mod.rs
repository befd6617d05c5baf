pub mod ports;
pub mod report_use_case;

pub use report_use_case::ReportUseCase;
