//! Batch harnesses built on the engines: verification, timing and reports

pub mod bench;
pub mod report;
pub mod verify;

pub use bench::{
    bench_case, bench_dataset, run_plan, summarize, BenchPlan, BenchReport, BenchRow, BenchSummary,
};
pub use report::{write_csv, write_json, write_report, ReportFormat};
pub use verify::{
    verify_case, verify_dataset, CaseVerdict, EngineRun, VerifyOptions, VerifyReport, VerifyRow,
    VerifyStatus, VerifySummary,
};
