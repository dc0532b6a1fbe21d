use std::path::PathBuf;

use insight_model::BundleStatus;

/// What a finished `analyze` run reports back to `main`.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub file: PathBuf,
    pub status: BundleStatus,
    pub output: Option<PathBuf>,
}

impl AnalyzeResult {
    pub fn exit_code(&self) -> i32 {
        match self.status {
            BundleStatus::Complete | BundleStatus::EmptyDataset => 0,
            BundleStatus::NoSupportedColumns => 2,
        }
    }
}
