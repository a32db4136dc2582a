//! # 生成结果模型
//!
//! 每个输出条目对应一个 `OutputOutcome`，整次运行汇总为 `GenerationReport`，
//! 由生成器返回给 CLI 层输出汇总信息。

use super::policy::{ScaleKind, SkipReason};

/// 单个输出条目的处理结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputStatus {
    /// 已按目标尺寸生成。
    Generated(ScaleKind),
    /// 因跳过策略未生成。
    Skipped(SkipReason),
    /// 图标包不可打包，已生成 PNG 替代文件。
    Substituted { file_name: String },
    /// 非致命失败（仅图标包步骤）。
    Failed(String),
}

/// 单个输出条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOutcome {
    pub file_name: String,
    pub size: u32,
    pub status: OutputStatus,
}

impl OutputOutcome {
    /// 是否产出了文件（替代文件也算）。
    pub fn produced_file(&self) -> bool {
        matches!(
            self.status,
            OutputStatus::Generated(_) | OutputStatus::Substituted { .. }
        )
    }
}

/// 一次生成的汇总。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub source_width: u32,
    pub source_height: u32,
    pub skip_options_active: bool,
    pub outcomes: Vec<OutputOutcome>,
}

impl GenerationReport {
    pub fn generated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.produced_file()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutputStatus::Skipped(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutputStatus::Failed(_)))
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn outcome(&self, file_name: &str) -> Option<&OutputOutcome> {
        self.outcomes.iter().find(|o| o.file_name == file_name)
    }
}
