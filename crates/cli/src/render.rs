//! Output formatting for `qhier show` and `qhier check`

use colored::Colorize;
use qhier_core::application::queue_parser::DeprecationWarning;
use qhier_core::domain::{Queue, QueueOperation};
use qhier_core::{DeprecatedQueueConfigParser, ParseOutcome, QueueConfigurationParser};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Machine-readable view of one parse
#[derive(Serialize)]
pub struct HierarchyReport<'a> {
    pub outcome: ParseOutcome,
    pub acls_enabled: bool,
    pub warnings: &'a [DeprecationWarning],
    pub skipped_queues: &'a [String],
    pub root: Option<&'a Queue>,
}

impl<'a> HierarchyReport<'a> {
    pub fn new(parser: &'a DeprecatedQueueConfigParser) -> Self {
        Self {
            outcome: parser.outcome(),
            acls_enabled: parser.acls_enabled(),
            warnings: parser.warnings(),
            skipped_queues: parser.skipped_queues(),
            root: parser.root(),
        }
    }
}

#[derive(Tabled)]
struct QueueRow {
    queue: String,
    state: String,
    #[tabled(rename = "acl-submit-job")]
    submit_job: String,
    #[tabled(rename = "acl-administer-jobs")]
    administer_jobs: String,
}

impl From<&Queue> for QueueRow {
    fn from(queue: &Queue) -> Self {
        Self {
            queue: queue.name().to_string(),
            state: queue.state().to_string(),
            submit_job: queue.acl(QueueOperation::SubmitJob).to_string(),
            administer_jobs: queue.acl(QueueOperation::AdministerJobs).to_string(),
        }
    }
}

pub fn render_json(parser: &DeprecatedQueueConfigParser) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&HierarchyReport::new(parser))
}

pub fn render_table(root: &Queue) -> String {
    let rows: Vec<QueueRow> = root.children().iter().map(QueueRow::from).collect();
    Table::new(rows).to_string()
}

/// Indented tree, one queue per line
pub fn render_tree(root: &Queue, acls_enabled: bool) -> String {
    let acl_note = if acls_enabled {
        "ACLs enforced".green()
    } else {
        "ACLs not enforced".yellow()
    };
    let mut out = format!("{} ({})\n", "<root>".bold(), acl_note);

    let count = root.children().len();
    for (i, queue) in root.children().iter().enumerate() {
        let branch = if i + 1 == count { "└──" } else { "├──" };
        let state = if queue.state().accepts_jobs() {
            queue.state().to_string().green()
        } else {
            queue.state().to_string().red()
        };
        out.push_str(&format!("{} {} [{}]\n", branch, queue.name().bold(), state));
    }
    out
}

pub fn render_warnings(warnings: &[DeprecationWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("{} {}\n", "⚠".yellow().bold(), w))
        .collect()
}
