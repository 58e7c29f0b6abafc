//! Output formatting for approval-inspect

use approval_engine::ProjectionSummary;
use approval_types::{ApproverView, DerivedNodeView};

/// Plain-text rendering, one block per node
pub fn text(views: &[DerivedNodeView], summary: &ProjectionSummary) -> String {
    if views.is_empty() {
        return "No workflow configured".to_string();
    }

    let mut lines = Vec::new();
    for view in views {
        let marker = if summary.current_node_id.as_ref() == Some(&view.node.id) {
            '>'
        } else {
            ' '
        };
        let name = if view.node.name.is_empty() {
            view.node.id.as_str()
        } else {
            view.node.name.as_str()
        };
        let hidden = if view.visible { "" } else { " (hidden)" };

        lines.push(format!(
            "{} [{}] {} ({}){}",
            marker, view.status, name, view.node.id, hidden
        ));
        lines.extend(view.approvers.iter().map(approver_line));
    }

    lines.push(format!(
        "{} node(s): {} completed, {} in progress, {} rejected, {} not started; outcome: {}",
        summary.total,
        summary.completed,
        summary.in_progress,
        summary.rejected,
        summary.not_started,
        summary.outcome,
    ));

    lines.join("\n")
}

fn approver_line(approver: &ApproverView) -> String {
    let mut line = format!("    - {} [{}]", approver.name, approver.status);
    if let Some(at) = approver.completed_at {
        line.push_str(&format!(" at {}", at.to_rfc3339()));
    }
    if let Some(comment) = &approver.comment {
        line.push_str(&format!(": {}", comment));
    }
    line
}

/// JSON rendering of views and summary
pub fn json(views: &[DerivedNodeView], summary: &ProjectionSummary) -> anyhow::Result<String> {
    let document = serde_json::json!({
        "views": views,
        "summary": summary,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
