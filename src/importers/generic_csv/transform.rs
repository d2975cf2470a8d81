//! Row to issue transformation

use crate::core::NormalizedIssue;

use super::mapping::{map_estimate, map_status};
use super::row::SourceRow;

/// Audit spreadsheet every generated issue links back to
pub const AUDIT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1aYP2UhAG00NHt_w_3wBy2BmjpsZciFp_h-jb-ErHAc8/edit#gid=0";

/// Priority given to every imported issue, whatever the row says
pub const DEFAULT_PRIORITY: u8 = 3;

const TITLE_SEPARATOR: &str = " -> ";

/// `|Page -> Component -> Feature -> Action/Part`, skipping empty parts
///
/// The `|` prefix is always present, so the result is never empty.
pub fn build_title(row: &SourceRow) -> String {
    let parts: Vec<&str> = [
        row.page.as_str(),
        row.component.as_str(),
        row.feature.as_str(),
        row.action_part.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();

    format!("|{}", parts.join(TITLE_SEPARATOR))
}

/// Markdown body listing the row's columns, ending with the audit link
pub fn build_description(row: &SourceRow, audit_sheet_url: &str) -> String {
    let mut description = String::new();
    description.push_str(&format!("Page: {}\n", row.page));
    description.push_str(&format!("Component: {}\n", row.component));
    description.push_str(&format!("Feature: {}\n", row.feature));
    description.push_str(&format!("Action: {}\n", row.action_part));
    description.push_str(&format!("Behavior: {}\n", row.behavior_notes));
    description.push_str(&format!("User permissions: {}\n", row.user_permissions));
    description.push_str(&format!("Supported Plans: `{}`\n", row.plans));
    description.push_str(&format!("Billing: `{}`\n", row.billing_feature));
    description.push_str(&format!("Feature: `{}`\n", row.feature_switches));
    description.push_str(&format!(
        "When done, please update the [Google Audit Sheet]({})",
        audit_sheet_url
    ));
    description
}

/// Turn one row into an issue, or `None` when the row has no title
pub fn transform_row(row: &SourceRow, audit_sheet_url: &str) -> Option<NormalizedIssue> {
    let title = build_title(row);
    // Never taken while titles carry the `|` prefix; kept so a prefix-less
    // title format still drops untitled rows.
    if title.is_empty() {
        return None;
    }

    Some(NormalizedIssue {
        description: build_description(row, audit_sheet_url),
        status: map_status(&row.status),
        priority: DEFAULT_PRIORITY,
        estimate: map_estimate(&row.size),
        assignee_id: row.eng_owner.clone(),
        title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetStatus;
    use std::sync::{Arc, Mutex};

    fn billing_row() -> SourceRow {
        SourceRow {
            page: "Billing".to_string(),
            component: "Invoices".to_string(),
            feature: "Export".to_string(),
            action_part: "Download PDF".to_string(),
            size: "M".to_string(),
            status: "Done".to_string(),
            behavior_notes: "Works offline".to_string(),
            eng_owner: "alice".to_string(),
            design_owner: String::new(),
            user_permissions: "Admin".to_string(),
            plans: "Pro".to_string(),
            billing_feature: "invoicing".to_string(),
            feature_switches: "export_v2".to_string(),
        }
    }

    #[test]
    fn test_title_joins_all_parts() {
        assert_eq!(
            build_title(&billing_row()),
            "|Billing -> Invoices -> Export -> Download PDF"
        );
    }

    #[test]
    fn test_title_drops_empty_parts() {
        let row = SourceRow {
            page: "A".to_string(),
            feature: "C".to_string(),
            action_part: "D".to_string(),
            ..Default::default()
        };
        assert_eq!(build_title(&row), "|A -> C -> D");
    }

    #[test]
    fn test_title_of_empty_row_is_just_prefix() {
        assert_eq!(build_title(&SourceRow::default()), "|");
    }

    #[test]
    fn test_empty_row_still_produces_issue() {
        let issue = transform_row(&SourceRow::default(), AUDIT_SHEET_URL).unwrap();
        assert_eq!(issue.title, "|");
        assert_eq!(issue.status, TargetStatus::Backlog);
        assert_eq!(issue.estimate, None);
        assert_eq!(issue.assignee_id, "");
        assert_eq!(issue.priority, 3);
    }

    #[test]
    fn test_description_layout() {
        let description = build_description(&billing_row(), "https://example.test/audit");
        insta::assert_snapshot!(description, @r"
        Page: Billing
        Component: Invoices
        Feature: Export
        Action: Download PDF
        Behavior: Works offline
        User permissions: Admin
        Supported Plans: `Pro`
        Billing: `invoicing`
        Feature: `export_v2`
        When done, please update the [Google Audit Sheet](https://example.test/audit)
        ");
    }

    #[test]
    fn test_description_empty_fields_render_blank() {
        let description = build_description(&SourceRow::default(), AUDIT_SHEET_URL);
        let lines: Vec<&str> = description.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Page: ");
        assert_eq!(lines[6], "Supported Plans: ``");
        assert!(!description.ends_with('\n'));
        assert!(lines[9].ends_with(&format!("({})", AUDIT_SHEET_URL)));
    }

    #[test]
    fn test_transform_billing_row() {
        let issue = transform_row(&billing_row(), AUDIT_SHEET_URL).unwrap();
        assert_eq!(issue.title, "|Billing -> Invoices -> Export -> Download PDF");
        assert_eq!(issue.estimate, Some(5));
        assert_eq!(issue.status, TargetStatus::Completed);
        assert_eq!(issue.priority, 3);
        assert_eq!(issue.assignee_id, "alice");
        assert!(issue
            .description
            .lines()
            .any(|l| l == "Supported Plans: `Pro`"));
    }

    /// Writer that keeps everything a subscriber prints
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_transform_leaves_logging_to_caller() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            transform_row(&SourceRow::default(), AUDIT_SHEET_URL);
            transform_row(&billing_row(), AUDIT_SHEET_URL);
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_priority_ignores_row_content() {
        for (size, status) in [("XS", "Not started"), ("XL", "Needs QA"), ("", "")] {
            let row = SourceRow {
                size: size.to_string(),
                status: status.to_string(),
                ..billing_row()
            };
            assert_eq!(transform_row(&row, AUDIT_SHEET_URL).unwrap().priority, 3);
        }
    }
}
