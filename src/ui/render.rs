//! Text rendering of the visible projection and check reports.
//!
//! Output is plain text so it snapshots cleanly; alignment uses terminal
//! display width, not byte length.

use unicode_width::UnicodeWidthStr;

use crate::application::VisibleCollection;
use crate::config::ConfigWarning;
use crate::domain::services::RuleDiagnostic;

use super::theme::Icons;

/// Render the projection as an indented tree with a right-aligned count
/// column.
///
/// Indentation is relative to the shallowest visible collection, so a
/// focused subtree starts at the left margin. Collections whose children
/// are hidden also show their subtree total.
pub fn render_tree(collections: &[VisibleCollection], unicode: bool) -> String {
    let icons = Icons::new(unicode);
    let base_level = collections.iter().map(|c| c.level).min().unwrap_or(0);

    let rows: Vec<(String, String)> = collections
        .iter()
        .map(|c| {
            (
                tree_label(c, c.level - base_level, &icons),
                count_label(c),
            )
        })
        .collect();

    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let count_width = rows.iter().map(|(_, c)| c.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, count) in rows {
        let pad = " ".repeat(label_width - label.width());
        out.push_str(&format!("{label}{pad}  {count:>count_width$}\n"));
    }
    out
}

fn tree_label(collection: &VisibleCollection, depth: usize, icons: &Icons) -> String {
    let marker = if !collection.has_children {
        " ".repeat(icons.expand.width())
    } else if collection.opens_externally {
        icons.external.to_string()
    } else if collection.expanded {
        icons.expand.to_string()
    } else {
        icons.collapse.to_string()
    };
    format!("{}{} {}", "  ".repeat(depth), marker, collection.title)
}

fn count_label(collection: &VisibleCollection) -> String {
    let children_shown =
        collection.expanded && collection.has_children && !collection.opens_externally;
    if collection.has_children && !children_shown && collection.total_count != collection.item_count
    {
        format!("{} ({})", collection.item_count, collection.total_count)
    } else {
        collection.item_count.to_string()
    }
}

/// Render config warnings and rule diagnostics, one line each
pub fn render_check(
    warnings: &[ConfigWarning],
    diagnostics: &[RuleDiagnostic],
    unicode: bool,
) -> String {
    let icons = Icons::new(unicode);
    let mut out = String::new();

    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} unknown key '{}' in {}",
            icons.warning, warning.key, location
        ));
        if let Some(suggestion) = &warning.suggestion {
            out.push_str(&format!(" (did you mean '{suggestion}'?)"));
        }
        out.push('\n');
    }

    for diagnostic in diagnostics {
        out.push_str(&format!(
            "{} ordering rule #{}: {}\n",
            icons.warning,
            diagnostic.rule_index + 1,
            diagnostic.issue
        ));
    }

    if warnings.is_empty() && diagnostics.is_empty() {
        out.push_str(&format!(
            "{} configuration and ordering rules look good\n",
            icons.success
        ));
    }
    out
}
