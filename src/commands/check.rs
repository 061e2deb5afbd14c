use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use shelfmark::application::RefreshOptions;
use shelfmark::domain::services::check_rules;
use shelfmark::presentation::{create_catalog_source, create_collection_view};
use shelfmark::ui::json::{emit, tagged};
use shelfmark::ui::render_check;

use super::CommandContext;

pub fn cmd_check(ctx: &CommandContext, counts: Option<&Path>, strict: bool) -> Result<()> {
    let source = create_catalog_source(&ctx.config, counts, &ctx.project_root);
    let mut view = create_collection_view(&ctx.config);
    view.refresh(&source, RefreshOptions::default())
        .with_context(|| format!("failed to read catalog from {}", source.path().display()))?;

    let diagnostics = check_rules(view.forest(), &view.settings().rules);

    if ctx.json {
        emit(json!({
            "event": "start",
            "command": "check",
            "strict": strict,
        }))?;
        for warning in &ctx.warnings {
            emit(json!({
                "event": "warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }))?;
        }
        for diagnostic in &diagnostics {
            emit(tagged("rule", diagnostic))?;
        }
        emit(json!({
            "event": "complete",
            "command": "check",
            "warnings": ctx.warnings.len(),
            "rule_issues": diagnostics.len(),
        }))?;
    } else {
        print!("{}", render_check(&ctx.warnings, &diagnostics, ctx.unicode));
    }

    let issues = ctx.warnings.len() + diagnostics.len();
    if strict && issues > 0 {
        anyhow::bail!("check found {issues} issue(s)");
    }
    Ok(())
}
