use anyhow::{Context, Result};
use serde_json::json;

use shelfmark::application::{CollectionView, RefreshOptions};
use shelfmark::presentation::cli::TreeArgs;
use shelfmark::presentation::{create_catalog_source, create_collection_view};
use shelfmark::ui::json::{emit, tagged};
use shelfmark::ui::render_tree;

use super::CommandContext;

pub fn cmd_tree(ctx: &CommandContext, args: &TreeArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    config.view.display_parent_collections |= args.parents;
    config.view.sort_by_key |= args.sort_by_key;

    let source = create_catalog_source(&config, args.counts.as_deref(), &ctx.project_root);
    let mut view = create_collection_view(&config);
    view.refresh(&source, RefreshOptions::default())
        .with_context(|| format!("failed to read catalog from {}", source.path().display()))?;

    // CLI focus replaces the configured one as a pair
    let (top, base) = match &args.top {
        Some(top) => (Some(top.as_str()), args.base.as_deref()),
        None => (config.view.top.as_deref(), config.view.base.as_deref()),
    };
    if top.is_some() || base.is_some() {
        view.set_focus(top, base)?;
    }

    apply_expansions(&mut view, args)?;

    if ctx.json {
        return emit_json(&view);
    }

    let snapshot = view.snapshot();
    if snapshot.is_empty() {
        println!("No collections.");
    } else {
        print!("{}", render_tree(&snapshot, ctx.unicode));
    }
    Ok(())
}

fn apply_expansions(view: &mut CollectionView, args: &TreeArgs) -> Result<()> {
    for name in &args.expand {
        view.show_children(name)?;
    }
    for spec in &args.expand_all {
        view.expand_all(&spec.name, spec.depth)?;
    }
    if !args.expand.is_empty() {
        view.recompute();
    }
    Ok(())
}

fn emit_json(view: &CollectionView) -> Result<()> {
    emit(json!({
        "event": "start",
        "command": "tree",
        "top": view.top().map(|n| n.as_str()),
        "base": view.base().map(|n| n.as_str()),
    }))?;

    let snapshot = view.snapshot();
    for collection in &snapshot {
        emit(tagged("collection", collection))?;
    }

    emit(json!({
        "event": "complete",
        "command": "tree",
        "visible": snapshot.len(),
        "total": view.forest().len(),
    }))?;
    Ok(())
}
