//! Collection view use case
//!
//! A `CollectionView` is the per-session state around one forest: the
//! visible projection, the focused top/base collections and the
//! expand/collapse operations. The forest is rebuilt wholesale on refresh;
//! mutations only touch expand flags and re-derive the projection.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::entities::{CollectionForest, CollectionNode, NodeId};
use crate::domain::ports::{CatalogCounts, CatalogSource, DescriptiveInfoLookup};
use crate::domain::services::{
    apply_node_settings, build_forest, enrich_visible, order_siblings_by_sort_key,
    VisibilityProjector,
};
use crate::domain::value_objects::{CollectionName, OrderingRuleSet, DEFAULT_DELIMITER};
use crate::error::{ShelfmarkError, ShelfmarkResult};

/// Settings that shape a view, usually derived from configuration
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub delimiter: char,
    pub display_parent_collections: bool,
    /// Order siblings by sort key before applying rules
    pub sort_by_key: bool,
    pub rules: OrderingRuleSet,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            display_parent_collections: false,
            sort_by_key: false,
            rules: OrderingRuleSet::new(),
        }
    }
}

/// Options for [`CollectionView::refresh`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshOptions {
    /// Carry expanded flags over to the rebuilt forest by name
    pub keep_expanded: bool,
}

/// How far [`CollectionView::expand_all`] descends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandDepth {
    Unlimited,
    /// Number of levels to reveal below the node
    Levels(usize),
}

impl From<i32> for ExpandDepth {
    fn from(depth: i32) -> Self {
        usize::try_from(depth).map_or(Self::Unlimited, Self::Levels)
    }
}

impl ExpandDepth {
    fn next(self) -> Option<Self> {
        match self {
            Self::Unlimited => Some(Self::Unlimited),
            Self::Levels(0) | Self::Levels(1) => None,
            Self::Levels(n) => Some(Self::Levels(n - 1)),
        }
    }
}

/// Flat, serializable description of one visible collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleCollection {
    pub name: String,
    pub title: String,
    pub level: usize,
    pub item_count: u64,
    pub total_count: u64,
    pub expanded: bool,
    pub has_children: bool,
    pub opens_externally: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Per-session view over the collection hierarchy
pub struct CollectionView {
    settings: ViewSettings,
    forest: CollectionForest,
    visible: Vec<NodeId>,
    top: Option<CollectionName>,
    base: Option<CollectionName>,
    lookup: Option<Box<dyn DescriptiveInfoLookup + Send + Sync>>,
}

impl std::fmt::Debug for CollectionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionView")
            .field("settings", &self.settings)
            .field("nodes", &self.forest.len())
            .field("visible", &self.visible.len())
            .field("top", &self.top)
            .field("base", &self.base)
            .finish()
    }
}

impl CollectionView {
    /// Create an empty view
    pub fn new(settings: ViewSettings) -> Self {
        let forest = CollectionForest::new(settings.delimiter);
        Self {
            settings,
            forest,
            visible: Vec::new(),
            top: None,
            base: None,
            lookup: None,
        }
    }

    /// Attach a descriptive-info collaborator
    pub fn with_lookup(mut self, lookup: impl DescriptiveInfoLookup + Send + Sync + 'static) -> Self {
        self.lookup = Some(Box::new(lookup));
        self
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn forest(&self) -> &CollectionForest {
        &self.forest
    }

    /// Current visible projection
    pub fn visible(&self) -> &[NodeId] {
        &self.visible
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &CollectionNode> {
        self.visible.iter().map(|id| &self.forest[*id])
    }

    /// Names of visible collections, in display order
    pub fn visible_names(&self) -> Vec<&str> {
        self.visible_nodes().map(|n| n.name().as_str()).collect()
    }

    pub fn top(&self) -> Option<&CollectionName> {
        self.top.as_ref()
    }

    pub fn base(&self) -> Option<&CollectionName> {
        self.base.as_ref()
    }

    /// Resolve a collection name against the current forest
    pub fn resolve(&self, name: &str) -> ShelfmarkResult<NodeId> {
        self.forest
            .find(name)
            .ok_or_else(|| ShelfmarkError::UnknownCollection {
                name: name.to_string(),
            })
    }

    /// Fetch fresh counts and rebuild.
    ///
    /// On source failure the previous forest and projection stay in place.
    pub fn refresh(
        &mut self,
        source: &dyn CatalogSource,
        options: RefreshOptions,
    ) -> ShelfmarkResult<()> {
        let counts = source.fetch_counts().inspect_err(|e| {
            warn!(source = source.name(), error = %e, "catalog fetch failed, keeping previous forest");
        })?;
        self.rebuild(counts, options);
        Ok(())
    }

    /// Rebuild the forest from a complete name→count mapping
    pub fn rebuild(&mut self, counts: CatalogCounts, options: RefreshOptions) {
        let expanded = if options.keep_expanded {
            self.forest.expanded_names()
        } else {
            Vec::new()
        };

        let mut forest = build_forest(self.settings.delimiter, counts);
        if let Some(lookup) = &self.lookup {
            apply_node_settings(&mut forest, lookup.as_ref());
        }
        if self.settings.sort_by_key {
            order_siblings_by_sort_key(&mut forest);
        }
        forest.restore_expanded(&expanded);
        self.forest = forest;

        for slot in [&mut self.top, &mut self.base] {
            if let Some(name) = slot.as_ref() {
                if self.forest.find(name.as_str()).is_none() {
                    warn!(collection = %name, "focused collection vanished on rebuild, clearing");
                    *slot = None;
                }
            }
        }
        if let Some(top) = self.top_id() {
            self.forest[top].expanded = true;
        }

        info!(
            nodes = self.forest.len(),
            kept_expanded = expanded.len(),
            "collection view rebuilt"
        );
        self.recompute();
    }

    /// Change the focused top and base collections and rebuild the projection.
    ///
    /// The top node is expanded so its subtree is shown.
    pub fn set_focus(&mut self, top: Option<&str>, base: Option<&str>) -> ShelfmarkResult<()> {
        let top_id = top.map(|name| self.resolve(name)).transpose()?;
        let base_id = base.map(|name| self.resolve(name)).transpose()?;

        self.top = top_id.map(|id| self.forest[id].name().clone());
        self.base = base_id.map(|id| self.forest[id].name().clone());
        if let Some(id) = top_id {
            self.forest[id].expanded = true;
        }
        debug!(top = ?top, base = ?base, "focus changed");
        self.recompute();
        Ok(())
    }

    /// Clear top and base and rebuild the projection
    pub fn reset(&mut self) {
        self.top = None;
        self.base = None;
        self.recompute();
    }

    /// Rebuild the visible projection from the forest
    pub fn recompute(&mut self) {
        self.visible = self.projector().project();
        let visible = self.visible.clone();
        self.enrich(&visible);
    }

    /// Expand `name` and splice its visible descendants in right after it,
    /// without re-sorting.
    pub fn show_children(&mut self, name: &str) -> ShelfmarkResult<()> {
        let id = self.resolve(name)?;
        self.forest[id].expanded = true;
        self.splice_descendants(id);
        Ok(())
    }

    /// Collapse `name` and remove its descendants from the projection
    pub fn hide_children(&mut self, name: &str) -> ShelfmarkResult<()> {
        let id = self.resolve(name)?;
        self.forest[id].expanded = false;
        self.remove_descendants(id);
        Ok(())
    }

    /// Show or hide children depending on the current flag.
    ///
    /// Showing re-sorts the projection so revealed collections follow the
    /// ordering rules; hiding does not.
    pub fn toggle(&mut self, name: &str) -> ShelfmarkResult<()> {
        let id = self.resolve(name)?;
        if self.forest[id].expanded {
            self.hide_children(name)
        } else {
            self.show_children(name)?;
            self.resort();
            Ok(())
        }
    }

    /// Expand `name` and its descendants down to `depth` levels, then
    /// re-sort once.
    pub fn expand_all(&mut self, name: &str, depth: ExpandDepth) -> ShelfmarkResult<()> {
        let id = self.resolve(name)?;
        if depth == ExpandDepth::Levels(0) {
            return Ok(());
        }
        self.expand_recursive(id, depth);
        self.splice_descendants(id);
        self.resort();
        Ok(())
    }

    /// Describe the visible projection for rendering
    pub fn snapshot(&self) -> Vec<VisibleCollection> {
        self.visible
            .iter()
            .map(|&id| {
                let node = &self.forest[id];
                let info = node.descriptive_info.as_ref();
                VisibleCollection {
                    name: node.name().to_string(),
                    title: node.display_title().to_string(),
                    level: node.level(),
                    item_count: node.item_count(),
                    total_count: self.forest.total_count(id),
                    expanded: node.expanded,
                    has_children: node.has_children(),
                    opens_externally: node.opens_externally,
                    icon: info.and_then(|i| i.icon.clone()),
                    link: info.and_then(|i| i.link.clone()),
                }
            })
            .collect()
    }

    fn top_id(&self) -> Option<NodeId> {
        self.top.as_ref().and_then(|n| self.forest.find(n.as_str()))
    }

    fn base_id(&self) -> Option<NodeId> {
        self.base.as_ref().and_then(|n| self.forest.find(n.as_str()))
    }

    fn projector(&self) -> VisibilityProjector<'_> {
        VisibilityProjector::new(&self.forest, &self.settings.rules)
            .with_top(self.top_id())
            .with_base(self.base_id())
            .display_parent_collections(self.settings.display_parent_collections)
    }

    fn resort(&mut self) {
        self.visible = self.projector().resort(&self.visible);
    }

    fn enrich(&mut self, ids: &[NodeId]) {
        if let Some(lookup) = &self.lookup {
            enrich_visible(&mut self.forest, ids, lookup.as_ref());
        }
    }

    fn expand_recursive(&mut self, id: NodeId, depth: ExpandDepth) {
        self.forest[id].expanded = true;
        let Some(next) = depth.next() else {
            return;
        };
        for child in self.forest[id].children().to_vec() {
            self.expand_recursive(child, next);
        }
    }

    /// Focused top when `id` is one of its strict ancestors. The top, its
    /// ancestors and its subtree are then shown regardless of `id`'s flag.
    fn focus_below(&self, id: NodeId) -> Option<NodeId> {
        self.top_id().filter(|&top| self.forest.is_ancestor(id, top))
    }

    /// Insert the expanded-gated descendants of `id` after it. A hidden top
    /// node splices at the front.
    fn splice_descendants(&mut self, id: NodeId) {
        self.remove_descendants(id);
        let at = match self.visible.iter().position(|v| *v == id) {
            Some(pos) => pos + 1,
            None if self.projector().is_hidden_top(id) => 0,
            None => return,
        };
        let focus = self.focus_below(id);
        let revealed: Vec<NodeId> = self
            .forest
            .visible_descendants(id)
            .into_iter()
            .filter(|&n| !on_focus_path(&self.forest, focus, n))
            .collect();
        self.enrich(&revealed);
        self.visible.splice(at..at, revealed);
    }

    fn remove_descendants(&mut self, id: NodeId) {
        let focus = self.focus_below(id);
        let forest = &self.forest;
        self.visible
            .retain(|&v| !forest.is_ancestor(id, v) || on_focus_path(forest, focus, v));
    }
}

/// True if `node` is the focused top, one of its ancestors or inside its subtree
fn on_focus_path(forest: &CollectionForest, top: Option<NodeId>, node: NodeId) -> bool {
    top.is_some_and(|top| {
        node == top || forest.is_ancestor(node, top) || forest.is_ancestor(top, node)
    })
}
