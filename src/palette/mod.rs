pub mod catalog;
pub mod defaults;
pub mod template;

pub use defaults::*;
pub use template::*;

use itertools::Itertools;

/// A group of palette items sharing a catalog and category, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteGroup<'a> {
    pub catalog: Catalog,
    pub category: &'a str,
    pub items: Vec<&'a PaletteItem>,
}

/// The read-only template feed the editor places blocks from.
#[derive(Debug, Clone)]
pub struct Palette {
    items: Vec<PaletteItem>,
}

impl Palette {
    /// The three built-in catalogs combined.
    pub fn builtin() -> Self {
        let mut items = catalog::functional_modules();
        items.extend(catalog::intelligent_agents());
        items.extend(catalog::data_connectors());
        Self { items }
    }

    pub fn from_items(items: Vec<PaletteItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PaletteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, template_id: &str) -> Option<&PaletteItem> {
        self.items.iter().find(|item| item.id == template_id)
    }

    pub fn catalog(&self, catalog: Catalog) -> impl Iterator<Item = &PaletteItem> {
        self.items.iter().filter(move |item| item.catalog == catalog)
    }

    /// Items whose name contains `query`, ignoring case, across every catalog.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&PaletteItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name_matches(&needle))
            .collect()
    }

    /// Search results grouped by catalog (in display order), then by category
    /// in order of first appearance. Empty groups are omitted.
    pub fn grouped(&self, query: &str) -> Vec<PaletteGroup<'_>> {
        let matches = self.search(query);
        let mut groups = Vec::new();
        for catalog in Catalog::ALL {
            let in_catalog: Vec<&PaletteItem> = matches
                .iter()
                .copied()
                .filter(|item| item.catalog == catalog)
                .collect();
            let categories = in_catalog
                .iter()
                .copied()
                .map(|item| item.category.as_str())
                .unique()
                .collect_vec();
            for category in categories {
                groups.push(PaletteGroup {
                    catalog,
                    category,
                    items: in_catalog
                        .iter()
                        .copied()
                        .filter(|item| item.category == category)
                        .collect(),
                });
            }
        }
        groups
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}
