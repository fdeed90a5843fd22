use vecbuilder_core::SlotCategory;

use crate::dto::{CatalogEntryDto, CatalogViewDto};
use crate::session::Session;

/// The picker shown when an editable slot of `category` is clicked.
pub fn catalog_view(session: &Session, category: SlotCategory) -> CatalogViewDto {
    CatalogViewDto {
        title: format!("Select from {} Database", category.catalog_title()),
        entries: session
            .catalog()
            .entries(category)
            .into_iter()
            .map(CatalogEntryDto::from)
            .collect(),
    }
}

/// Entries across all categories whose name contains `query`.
pub fn search_catalog(session: &Session, query: &str) -> CatalogViewDto {
    CatalogViewDto {
        title: format!("Search results for \"{}\"", query),
        entries: session
            .catalog()
            .search(query)
            .into_iter()
            .map(CatalogEntryDto::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecbuilder_components::Catalog;
    use vecbuilder_core::VectorTemplate;

    #[test]
    fn test_catalog_view() {
        let s = Session::new(&VectorTemplate::aav(), 1, Catalog::builtin()).unwrap();
        let view = catalog_view(&s, SlotCategory::Orf);
        assert_eq!(view.title, "Select from ORF Database");
        assert_eq!(view.entries.len(), 5);
        assert_eq!(view.entries[0].name, "GFP");

        let view = catalog_view(&s, SlotCategory::Regulatory);
        assert_eq!(view.title, "Select from Regulatory Database");
        assert_eq!(view.entries.len(), 3);
    }

    #[test]
    fn test_search_catalog() {
        let s = Session::new(&VectorTemplate::aav(), 1, Catalog::builtin()).unwrap();
        let view = search_catalog(&s, "2a");
        let names: Vec<&str> = view.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["T2A", "P2A"]);
    }
}
