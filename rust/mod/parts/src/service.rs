use partyard_catalog::{Catalog, Part, PartEntry};
use partyard_core::{ListResult, ServiceError};

/// Parts service — owns the catalog and the site settings used for rendering.
pub struct PartsService {
    pub(crate) catalog: Catalog,
    pub(crate) site_title: String,
}

impl PartsService {
    pub fn new(catalog: Catalog, site_title: impl Into<String>) -> Self {
        Self {
            catalog,
            site_title: site_title.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    pub fn get_part(&self, id: &str) -> Result<&Part, ServiceError> {
        self.catalog
            .resolve(id)
            .map_err(|e| ServiceError::NotFound(e.to_string()))
    }

    pub fn list_parts(&self) -> ListResult<Part> {
        ListResult::all(self.catalog.parts().to_vec())
    }

    pub fn entries(&self) -> Vec<PartEntry> {
        self.catalog.enumerate_ids()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample(id: &str, name: &str) -> Part {
        Part {
            id: id.into(),
            name: name.into(),
            price: 249.5,
            category: "transmission".into(),
            condition: "used".into(),
            model: "Land Cruiser 80".into(),
            year: "1994".into(),
            mileage: 310_000,
            short_description: format!("{} short", name),
            full_description: format!("{} full", name),
            tags: vec!["4x4".into(), "manual".into()],
            image: format!("/images/{}.jpg", id),
        }
    }

    pub(crate) fn service() -> PartsService {
        PartsService::new(
            Catalog::new(vec![sample("p1", "Gearbox"), sample("p2", "Transfer case")]),
            "Partyard",
        )
    }

    #[test]
    fn get_part_found() {
        let svc = service();
        assert_eq!(svc.get_part("p2").unwrap().name, "Transfer case");
    }

    #[test]
    fn get_part_missing_maps_to_not_found() {
        let svc = service();
        assert_eq!(
            svc.get_part("p9").unwrap_err(),
            ServiceError::NotFound("Part not found".into())
        );
    }

    #[test]
    fn list_and_entries_follow_catalog_order() {
        let svc = service();
        let list = svc.list_parts();
        assert_eq!(list.total, 2);
        assert_eq!(list.items[0].id, "p1");
        let entries: Vec<String> = svc.entries().into_iter().map(|e| e.id).collect();
        assert_eq!(entries, vec!["p1", "p2"]);
    }
}
