//! Paginated search output.

use serde::Serialize;

use crate::entity::Entity;

/// One page of search results plus pagination metadata.
///
/// `total` counts every item that matched the filter, before pagination, so
/// `last_page` reflects the real number of pages whatever page was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
}

impl<E> SearchResult<E> {
    /// Build a result page; `last_page` is derived as `ceil(total / per_page)`.
    ///
    /// A zero `per_page` is treated as one so the division is always defined.
    pub fn new(items: Vec<E>, total: usize, current_page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: total.div_ceil(per_page),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    /// Convert each item (e.g. entity to output DTO) keeping the metadata.
    pub fn map_items<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

impl<E: Entity> SearchResult<E> {
    /// JSON view with items rendered through [`Entity::to_primitive`].
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let items = self
            .items
            .iter()
            .map(Entity::to_primitive)
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(serde_json::json!({
            "items": items,
            "total": self.total,
            "current_page": self.current_page,
            "per_page": self.per_page,
            "last_page": self.last_page,
        }))
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::*;
    use crate::id::EntityId;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Note {
        id: EntityId,
        body: String,
    }

    impl Entity for Note {
        type Id = EntityId;

        fn entity_id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn exposes_constructor_values() {
        let result = SearchResult::new(vec!["a", "b"], 4, 1, 2);
        assert_eq!(result.items(), &["a", "b"]);
        assert_eq!(result.total(), 4);
        assert_eq!(result.current_page(), 1);
        assert_eq!(result.per_page(), 2);
        assert_eq!(result.last_page(), 2);
    }

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(SearchResult::<u8>::new(vec![], 4, 1, 15).last_page(), 1);
        assert_eq!(SearchResult::<u8>::new(vec![], 54, 1, 15).last_page(), 4);
        assert_eq!(SearchResult::<u8>::new(vec![], 45, 1, 15).last_page(), 3);
        assert_eq!(SearchResult::<u8>::new(vec![], 0, 1, 15).last_page(), 0);
    }

    #[test]
    fn serializes_for_presentation_layers() {
        let result = SearchResult::new(vec![1, 2], 3, 1, 2);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "items": [1, 2],
                "total": 3,
                "current_page": 1,
                "per_page": 2,
                "last_page": 2
            })
        );
    }

    #[test]
    fn map_items_keeps_metadata() {
        let result = SearchResult::new(vec![1, 2], 5, 2, 2).map_items(|n| n * 10);
        assert_eq!(result, SearchResult::new(vec![10, 20], 5, 2, 2));
    }

    #[test]
    fn to_json_renders_entities_as_primitives() {
        let id = EntityId::new();
        let result = SearchResult::new(
            vec![Note {
                id,
                body: "hello".into(),
            }],
            1,
            1,
            15,
        );
        assert_eq!(
            result.to_json().unwrap(),
            json!({
                "items": [{ "id": id.to_string(), "body": "hello" }],
                "total": 1,
                "current_page": 1,
                "per_page": 15,
                "last_page": 1
            })
        );
    }
}
