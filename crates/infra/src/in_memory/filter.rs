//! Filter strategies for in-memory search.

/// Narrows the full entity set down to the entities matching a filter value.
///
/// An absent filter must leave the input untouched. Any `Fn(&E, &F) -> bool`
/// closure is a strategy: it is applied as a per-entity predicate when a filter
/// is present.
pub trait FilterStrategy<E, F>: Send + Sync {
    fn apply(&self, items: Vec<E>, filter: Option<&F>) -> Vec<E>;
}

impl<E, F, P> FilterStrategy<E, F> for P
where
    P: Fn(&E, &F) -> bool + Send + Sync,
{
    fn apply(&self, items: Vec<E>, filter: Option<&F>) -> Vec<E> {
        match filter {
            None => items,
            Some(filter) => items.into_iter().filter(|item| self(item, filter)).collect(),
        }
    }
}

/// Case-insensitive substring match over one or more text attributes.
///
/// An entity matches when ANY of the registered fields contains the filter
/// text. An empty filter string matches everything.
///
/// ```ignore
/// let filter = TextFilter::new().field(Category::name);
/// ```
pub struct TextFilter<E> {
    fields: Vec<fn(&E) -> &str>,
}

impl<E> TextFilter<E> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a searchable text attribute.
    pub fn field(mut self, accessor: fn(&E) -> &str) -> Self {
        self.fields.push(accessor);
        self
    }

    fn matches(&self, item: &E, needle: &str) -> bool {
        self.fields
            .iter()
            .any(|field| field(item).to_lowercase().contains(needle))
    }
}

impl<E> Default for TextFilter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> core::fmt::Debug for TextFilter<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextFilter")
            .field("fields", &self.fields.len())
            .finish()
    }
}

impl<E> FilterStrategy<E, String> for TextFilter<E> {
    fn apply(&self, items: Vec<E>, filter: Option<&String>) -> Vec<E> {
        let needle = match filter {
            Some(filter) if !filter.is_empty() => filter.to_lowercase(),
            _ => return items,
        };
        items
            .into_iter()
            .filter(|item| self.matches(item, &needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        name: String,
        description: String,
    }

    impl Doc {
        fn new(name: &str, description: &str) -> Self {
            Self {
                name: name.into(),
                description: description.into(),
            }
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            &self.description
        }
    }

    fn name_or_description() -> TextFilter<Doc> {
        TextFilter::new().field(Doc::name).field(Doc::description)
    }

    #[test]
    fn absent_or_empty_filter_is_identity() {
        let items = vec![Doc::new("name value", "description test")];
        let filter = name_or_description();

        assert_eq!(filter.apply(items.clone(), None), items);
        assert_eq!(filter.apply(items.clone(), Some(&String::new())), items);
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let items = vec![
            Doc::new("test", "description 1"),
            Doc::new("TEST", "description 2"),
            Doc::new("fake", "3"),
        ];
        let filter = name_or_description();

        let by_name = filter.apply(items.clone(), Some(&"TEST".to_string()));
        assert_eq!(by_name, vec![items[0].clone(), items[1].clone()]);

        let by_description = filter.apply(items.clone(), Some(&"description".to_string()));
        assert_eq!(by_description, vec![items[0].clone(), items[1].clone()]);

        let none = filter.apply(items, Some(&"no-filter".to_string()));
        assert!(none.is_empty());
    }

    #[test]
    fn closures_act_as_predicates() {
        let items = vec![Doc::new("a", "1"), Doc::new("b", "22"), Doc::new("c", "333")];
        let min_len = |doc: &Doc, min: &usize| doc.description.len() >= *min;

        assert_eq!(min_len.apply(items.clone(), None), items);
        assert_eq!(min_len.apply(items.clone(), Some(&2)), items[1..].to_vec());
    }
}
