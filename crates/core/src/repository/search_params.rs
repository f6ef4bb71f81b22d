//! Canonical search input.
//!
//! Clients hand over loosely typed query input (query strings, JSON bodies).
//! [`SearchParams`] normalizes it once, at construction, so that repositories
//! only ever see a positive page, a positive page size, a trimmed sort field and
//! a valid sort direction. Malformed pagination/sort input never fails: it is
//! clamped to the defaults.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page used when the requested one is missing or invalid.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the requested one is missing or invalid.
pub const DEFAULT_PER_PAGE: usize = 15;

// Largest integer a client can send through a JSON number without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Direction for ordering search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction case-insensitively; anything other than exactly
    /// `desc` (surrounding whitespace included) is `Asc`.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SortDirection> for Value {
    fn from(value: SortDirection) -> Self {
        Value::String(value.as_str().to_string())
    }
}

/// Raw search options as received from a client.
///
/// Every field is optional. Pagination and sort fields keep their raw JSON
/// shape (numbers, numeric strings, `null`, garbage) until normalized by
/// [`SearchParams::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de>"))]
pub struct SearchProps<F = String> {
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default)]
    pub per_page: Option<Value>,
    #[serde(default)]
    pub sort: Option<Value>,
    #[serde(default)]
    pub sort_dir: Option<Value>,
    #[serde(default)]
    pub filter: Option<F>,
}

impl<F> Default for SearchProps<F> {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

/// Normalized, immutable search input.
///
/// `sort` is not checked against any allow-list here; repositories ignore
/// fields they cannot sort by. `sort_dir` is only present when `sort` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams<F = String> {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F> SearchParams<F> {
    pub fn new(props: SearchProps<F>) -> Self {
        let sort = props.sort.as_ref().and_then(normalize_sort);
        let sort_dir = sort.as_ref().map(|_| {
            props
                .sort_dir
                .as_ref()
                .and_then(Value::as_str)
                .map(SortDirection::parse_lenient)
                .unwrap_or_default()
        });

        Self {
            page: positive_integer(props.page.as_ref()).unwrap_or(DEFAULT_PAGE),
            per_page: positive_integer(props.per_page.as_ref()).unwrap_or(DEFAULT_PER_PAGE),
            sort,
            sort_dir,
            filter: props.filter,
        }
    }

    pub fn builder() -> SearchParamsBuilder<F> {
        SearchParamsBuilder::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Number of items preceding the requested page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Same query with a different sort; used by default-sort layers.
    #[must_use]
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = normalize_sort(&Value::String(field.into()));
        self.sort_dir = self.sort.as_ref().map(|_| direction);
        self
    }
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self::new(SearchProps::default())
    }
}

impl<F> From<SearchProps<F>> for SearchParams<F> {
    fn from(props: SearchProps<F>) -> Self {
        Self::new(props)
    }
}

/// Fluent construction of [`SearchParams`].
///
/// ```
/// use repokit_core::repository::{SearchParams, SortDirection};
///
/// let params: SearchParams = SearchParams::builder()
///     .page("2")
///     .per_page(0)
///     .sort(" name ")
///     .sort_dir(SortDirection::Desc)
///     .filter("drama".to_string())
///     .build();
///
/// assert_eq!(params.page(), 2);
/// assert_eq!(params.per_page(), 15);
/// assert_eq!(params.sort(), Some("name"));
/// assert_eq!(params.sort_dir(), Some(SortDirection::Desc));
/// ```
#[derive(Debug, Clone)]
pub struct SearchParamsBuilder<F = String> {
    props: SearchProps<F>,
}

impl<F> Default for SearchParamsBuilder<F> {
    fn default() -> Self {
        Self {
            props: SearchProps::default(),
        }
    }
}

impl<F> SearchParamsBuilder<F> {
    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.props.page = Some(page.into());
        self
    }

    pub fn per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.props.per_page = Some(per_page.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<Value>) -> Self {
        self.props.sort = Some(sort.into());
        self
    }

    pub fn sort_dir(mut self, sort_dir: impl Into<Value>) -> Self {
        self.props.sort_dir = Some(sort_dir.into());
        self
    }

    pub fn filter(mut self, filter: F) -> Self {
        self.props.filter = Some(filter);
        self
    }

    pub fn build(self) -> SearchParams<F> {
        SearchParams::new(self.props)
    }
}

/// Coerce raw input to a positive integer, or `None` when it is not one.
fn positive_integer(raw: Option<&Value>) -> Option<usize> {
    let number = match raw? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    let is_positive_integer =
        number.is_finite() && number.fract() == 0.0 && number >= 1.0 && number <= MAX_SAFE_INTEGER;
    is_positive_integer.then_some(number as usize)
}

fn normalize_sort(raw: &Value) -> Option<String> {
    let text = match raw {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
