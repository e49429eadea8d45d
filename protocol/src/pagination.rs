use serde::Deserialize;
use serde::Serialize;

/// Paged collection shape used by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub docs: Vec<T>,
    pub count: u64,
}
