//! Category catalog loaded once at startup.
//!
//! The trivia API labels many categories as `Domain: Subtopic`. Users pick a
//! category by its simplified label (the part after the last colon), so the
//! catalog keeps both labels side by side with the numeric id.

use log::{debug, info};

use crate::trivia::{FetchError, requester::Requester};

/// A label and the id it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// Category label
    label: String,
    /// String-encoded numeric id
    id: String,
}

/// Immutable, ordered mapping between category labels and ids.
///
/// Holds both the full label mapping and the simplified one, built from the
/// same pairs so they always share ids. Each mapping has unique keys: a
/// repeated label keeps the position of its first occurrence and takes the id
/// of its last one. Simplified labels differing only by surrounding whitespace
/// are the same key.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    /// Labels as returned by the API
    full: Vec<Entry>,
    /// Substrings after the last colon of the full labels
    simplified: Vec<Entry>,
}

impl CategoryMap {
    /// Builds a map from `(label, id)` pairs, keeping their order.
    pub fn new<I, N, D>(categories: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: ToString,
    {
        let mut map = CategoryMap::default();

        for (name, id) in categories {
            let name = name.into();
            let id = id.to_string();

            insert(&mut map.simplified, simplify(&name), &id, |label| {
                label.trim() == simplify(&name).trim()
            });
            insert(&mut map.full, &name, &id, |label| label == name);
        }

        map
    }

    /// Requests the catalog from the trivia server.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the request; there is no retry.
    pub async fn load<R: Requester>(requester: &R) -> Result<Self, FetchError> {
        let categories = requester.get_categories().await?;
        for category in &categories {
            debug!("category {} -> {}", category.name, category.id);
        }

        let map = CategoryMap::new(
            categories
                .into_iter()
                .map(|category| (category.name, category.id)),
        );

        info!(
            "loaded {} trivia categories ({} simplified labels)",
            map.len(),
            map.simplified.len()
        );

        Ok(map)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.full.len()
    }

    /// Whether the catalog has no category at all.
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Id of a category by its simplified label.
    ///
    /// Surrounding whitespace is ignored on both sides: simplified labels keep
    /// the space that followed the colon, users rarely type it.
    pub fn simplified_id(&self, label: &str) -> Option<&str> {
        let label = label.trim();
        self.simplified
            .iter()
            .find(|entry| entry.label.trim() == label)
            .map(|entry| entry.id.as_str())
    }

    /// Simplified labels, in API order.
    pub fn simplified_labels(&self) -> impl Iterator<Item = &str> {
        self.simplified.iter().map(|entry| entry.label.as_str())
    }
}

/// Overwrites the id of the first entry matching `same_key`, or appends a new one.
fn insert(entries: &mut Vec<Entry>, label: &str, id: &str, same_key: impl Fn(&str) -> bool) {
    match entries.iter().position(|entry| same_key(&entry.label)) {
        Some(index) => entries[index].id = id.to_owned(),
        None => entries.push(Entry {
            label: label.to_owned(),
            id: id.to_owned(),
        }),
    }
}

/// Returns the substring after the last colon, or the whole label.
fn simplify(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, subtopic)) => subtopic,
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::{FetchError, MockRequester, response_structs::CategoryResponse};

    fn create_test_map() -> CategoryMap {
        CategoryMap::new([
            ("General Knowledge", 9),
            ("Entertainment: Books", 10),
            ("Entertainment: Film", 11),
            ("Science: Computers", 18),
        ])
    }

    #[test]
    fn test_simplify() {
        assert_eq!(simplify("Entertainment: Books"), " Books");
        assert_eq!(simplify("General Knowledge"), "General Knowledge");
        assert_eq!(simplify("A:B:C"), "C");
        assert_eq!(simplify("Trailing:"), "");
    }

    #[test]
    fn test_simplified_labels_follow_full_labels() {
        let map = create_test_map();

        for entry in &map.full {
            let simplified = match entry.label.rsplit_once(':') {
                Some((_, subtopic)) => subtopic,
                None => entry.label.as_str(),
            };
            assert_eq!(map.simplified_id(simplified), Some(entry.id.as_str()));
        }
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_duplicate_simplified_labels_are_merged() {
        let map = CategoryMap::new([
            ("Entertainment: Books", 10),
            ("Science: Computers", 18),
            ("Literature: Books", 99),
        ]);

        let labels: Vec<&str> = map.simplified_labels().collect();
        assert_eq!(labels, vec![" Books", " Computers"]);
        assert_eq!(map.simplified_id("Books"), Some("99"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_simplified_labels_differing_by_whitespace_are_merged() {
        let map = CategoryMap::new([
            ("Entertainment: Books", 10),
            ("Literature: Books", 99),
            ("Books", 7),
        ]);

        let labels: Vec<&str> = map.simplified_labels().collect();
        assert_eq!(labels, vec![" Books"]);
        assert_eq!(map.simplified_id(" Books"), Some("7"));
        assert_eq!(map.simplified_id("Books"), Some("7"));
    }

    #[test]
    fn test_simplified_labels_keep_order() {
        let map = create_test_map();
        let labels: Vec<&str> = map.simplified_labels().collect();

        assert_eq!(
            labels,
            vec!["General Knowledge", " Books", " Film", " Computers"]
        );
    }

    #[test]
    fn test_simplified_id_ignores_surrounding_whitespace() {
        let map = create_test_map();

        assert_eq!(map.simplified_id(" Books"), Some("10"));
        assert_eq!(map.simplified_id("Books"), Some("10"));
        assert_eq!(map.simplified_id("General Knowledge"), Some("9"));
        assert_eq!(map.simplified_id(" General Knowledge"), Some("9"));
        assert_eq!(map.simplified_id("books"), None);
        assert_eq!(map.simplified_id("Entertainment: Books"), None);
    }

    #[test]
    fn test_empty_map() {
        let map = CategoryMap::default();

        assert!(map.is_empty());
        assert_eq!(map.simplified_labels().count(), 0);
        assert_eq!(map.simplified_id("Any"), None);
    }

    #[tokio::test]
    async fn test_load() {
        let mut mock_requester = MockRequester::new();
        mock_requester
            .expect_get_categories()
            .times(1)
            .returning(|| {
                Ok(vec![
                    CategoryResponse {
                        id: 9,
                        name: "General Knowledge".to_string(),
                    },
                    CategoryResponse {
                        id: 15,
                        name: "Entertainment: Video Games".to_string(),
                    },
                ])
            });

        let map = CategoryMap::load(&mock_requester).await.unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.simplified_id("Video Games"), Some("15"));
        assert_eq!(map.simplified_id("General Knowledge"), Some("9"));
    }

    #[tokio::test]
    async fn test_load_propagates_error() {
        let mut mock_requester = MockRequester::new();
        mock_requester
            .expect_get_categories()
            .times(1)
            .returning(|| Err(FetchError::Api(5)));

        let result = CategoryMap::load(&mock_requester).await;

        assert!(matches!(result, Err(FetchError::Api(5))));
    }
}
