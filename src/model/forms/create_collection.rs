use serde::Serialize;

use crate::model::collection::Collection;

/// Request body for creating a collection.
///
/// Only `title` and (when set) `alias` go over the wire. The server derives
/// everything else, so the other fields of a fresh `Collection` are omitted
/// entirely rather than sent as null.
#[derive(Serialize)]
pub struct CreateCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub title: String,
}

impl From<&Collection> for CreateCollection {
    fn from(collection: &Collection) -> Self {
        CreateCollection {
            alias: collection.alias.clone(),
            title: collection.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_only_title_and_alias() {
        let collection = Collection::new("My Blog".to_owned(), Some("blog".to_owned()));
        let body = serde_json::to_value(CreateCollection::from(&collection)).unwrap();

        assert_eq!(body, json!({ "alias": "blog", "title": "My Blog" }));
    }

    #[test]
    fn omits_alias_when_unset() {
        let collection = Collection::new("My Blog".to_owned(), None);
        let body = serde_json::to_value(CreateCollection::from(&collection)).unwrap();

        assert_eq!(body, json!({ "title": "My Blog" }));
    }
}
