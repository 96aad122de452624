use reflection::Reflection;
use reflection_derive::Reflection;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A collection (blog) resource on a WriteFreely instance.
///
/// Built either by `new` as the bare minimum to send in a create request, or
/// by `from_response` from the JSON the server returns. Everything except
/// `title` is absent until the server has answered.
#[derive(Debug, Serialize, Reflection, Clone, PartialEq, Eq)]
pub struct Collection {
    pub alias: Option<String>,
    pub title: String,
    pub description: Option<String>,
    // Named like a bool upstream, but the server sends a string. Decoded as
    // observed; possibly an upstream bug.
    pub style_sheet: Option<String>,
    #[serde(rename = "public")]
    pub is_public: Option<bool>,
    pub views: Option<u64>,
    pub email: Option<String>,
    pub url: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionDecodeError {
    #[error("missing field `{0}` in collection response")]
    MissingField(&'static str),
    #[error("field `{field}` in collection response is not a {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

impl Collection {
    /// A bare-minimum collection for a create request. If `alias` is `None`
    /// the server generates one.
    pub fn new(title: String, alias: Option<String>) -> Self {
        Collection {
            alias,
            title,
            // Populated by the server response, never defaulted here.
            description: None,
            style_sheet: None,
            is_public: None,
            views: None,
            email: None,
            url: None,
        }
    }

    /// Decodes a collection from the JSON object in a server response.
    ///
    /// All fields except `email` and `url` must be present with the right
    /// type; the first field that isn't fails the whole decode.
    pub fn from_response(object: &Value) -> Result<Self, CollectionDecodeError> {
        Ok(Collection {
            alias: Some(required_string(object, "alias")?),
            title: required_string(object, "title")?,
            description: Some(required_string(object, "description")?),
            style_sheet: Some(required_string(object, "style_sheet")?),
            is_public: Some(required_bool(object, "public")?),
            views: Some(required_integer(object, "views")?),
            email: optional_string(object, "email")?,
            url: optional_string(object, "url")?,
        })
    }
}

fn required<'a>(object: &'a Value, field: &'static str) -> Result<&'a Value, CollectionDecodeError> {
    object
        .get(field)
        .ok_or(CollectionDecodeError::MissingField(field))
}

fn required_string(object: &Value, field: &'static str) -> Result<String, CollectionDecodeError> {
    required(object, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or(CollectionDecodeError::TypeMismatch {
            field,
            expected: "string",
        })
}

fn required_bool(object: &Value, field: &'static str) -> Result<bool, CollectionDecodeError> {
    required(object, field)?
        .as_bool()
        .ok_or(CollectionDecodeError::TypeMismatch {
            field,
            expected: "boolean",
        })
}

fn required_integer(object: &Value, field: &'static str) -> Result<u64, CollectionDecodeError> {
    required(object, field)?
        .as_u64()
        .ok_or(CollectionDecodeError::TypeMismatch {
            field,
            expected: "integer",
        })
}

fn optional_string(
    object: &Value,
    field: &'static str,
) -> Result<Option<String>, CollectionDecodeError> {
    match object.get(field) {
        None => Ok(None),
        Some(value) => value.as_str().map(|s| Some(s.to_owned())).ok_or(
            CollectionDecodeError::TypeMismatch {
                field,
                expected: "string",
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::forms::create_collection::CreateCollection;
    use serde_json::json;

    fn full_response() -> Value {
        json!({
            "alias": "blog",
            "title": "My Blog",
            "description": "A blog about blogs",
            "style_sheet": "body { color: grey }",
            "public": true,
            "views": 42,
            "email": "blog@example.com",
            "url": "https://write.example.com/blog/"
        })
    }

    #[test]
    fn new_collection_leaves_server_fields_unset() {
        let collection = Collection::new("My Blog".to_owned(), Some("blog".to_owned()));

        assert_eq!(collection.alias.as_deref(), Some("blog"));
        assert_eq!(collection.title, "My Blog");
        assert_eq!(collection.description, None);
        assert_eq!(collection.style_sheet, None);
        assert_eq!(collection.is_public, None);
        assert_eq!(collection.views, None);
        assert_eq!(collection.email, None);
        assert_eq!(collection.url, None);
    }

    #[test]
    fn decodes_a_full_response() {
        let collection = Collection::from_response(&full_response()).unwrap();

        assert_eq!(collection.alias.as_deref(), Some("blog"));
        assert_eq!(collection.title, "My Blog");
        assert_eq!(collection.description.as_deref(), Some("A blog about blogs"));
        assert_eq!(
            collection.style_sheet.as_deref(),
            Some("body { color: grey }")
        );
        assert_eq!(collection.is_public, Some(true));
        assert_eq!(collection.views, Some(42));
        assert_eq!(collection.email.as_deref(), Some("blog@example.com"));
        assert_eq!(
            collection.url.as_deref(),
            Some("https://write.example.com/blog/")
        );
    }

    #[test]
    fn tolerates_absent_email_and_url() {
        let response = json!({
            "alias": "blog",
            "title": "My Blog",
            "description": "desc",
            "style_sheet": "",
            "public": true,
            "views": 42
        });

        let collection = Collection::from_response(&response).unwrap();

        assert_eq!(collection.style_sheet.as_deref(), Some(""));
        assert_eq!(collection.email, None);
        assert_eq!(collection.url, None);
    }

    #[test]
    fn fails_when_any_required_field_is_missing() {
        for field in ["alias", "title", "description", "style_sheet", "public", "views"] {
            let mut response = full_response();
            response.as_object_mut().unwrap().remove(field);

            let result = Collection::from_response(&response);
            assert_eq!(
                result,
                Err(CollectionDecodeError::MissingField(field)),
                "removing '{}' should fail the whole decode",
                field
            );
        }
    }

    #[test]
    fn fails_when_views_is_a_string() {
        let mut response = full_response();
        response["views"] = json!("42");

        assert_eq!(
            Collection::from_response(&response),
            Err(CollectionDecodeError::TypeMismatch {
                field: "views",
                expected: "integer"
            })
        );
    }

    #[test]
    fn fails_when_public_is_a_string() {
        let mut response = full_response();
        response["public"] = json!("true");

        assert_eq!(
            Collection::from_response(&response),
            Err(CollectionDecodeError::TypeMismatch {
                field: "public",
                expected: "boolean"
            })
        );
    }

    #[test]
    fn fails_when_email_is_present_but_not_a_string() {
        let mut response = full_response();
        response["email"] = json!(7);

        assert_eq!(
            Collection::from_response(&response),
            Err(CollectionDecodeError::TypeMismatch {
                field: "email",
                expected: "string"
            })
        );
    }

    #[test]
    fn decoded_response_round_trips_through_a_create_request() {
        let collection = Collection::from_response(&full_response()).unwrap();
        let body = serde_json::to_value(CreateCollection::from(&collection)).unwrap();

        assert_eq!(body, json!({ "alias": "blog", "title": "My Blog" }));
    }
}
