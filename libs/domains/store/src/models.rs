use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Serialize a document id as its plain 24-char hex form instead of the
/// `{"$oid": ...}` extended-JSON shape, matching what clients stored ids as.
///
/// Only response serialization ever sees a populated id: documents are
/// inserted with `id: None`, so the store's native ObjectId type is never
/// written back through this path.
fn oid_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// Catalog product. The store does not impose a schema: everything beyond
/// the identifier rides in `fields` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "oid_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

/// Blog post, schema-less like [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "oid_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

/// Shopping-cart item. Ownership is keyed by `email`; there is no
/// referential link to a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "oid_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

/// Registered customer. `email` is the identity key registration and the
/// store's unique index hinge on; anything else the client sent rides along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "oid_hex"
    )]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(flatten)]
    pub fields: Document,
}

/// Result of a store insert, echoing the generated identifier.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InsertOutcome {
    pub inserted_id: String,
}

/// Result of a delete-by-id; `deleted_count` is 0 or 1.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Outcome of a user registration attempt: either a fresh insert or the
/// document that already owns the email address.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Registration {
    Created(InsertOutcome),
    Existing(User),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};
    use serde_json::json;

    #[test]
    fn test_id_serializes_as_hex_string() {
        let oid = ObjectId::new();
        let product = Product {
            id: Some(oid),
            fields: doc! { "name": "keyboard" },
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], json!(oid.to_hex()));
        assert_eq!(value["name"], json!("keyboard"));
    }

    #[test]
    fn test_missing_id_is_omitted() {
        let product = Product {
            id: None,
            fields: doc! { "name": "keyboard" },
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_client_json_deserializes_without_id() {
        let cart: CartItem = serde_json::from_value(json!({
            "email": "a@x.com",
            "sku": "kb-01",
            "quantity": 2
        }))
        .unwrap();

        assert!(cart.id.is_none());
        assert_eq!(cart.email.as_deref(), Some("a@x.com"));
        assert_eq!(cart.fields.get_str("sku").unwrap(), "kb-01");
    }

    #[test]
    fn test_insert_shape_has_no_id_key() {
        let cart = CartItem {
            id: None,
            email: Some("a@x.com".to_string()),
            fields: doc! { "sku": "kb-01" },
        };

        let document = to_document(&cart).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("email").unwrap(), "a@x.com");
    }

    #[test]
    fn test_stored_document_round_trips() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "email": "a@x.com", "plan": "pro" };

        let user: User = from_document(stored).unwrap();
        assert_eq!(user.id, Some(oid));
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.fields.get_str("plan").unwrap(), "pro");
    }

    #[test]
    fn test_registration_serializes_untagged() {
        let created = Registration::Created(InsertOutcome {
            inserted_id: "665f00000000000000000000".to_string(),
        });
        let value = serde_json::to_value(&created).unwrap();
        assert_eq!(value["inserted_id"], json!("665f00000000000000000000"));

        let existing = Registration::Existing(User {
            id: None,
            email: "a@x.com".to_string(),
            fields: Document::new(),
        });
        let value = serde_json::to_value(&existing).unwrap();
        assert_eq!(value["email"], json!("a@x.com"));
    }
}
