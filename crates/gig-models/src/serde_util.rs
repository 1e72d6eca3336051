//! Serde helpers shared by the document models.

use bson::oid::ObjectId;
use serde::Serializer;

/// Serialize an optional ObjectId as its plain hex form.
///
/// JSON clients expect `"_id": "66f0..."`, not the extended-JSON
/// `{"$oid": ...}` map the default impl produces. Deserialization is left
/// alone so ids read back from the store stay typed.
pub fn opt_oid_as_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
