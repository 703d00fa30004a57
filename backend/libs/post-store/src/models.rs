use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A blog post as exposed to every front end.
///
/// `id` is the hex rendering of the store-assigned ObjectId and uses the same
/// key (`id`) in JSON and in protobuf messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub body: String,
}

/// Persisted shape of a post: `{ _id: ObjectId, body: String }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub body: String,
}

/// Insert payload; `_id` is left to the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPostDocument {
    pub body: String,
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Post {
            id: doc.id.to_hex(),
            body: doc.body,
        }
    }
}
