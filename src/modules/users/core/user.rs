use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user record as exchanged over the wire.
///
/// Every field is optional on input: anything missing or `null` decodes to
/// its zero value, and unknown fields are ignored. Keys are matched
/// case-insensitively (`userName`, `username` and `USERNAME` are the same
/// field); output always uses the camelCase names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(alias = "username")]
    pub user_name: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(alias = "catchphrase")]
    pub catch_phrase: String,
    pub bs: String,
}

impl User {
    /// Decodes the first JSON value in `bytes`; anything after it is ignored.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value = match serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .next()
        {
            Some(value) => value?,
            None => return serde_json::from_slice(bytes),
        };
        match value {
            Value::Null => Ok(Self::default()),
            value => serde_json::from_value(fold_keys(value)),
        }
    }
}

// Lowercases object keys and drops `null` members so they fall back to defaults.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_lowercase(), fold_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Linear scan for the first record carrying `id`.
pub fn find_index(users: &[User], id: i64) -> Option<usize> {
    users.iter().position(|user| user.id == id)
}

/// Path parameters that are not a decimal integer can never name a stored user.
pub fn parse_user_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
