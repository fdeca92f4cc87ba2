//! Domain DTOs shared by the local-server and Naver call paths.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch schema drift between the two crates.

use serde::{Deserialize, Deserializer, Serialize};

/// A product record parsed from a search result.
///
/// `title` may contain HTML markup (Naver wraps matches in `<b>`); stripping
/// it is left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    pub link: String,
    pub image: String,
    #[serde(deserialize_with = "lenient_price")]
    pub lprice: i64,
    #[serde(default)]
    pub mall_name: String,
}

/// Username/password pair sent as the body of post and exchange calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Opaque token forwarded in `X-Authorization`. The remote server validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Client id and secret required by the Naver Open API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Naver sends `lprice` as a string of digits, the local server as a number.
fn lenient_price<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Number(i64),
        Text(String),
    }

    match Price::deserialize(deserializer)? {
        Price::Number(n) => Ok(n),
        Price::Text(s) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("lprice is not an integer: {s:?}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_accepts_numeric_and_string_prices() {
        let a: Item = serde_json::from_str(
            r#"{"title":"A","link":"l","image":"i","lprice":100}"#,
        )
        .unwrap();
        let b: Item = serde_json::from_str(
            r#"{"title":"A","link":"l","image":"i","lprice":"100"}"#,
        )
        .unwrap();
        assert_eq!(a.lprice, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn item_rejects_non_numeric_price_text() {
        let result: Result<Item, _> =
            serde_json::from_str(r#"{"title":"A","link":"l","image":"i","lprice":"cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn item_serializes_camel_case_mall_name() {
        let item = Item {
            title: "A".to_string(),
            link: "l".to_string(),
            image: "i".to_string(),
            lprice: 5,
            mall_name: "Shop".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["mallName"], "Shop");
        assert!(json.get("mall_name").is_none());
    }

    #[test]
    fn credentials_serialize_as_plain_object() {
        let json = serde_json::to_value(Credentials::new("Robbie", "1234")).unwrap();
        assert_eq!(json, serde_json::json!({"username": "Robbie", "password": "1234"}));
    }
}
