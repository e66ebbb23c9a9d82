use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Every column except the key is nullable; rows written without a field
/// read back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub district_id: i64,
    pub district_name: Option<String>,
    pub state_id: Option<i64>,
    pub cases: Option<i64>,
    pub cured: Option<i64>,
    pub active: Option<i64>,
    pub deaths: Option<i64>,
}

/// Body of district create and update requests. Updates replace every field,
/// and an absent field is written as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictInput {
    #[serde(default)]
    pub district_name: Option<String>,
    #[serde(default, deserialize_with = "integer_like")]
    pub state_id: Option<i64>,
    #[serde(default, deserialize_with = "integer_like")]
    pub cases: Option<i64>,
    #[serde(default, deserialize_with = "integer_like")]
    pub cured: Option<i64>,
    #[serde(default, deserialize_with = "integer_like")]
    pub active: Option<i64>,
    #[serde(default, deserialize_with = "integer_like")]
    pub deaths: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerLike {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Accepts what an INTEGER column would coerce to an integer: JSON integers,
/// whole floats and numeric strings. Anything else is rejected.
fn integer_like<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<IntegerLike>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match value {
        IntegerLike::Integer(n) => Ok(Some(n)),
        IntegerLike::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e18 => Ok(Some(f as i64)),
        IntegerLike::Float(f) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
        IntegerLike::Text(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got \"{s}\""))),
    }
}
