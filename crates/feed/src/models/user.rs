use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub user_id: i64,
    pub name: Option<String>,
    pub username: String,
    pub password: String,
    pub gender: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub gender: Option<String>,
}

// Body fields are free-form; presence is checked by the handler.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}

/// Display name of a followed or following account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileName {
    pub name: Option<String>,
}
