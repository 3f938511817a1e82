use serde::{Deserialize, Serialize};

/// Credential sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Registration payload; field names match the backend contract verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Backend view of a freshly created account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_input_serializes_camel_case() {
        let input = RegisterInput {
            username: "sara".into(),
            first_name: "Sara".into(),
            last_name: "Adel".into(),
            email: "sara@example.com".into(),
            password: "Abcdefg1".into(),
            password_confirm: "Abcdefg1".into(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("passwordConfirm").is_some());
        assert!(json.get("first_name").is_none());
    }
}
