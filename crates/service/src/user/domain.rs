use serde::Deserialize;

/// Registration payload; carries the plaintext password.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    #[serde(alias = "username")]
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Partial update; a present `password` is re-hashed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserInput {
    #[serde(alias = "username")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub profile_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_accepts_username_spelling() {
        for body in [
            r#"{"fullName":"Ana Ruiz","email":"ana@example.com","password":"pw"}"#,
            r#"{"username":"Ana Ruiz","email":"ana@example.com","password":"pw"}"#,
        ] {
            let input: CreateUserInput = serde_json::from_str(body).unwrap();
            assert_eq!(input.full_name, "Ana Ruiz");
        }
    }

    #[test]
    fn update_accepts_username_spelling() {
        let a: UpdateUserInput = serde_json::from_str(r#"{"username":"Ana R."}"#).unwrap();
        let b: UpdateUserInput = serde_json::from_str(r#"{"fullName":"Ana R."}"#).unwrap();
        assert_eq!(a.full_name.as_deref(), Some("Ana R."));
        assert_eq!(a.full_name, b.full_name);
        assert!(a.email.is_none());
    }
}
