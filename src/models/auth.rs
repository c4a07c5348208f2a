use serde::{Deserialize, Serialize};

/// Body de `POST /login`
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

// Sin Debug derivado: no queremos la contraseña en los logs
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// Token utilizable: solo si `success` y el token no está vacío
    pub fn into_token(self) -> Option<String> {
        if !self.success {
            return None;
        }
        self.token.filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_token() {
        let ok: LoginResponse = serde_json::from_str(r#"{"success": true, "token": "abc"}"#).unwrap();
        assert_eq!(ok.into_token().as_deref(), Some("abc"));

        let rejected: LoginResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(rejected.into_token(), None);

        let no_token: LoginResponse = serde_json::from_str(r#"{"success": true, "token": ""}"#).unwrap();
        assert_eq!(no_token.into_token(), None);
    }

    #[test]
    fn test_password_not_in_debug() {
        let req = LoginRequest { login: "admin".into(), password: "12345".into() };
        let debug = format!("{:?}", req);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("12345"));
    }
}
