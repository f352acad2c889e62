use crate::VaultClient;
use crate::VaultError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The envelope Vault wraps every response in: either an `errors` list or a
/// `data` mapping carrying the requested fields.
#[derive(Deserialize, Debug)]
pub(crate) struct VaultResponse {
    #[serde(default)]
    errors: Option<Vec<String>>,
    #[serde(default)]
    data: Option<Map<String, Value>>,
}

impl VaultResponse {
    fn parse(body: &str) -> Result<Self, VaultError> {
        serde_json::from_str(body)
            .map_err(|e| VaultError::MalformedResponseError(format!("not valid JSON: {}", e)))
    }

    /// Extracts a string field from `data`, surfacing the server's `errors`
    /// list first if one is present.
    fn into_data_field(self, field: &str) -> Result<String, VaultError> {
        if let Some(errors) = self.errors {
            return Err(VaultError::RemoteError(errors.join(",")));
        }
        self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                VaultError::MalformedResponseError(format!("missing field `data.{}`", field))
            })
    }
}

impl<'a> VaultClient<'a> {
    /// Fetches the role-id of an AppRole role.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vault_approle_init::VaultClient;
    /// let client = VaultClient::new(&"https://vault.example:8200", &"s.klmEXAMPLE");
    /// let role_id = client.fetch_role_id(&"approle", &"myrole");
    /// ```
    pub fn fetch_role_id(&self, auth_path: &str, role: &str) -> Result<String, VaultError> {
        let uri = self.role_url(auth_path, role, "role-id");
        println!("Requesting new role-id from {}", uri);
        let resp_body = self.get_authed(&uri)?;
        VaultResponse::parse(&resp_body)?.into_data_field("role_id")
    }

    /// Generates a new secret-id for an AppRole role. Each call mints a fresh
    /// credential on the server side.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vault_approle_init::VaultClient;
    /// let client = VaultClient::new(&"https://vault.example:8200", &"s.klmEXAMPLE");
    /// let secret_id = client.fetch_secret_id(&"approle", &"myrole");
    /// ```
    pub fn fetch_secret_id(&self, auth_path: &str, role: &str) -> Result<String, VaultError> {
        let uri = self.role_url(auth_path, role, "secret-id");
        println!("Requesting new secret-id from {}", uri);
        let resp_body = self.post_authed(&uri)?;
        VaultResponse::parse(&resp_body)?.into_data_field("secret_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_role_id_from_data() {
        let resp = VaultResponse::parse(r#"{"data":{"role_id":"abc123"}}"#).unwrap();
        assert_eq!(resp.into_data_field("role_id").unwrap(), "abc123");
    }

    #[test]
    fn joins_server_errors_with_commas() {
        let resp = VaultResponse::parse(r#"{"errors":["permission denied","role not found"]}"#)
            .unwrap();
        match resp.into_data_field("role_id") {
            Err(VaultError::RemoteError(msg)) => {
                assert_eq!(msg, "permission denied,role not found")
            }
            other => panic!("expected RemoteError, got {:?}", other),
        }
    }

    #[test]
    fn server_errors_take_precedence_over_data() {
        let resp =
            VaultResponse::parse(r#"{"errors":["backend sealed"],"data":{"role_id":"abc"}}"#)
                .unwrap();
        assert!(matches!(
            resp.into_data_field("role_id"),
            Err(VaultError::RemoteError(_))
        ));
    }

    #[test]
    fn missing_field_is_a_malformed_response() {
        let resp = VaultResponse::parse(r#"{"data":{"something_else":"x"}}"#).unwrap();
        assert!(matches!(
            resp.into_data_field("role_id"),
            Err(VaultError::MalformedResponseError(_))
        ));
    }

    #[test]
    fn non_json_body_is_a_malformed_response() {
        assert!(matches!(
            VaultResponse::parse("<html>502 Bad Gateway</html>"),
            Err(VaultError::MalformedResponseError(_))
        ));
    }
}
