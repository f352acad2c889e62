use crate::VaultError;

const TOKEN_HEADER: &str = "X-Vault-Token";

/// Client for a single Vault server - fetching a role-id, generating a
/// secret-id, etc.
///
/// # Examples
///
/// ```
/// use vault_approle_init::VaultClient;
/// let client = VaultClient::new(&"https://vault.example:8200", &"{token}");
/// ```
#[derive(Debug)]
pub struct VaultClient<'a> {
    pub(crate) address: &'a str,
    pub(crate) token: &'a str,
}

impl<'a> VaultClient<'a> {
    /// Creates a new `VaultClient` for the server at `address`, authenticating
    /// every request with `token`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_approle_init::VaultClient;
    /// let client = VaultClient::new(&"https://vault.example:8200", &"s.klmEXAMPLE");
    /// ```
    pub fn new(address: &'a str, token: &'a str) -> Self {
        Self { address, token }
    }

    /// Target URL for an AppRole role endpoint, e.g.
    /// `{address}/v1/auth/{auth_path}/role/{role}/role-id`.
    pub(crate) fn role_url(&self, auth_path: &str, role: &str, leaf: &str) -> String {
        format!(
            "{}/v1/auth/{}/role/{}/{}",
            self.address.trim_end_matches('/'),
            auth_path,
            role,
            leaf
        )
    }

    pub(crate) fn get_authed(&self, uri: &str) -> Result<String, VaultError> {
        let resp = reqwest::blocking::Client::new()
            .get(uri)
            .header(TOKEN_HEADER, self.token)
            .send()
            .map_err(VaultError::TransportError)?;
        let body = resp.text().map_err(VaultError::TransportError)?;
        Ok(body)
    }

    pub(crate) fn post_authed(&self, uri: &str) -> Result<String, VaultError> {
        let resp = reqwest::blocking::Client::new()
            .post(uri)
            .header(TOKEN_HEADER, self.token)
            .send()
            .map_err(VaultError::TransportError)?;
        let body = resp.text().map_err(VaultError::TransportError)?;
        Ok(body)
    }
}
