use crate::VaultError;
use std::env;
use std::path::PathBuf;
use url::Url;

pub const VAULT_ADDR: &str = "VAULT_ADDR";
pub const VAULT_TOKEN: &str = "VAULT_TOKEN";
pub const VAULT_ROLE: &str = "VAULT_ROLE";
pub const VAULT_AUTH_PATH: &str = "VAULT_AUTH_PATH";
pub const ID_STORE: &str = "ID_STORE";

/// Configuration for one bootstrap run, read once from the environment and
/// immutable afterwards.
#[derive(Debug)]
pub struct Config {
    /// Base URL of the Vault server, e.g. `https://vault.example:8200`.
    pub address: String,
    /// Token sent as the `X-Vault-Token` header on every request.
    pub token: String,
    /// Name of the AppRole role to bootstrap.
    pub role: String,
    /// Mount path segment of the AppRole auth method.
    pub auth_path: String,
    /// Directory both identifier files are written into.
    pub id_store: PathBuf,
}

impl Config {
    /// Reads all five required environment variables. Missing variables are
    /// reported together in a single error rather than one at a time.
    pub fn from_env() -> Result<Self, VaultError> {
        let mut missing = Vec::new();
        let address = lookup(VAULT_ADDR, &mut missing);
        let token = lookup(VAULT_TOKEN, &mut missing);
        let role = lookup(VAULT_ROLE, &mut missing);
        let auth_path = lookup(VAULT_AUTH_PATH, &mut missing);
        let id_store = lookup(ID_STORE, &mut missing);
        if !missing.is_empty() {
            return Err(VaultError::ConfigurationError(format!(
                "missing environment variables: {}",
                missing.join(", ")
            )));
        }
        Url::parse(&address).map_err(|e| {
            VaultError::ConfigurationError(format!("{} is not a valid URL: {}", VAULT_ADDR, e))
        })?;
        Ok(Self {
            address,
            token,
            role,
            auth_path,
            id_store: PathBuf::from(id_store),
        })
    }
}

fn lookup(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(value) => value,
        Err(_) => {
            missing.push(name);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so everything touching them
    // lives in one test to keep it race-free under the parallel test runner.
    #[test]
    fn from_env_reads_all_variables_and_aggregates_missing_ones() {
        env::remove_var(VAULT_ADDR);
        env::remove_var(VAULT_TOKEN);
        env::remove_var(VAULT_ROLE);
        env::remove_var(VAULT_AUTH_PATH);
        env::remove_var(ID_STORE);

        match Config::from_env() {
            Err(VaultError::ConfigurationError(msg)) => {
                assert!(msg.contains(VAULT_ADDR), "unexpected message: {}", msg);
                assert!(msg.contains(VAULT_TOKEN), "unexpected message: {}", msg);
                assert!(msg.contains(ID_STORE), "unexpected message: {}", msg);
            }
            other => panic!("expected ConfigurationError, got {:?}", other),
        }

        env::set_var(VAULT_ADDR, "https://vault.example:8200");
        env::set_var(VAULT_TOKEN, "s.token");
        env::set_var(VAULT_ROLE, "myrole");
        env::set_var(VAULT_AUTH_PATH, "approle");
        env::set_var(ID_STORE, "/tmp/out");

        let config = Config::from_env().unwrap();
        assert_eq!(config.address, "https://vault.example:8200");
        assert_eq!(config.role, "myrole");
        assert_eq!(config.auth_path, "approle");
        assert_eq!(config.id_store, PathBuf::from("/tmp/out"));

        env::set_var(VAULT_ADDR, "not a url");
        assert!(matches!(
            Config::from_env(),
            Err(VaultError::ConfigurationError(_))
        ));
    }
}
