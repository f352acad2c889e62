//! The two-step bootstrap routine: fetch and persist the role-id, then fetch
//! and persist a fresh secret-id. The secret-id request is only attempted
//! after the role-id has been written; a failure in either step aborts the
//! run. The two files are not written transactionally, so a secret-id failure
//! leaves the already-written role-id file on disk.

use crate::Config;
use crate::VaultClient;
use crate::VaultError;
use std::fs;
use std::path::Path;

const ROLE_ID_FILE: &str = "role-id";
const SECRET_ID_FILE: &str = "initial-secret-id";

/// Runs the bootstrap against the configured Vault server.
pub fn run(config: &Config) -> Result<(), VaultError> {
    let client = VaultClient::new(&config.address, &config.token);

    let role_id = client.fetch_role_id(&config.auth_path, &config.role)?;
    write_id(&config.id_store.join(ROLE_ID_FILE), "role-id", &role_id)?;

    let secret_id = client.fetch_secret_id(&config.auth_path, &config.role)?;
    write_id(
        &config.id_store.join(SECRET_ID_FILE),
        "secret-id",
        &secret_id,
    )?;

    Ok(())
}

// Whole-file overwrite, raw value, no trailing newline.
fn write_id(path: &Path, label: &str, value: &str) -> Result<(), VaultError> {
    println!("Writing {} {} to {}", label, value, path.display());
    fs::write(path, value)
        .map_err(|e| VaultError::FilesystemError(path.display().to_string(), e))
}
