use anyhow::Result;
use vault_approle_init::{bootstrap, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    bootstrap::run(&config)?;
    Ok(())
}
