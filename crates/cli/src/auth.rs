//! Auth-token discovery
//!
//! Precedence: `--token` flag, then `--authtokenfile`, then the
//! `X_AUTH_TOKEN` and `AUTH_TOKEN` environment variables. There is no
//! interactive fallback; a missing token is fatal before any network call.

use std::path::Path;

use anyhow::{Context, Result};
use capgraph_lib::output::print_info;

use crate::Cli;

const TOKEN_ENV_VARS: [&str; 2] = ["X_AUTH_TOKEN", "AUTH_TOKEN"];

pub fn resolve_token(cli: &Cli) -> Result<String> {
    if let Some(token) = &cli.token {
        print_info("Authenticating with token from CLI flag");
        return Ok(token.clone());
    }
    if let Some(path) = &cli.authtokenfile {
        print_info(&format!("Authenticating with token from {}", path.display()));
        return read_token_file(path);
    }
    for var in TOKEN_ENV_VARS {
        if let Ok(token) = std::env::var(var) {
            if !token.trim().is_empty() {
                print_info(&format!(
                    "Authenticating with token from environment variable {var}"
                ));
                return Ok(token.trim().to_string());
            }
        }
    }
    anyhow::bail!("no auth token found; pass --token, --authtokenfile, or set X_AUTH_TOKEN")
}

/// Read and trim a token file; surrounding whitespace never counts.
fn read_token_file(path: &Path) -> Result<String> {
    let token = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file {}", path.display()))?;
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("token file {} is empty", path.display());
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn trims_whitespace_around_the_token() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  secret-token  ").unwrap();
        assert_eq!(read_token_file(file.path()).unwrap(), "secret-token");
    }

    #[test]
    fn empty_token_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_token_file(file.path()).is_err());
    }

    #[test]
    fn missing_token_file_is_an_error() {
        assert!(read_token_file(Path::new("/definitely/not/here")).is_err());
    }
}
