use crate::token::model::TokenInfo;
use eyre::{Result, WrapErr};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON file holding the token metadata list.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry. A missing file is an empty list; unreadable or
    /// malformed content is an error.
    pub fn load(&self) -> Result<Vec<TokenInfo>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("read data file {}", self.path.display()));
            }
        };

        serde_json::from_slice(&data)
            .wrap_err_with(|| format!("unmarshal json {}", self.path.display()))
    }

    /// Overwrites the file with `tokens`.
    pub fn save(&self, tokens: &[TokenInfo]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("create directory {}", dir.display()))?;
        }

        let data = serde_json::to_vec_pretty(tokens).wrap_err("marshal json")?;
        fs::write(&self.path, data).wrap_err_with(|| format!("write file {}", self.path.display()))
    }
}
