pub mod project_root;
pub mod rev;
pub mod verify;

use std::path::{Path, PathBuf};

use anyhow::Result;
use assetrev::config::{Config, ConfigWarning};

/// Configuration resolved for one command.
pub(crate) struct LoadedConfig {
    pub config: Config,
    /// Directory relative `output.root` values are resolved against
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    /// Output root: the `--root` flag if given, else `output.root`
    pub fn output_root(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.base_dir.join(&self.config.output.root))
    }
}

/// Load `--config PATH` if given, else `assetrev.toml` in the project root,
/// then apply `ASSETREV_*` overrides and validate.
pub(crate) fn load_config(explicit: Option<&Path>, json: bool) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;

    let (config, warnings, base_dir, source) = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            let config = config.with_env_overrides();
            let base_dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => cwd,
            };
            (config, warnings, base_dir, path.to_path_buf())
        }
        None => {
            let project_root = project_root::discover_project_root(&cwd);
            let (config, warnings) = Config::load_or_default(&project_root)?;
            let source = project_root.join(assetrev::config::CONFIG_FILE_NAME);
            (config, warnings, project_root, source)
        }
    };

    if !json {
        print_config_warnings(&source, &warnings);
    }
    for w in &warnings {
        tracing::debug!(key = %w.key, file = %w.file.display(), "unknown config key");
    }

    config.validate()?;

    Ok(LoadedConfig { config, base_dir })
}

fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
