use ferrous_ipset_domain::{CliOverrides, Config};
use std::path::{Path, PathBuf};

pub struct LoadedConfig {
    pub config: Config,
    /// Directory relative domain-list paths are resolved against.
    pub base_dir: Option<PathBuf>,
}

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<LoadedConfig> {
    let config = Config::load(path, overrides)?;
    config.validate()?;

    let source = path.map(str::to_string).or_else(Config::get_config_path);
    let base_dir = source
        .as_deref()
        .and_then(|p| Path::new(p).parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf);

    Ok(LoadedConfig { config, base_dir })
}
