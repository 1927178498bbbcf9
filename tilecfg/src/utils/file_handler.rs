use crate::Config;
use anyhow::{self, Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const CONFIG_PREFIX: &str = "tilecfg";
const RON_FILE: &str = "config.ron";
const TOML_FILE: &str = "config.toml";

const COMMENT_HEADER: &str = r"// Window manager configuration.
// Any top-level field may be left out; it then keeps its built-in value.
// Check the file with `tilecfg-check` after editing.

";

/// The file the configuration would be read from, and whether it exists yet.
/// A RON file wins over a TOML one.
///
/// # Errors
///
/// Fails when the XDG base directories cannot be determined or created.
pub fn config_path() -> Result<(PathBuf, bool)> {
    let dirs = BaseDirectories::with_prefix(CONFIG_PREFIX)?;
    let ron_file = dirs.place_config_file(RON_FILE)?;
    let toml_file = dirs.place_config_file(TOML_FILE)?;
    if ron_file.exists() {
        Ok((ron_file, true))
    } else if toml_file.exists() {
        Ok((toml_file, true))
    } else {
        Ok((ron_file, false))
    }
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.ron, or if the file cannot be read or parsed.
/// When no file exists yet, the assembled configuration is written to config.ron,
/// which can fail as well.
pub(crate) fn load_config_file() -> Result<Config> {
    tracing::debug!("Loading config file");

    let (path, exists) = config_path()?;
    if exists {
        tracing::debug!("Config file '{}' found.", path.to_string_lossy());
        if is_toml(&path) {
            tracing::info!("You are using TOML as config language. Consider moving to RON with `tilecfg-config --migrate`.");
        }
        parse_file(&path)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&path, &config)?;
        Ok(config)
    }
}

/// Loads configuration from either the specified file (preferred) or the default location.
///
/// `~` and environment variables in `fspath` are expanded.
///
/// # Errors
///
/// Errors if the file cannot be read or parsed. If a path is specified and does not
/// exist, that is an error too.
pub fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_filename = if let Some(fspath) = fspath {
        let expanded = shellexpand::full(fspath)?;
        println!("\x1b[1;35mNote: Using file {expanded} \x1b[0m");
        PathBuf::from(expanded.as_ref())
    } else {
        let (path, exists) = config_path()?;
        if !exists {
            let config = Config::default();
            write_to_file(&path, &config)?;
            return Ok(config);
        }
        if is_toml(&path) {
            println!(
                "\x1b[1;93mWARN: TOML is only read for compatibility.
      Please consider migrating to RON with `tilecfg-config --migrate`.\x1b[0m"
            );
        }
        path
    };

    if verbose {
        dbg!(&config_filename);
    }
    parse_file(&config_filename)
}

/// Reads a RON file, or a TOML one when the extension says so.
///
/// # Errors
///
/// Fails when the file cannot be read or is not a valid configuration.
pub fn parse_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read {}", path.to_string_lossy()))?;
    let config = if is_toml(path) {
        toml::from_str(&contents)?
    } else {
        let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        ron.from_str(&contents)?
    };
    Ok(config)
}

fn is_toml(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("toml"))
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<(), anyhow::Error> {
    let ron = to_ron(config)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}

/// # Errors
///
/// Fails only if the configuration cannot be represented in RON.
pub fn to_ron(config: &Config) -> Result<String> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(4)
        .extensions(Extensions::IMPLICIT_SOME);
    Ok(to_string_pretty(config, ron_pretty_conf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn written_file_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        let config = Config::assemble("foot");
        write_to_file(&path, &config).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("// Window manager configuration."));
        assert_eq!(parse_file(&path).unwrap(), config);
    }

    #[test]
    fn explicit_path_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mine.ron");
        fs::write(&path, "(wmname: \"tilewm\", log_level: \"warn\")").unwrap();
        let config = check_config_file(path.to_str(), false).unwrap();
        assert_eq!(config.wmname, "tilewm");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.ron");
        assert!(check_config_file(path.to_str(), false).is_err());
    }

    #[test]
    fn toml_is_read_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "wmname = \"legacy\"\n").unwrap();
        assert_eq!(parse_file(&path).unwrap().wmname, "legacy");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(keys: 12)").unwrap();
        assert!(parse_file(&path).is_err());
    }
}
