use anyhow::{bail, Result};
use clap::{arg, command};
use tilecfg::utils::file_handler::{check_config_file, config_path};
use tilecfg::{terminal, Config, Severity};

fn main() -> Result<()> {
    let matches = command!("tilecfg check")
        .about("Checks the configuration file")
        .help_template(tilecfg::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tilecfg version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tilecfg git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    if let Err(err) = check_enabled_features() {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m");
    }

    if verbose && config_file.is_none() {
        let (path, exists) = config_path()?;
        println!(
            "\x1b[0;94m::\x1b[0m Config file: {} ({})",
            path.display(),
            if exists { "found" } else { "will be created" }
        );
    }

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
            std::process::exit(1);
        }
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
    let errors = report(&config);

    println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
    check_terminal(verbose);

    if errors > 0 {
        println!("\x1b[1;91m    -> {errors} error(s), the window manager will refuse this configuration\x1b[0m");
        std::process::exit(1);
    }
    Ok(())
}

/// Prints every issue and returns how many are errors.
fn report(config: &Config) -> usize {
    let issues = config.check();
    if issues.is_empty() {
        println!("\x1b[0;92m    -> Configuration OK \x1b[0m");
        return 0;
    }
    let mut errors = 0;
    for issue in &issues {
        match issue.severity {
            Severity::Error => {
                errors += 1;
                println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {} \x1b[0m", issue.message);
            }
            Severity::Warning => {
                println!("\x1b[1;93mWARN: {}\x1b[0m", issue.message);
            }
        }
    }
    errors
}

fn check_terminal(verbose: bool) {
    let terminal = terminal::guess_terminal();
    if verbose {
        println!(":: PATH: {}", std::env::var("PATH").unwrap_or_default());
    }
    if terminal::is_program_in_path(&terminal) {
        println!("\x1b[0;92m    -> Terminal `{terminal}` found \x1b[0m");
    } else {
        println!("\x1b[1;93mWARN: Terminal `{terminal}` is not in PATH, set $TERMINAL or install one.\x1b[0m");
    }
}

// this function is called only when specific features are enabled.
#[allow(dead_code)]
fn check_feature<T, E, F>(name: &str, predicate: F) -> Result<()>
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Debug,
{
    match predicate() {
        Ok(_) => {
            println!("\x1b[0;92m    -> {name} OK\x1b[0m");
            Ok(())
        }
        Err(err) => bail!("Check for feature {} failed: {:?}", name, err),
    }
}

fn check_enabled_features() -> Result<()> {
    if env!("TILECFG_FEATURES").is_empty() {
        println!("\x1b[0;94m::\x1b[0m Built with no enabled features.");
        return Ok(());
    }

    println!(
        "\x1b[0;94m::\x1b[0m Enabled features:{}",
        env!("TILECFG_FEATURES")
    );

    println!("\x1b[0;94m::\x1b[0m Checking feature dependencies . . .");

    #[cfg(feature = "journald-log")]
    check_feature("journald-log", tracing_journald::layer)?;
    #[cfg(feature = "file-log")]
    check_feature("file-log", || {
        xdg::BaseDirectories::with_prefix("tilecfg").map(|dirs| dirs.get_cache_home())
    })?;

    Ok(())
}
