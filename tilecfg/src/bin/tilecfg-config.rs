use anyhow::{Context, Result};
use clap::{arg, command};
use std::env;
use std::path::Path;
use std::process::Command;
use tilecfg::utils::file_handler::{config_path, parse_file, to_ron, write_to_file};
use tilecfg::Config;

fn main() -> Result<()> {
    let matches = command!("tilecfg config")
        .about("Edit the config with the default editor")
        .help_template(tilecfg::utils::get_help_template())
        .args(&[
            arg!(-n --new "Only generate a new config file"),
            arg!(-p --print "Print the effective configuration"),
            arg!(--json "With --print, output JSON instead of RON").requires("print"),
            arg!(--migrate "Write an existing config.toml out as config.ron"),
        ])
        .get_matches();

    if matches.get_flag("new") {
        generate_new_config()?;
    } else if matches.get_flag("print") {
        print_config(matches.get_flag("json"))?;
    } else if matches.get_flag("migrate") {
        migrate_toml()?;
    } else {
        run_editor()?;
    }

    Ok(())
}

fn current_config() -> Result<Config> {
    let (path, exists) = config_path()?;
    if exists {
        parse_file(&path)
    } else {
        Ok(Config::default())
    }
}

fn print_config(json: bool) -> Result<()> {
    let config = current_config()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", to_ron(&config)?);
    }
    Ok(())
}

fn migrate_toml() -> Result<()> {
    let (path, exists) = config_path()?;
    if !exists || path.extension().and_then(|e| e.to_str()) != Some("toml") {
        println!("\x1b[0;94m::\x1b[0m No config.toml to migrate.");
        return Ok(());
    }
    let config = parse_file(&path)?;
    let ron_path = path.with_extension("ron");
    write_to_file(&ron_path, &config)?;
    println!(
        "\x1b[0;92m    -> Written {}, the old file is kept for reference.\x1b[0m",
        ron_path.display()
    );
    Ok(())
}

//will not do anything if a config already exists and the user declines
fn generate_new_config() -> Result<()> {
    let (path, exists) = config_path()?;
    let path = path.with_extension("ron");

    if exists && Path::new(&path).exists() {
        println!(
            "\x1b[0;94m::\x1b[0m A config file already exists, do you want to override it? [y/N]"
        );
        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .context("Failed to read line")?;
        if !(line.contains('y') || line.contains('Y')) {
            return Ok(());
        }
    }
    write_to_file(&path, &Config::default())
}

fn run_editor() -> Result<()> {
    let editor = env::var("EDITOR").context("$EDITOR is not set")?;
    let (config_path, exists) = config_path()?;
    if !exists {
        write_to_file(&config_path, &Config::default())?;
    }

    let status = Command::new(&editor).arg(&config_path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow::Error::msg(format!("Failed to run {}", &editor)))
    }
}
