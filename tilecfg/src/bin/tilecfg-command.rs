use anyhow::{bail, Context, Result};
use clap::{arg, command};
use tilecfg::utils::spawner::SpawnHost;
use tilecfg_core::{config::ModifierSet, dispatch, find_binding, Backend};

fn main() -> Result<()> {
    let matches = get_command().get_matches();

    let config = tilecfg::load_with(|config| tilecfg::utils::log::init(&config.log_level))?;

    if matches.get_flag("list") {
        for key in &config.keys {
            println!("{:<32} {}", key.to_string(), key.desc.as_deref().unwrap_or(""));
        }
        return Ok(());
    }

    let (Some(mods), Some(key)) = (
        matches.get_one::<String>("MODS"),
        matches.get_one::<String>("KEY"),
    ) else {
        bail!("MODS and KEY are required unless --list is given");
    };
    let mods: ModifierSet = mods.parse()?;
    let binding = find_binding(&config.keys, &mods, key)
        .with_context(|| format!("Nothing is bound to {mods}+{key}"))?;

    let mut host = match matches.get_one::<String>("backend").map(String::as_str) {
        Some("x11") => SpawnHost::new(Some(Backend::X11)),
        Some("wayland") => SpawnHost::new(Some(Backend::Wayland)),
        _ => SpawnHost::detect(),
    };
    host.dry_run = matches.get_flag("dry-run");

    let outcome = dispatch(binding, &mut host);
    tracing::debug!("{binding}: {outcome:?}");
    if outcome.failed > 0 {
        bail!("{} of the commands bound to {binding} failed", outcome.failed);
    }
    Ok(())
}

fn get_command() -> clap::Command {
    command!("tilecfg command")
        .about("Runs the commands bound to a key combination")
        .help_template(tilecfg::utils::get_help_template())
        .args(&[
            arg!(-l --list "Print every binding with its description."),
            arg!(-n --"dry-run" "Print spawned command lines instead of running them."),
            arg!(-b --backend <BACKEND> "Backend the guards are evaluated against.")
                .value_parser(["x11", "wayland"]),
            arg!([MODS] "Modifiers joined by '+', e.g. mod4+shift, or 'none'."),
            arg!([KEY] "Key name, e.g. Return or XF86AudioMute."),
        ])
}
