use tilecfg_core::{
    config::{Group, KeyBinding, Modifier},
    Command, WindowCommand,
};

/// Two bindings per group, in group order: `modkey+<name>` shows the group and
/// `modkey+shift+<name>` moves the focused window there and follows it.
pub fn group_bindings(modkey: Modifier, groups: &[Group]) -> Vec<KeyBinding> {
    groups
        .iter()
        .flat_map(|group| {
            [
                KeyBinding::new(
                    [modkey],
                    group.name.clone(),
                    Command::GroupToScreen(group.name.clone()),
                )
                .desc(format!("Switch to group {}", group.name)),
                KeyBinding::new(
                    [modkey, Modifier::Shift],
                    group.name.clone(),
                    Command::Window(WindowCommand::ToGroup {
                        group: group.name.clone(),
                        switch_group: true,
                    }),
                )
                .desc(format!(
                    "Switch to & move focused window to group {}",
                    group.name
                )),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use tilecfg_core::config::{groups_from_chars, ModifierSet};

    #[test]
    fn two_bindings_per_group_in_order() {
        let groups = groups_from_chars("312");
        let bindings = group_bindings(Modifier::Mod4, &groups);
        let keys: Vec<&str> = bindings.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["3", "3", "1", "1", "2", "2"]);
        assert_eq!(
            bindings[0].commands[0].command,
            Command::GroupToScreen("3".into())
        );
        assert_eq!(
            bindings[1].modifiers,
            ModifierSet::from([Modifier::Mod4, Modifier::Shift])
        );
        assert_eq!(
            bindings[1].commands[0].command.group(),
            Some("3"),
        );
    }

    #[test]
    fn no_groups_no_bindings() {
        assert!(group_bindings(Modifier::Mod4, &[]).is_empty());
    }

    #[test]
    fn assembled_config_binds_groups_one_to_nine() {
        let config = Config::assemble("xterm");
        let names: Vec<&str> = config.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);

        let group_keys: Vec<_> = config
            .keys
            .iter()
            .filter_map(|k| k.commands[0].command.group().map(|g| (g, k)))
            .collect();
        assert_eq!(group_keys.len(), 18);
        for name in &names {
            let for_group: Vec<_> = group_keys.iter().filter(|(g, _)| g == name).collect();
            assert_eq!(for_group.len(), 2, "group {name}");
            assert!(for_group.iter().all(|(_, k)| k.key == *name));
        }
        assert!(group_keys.iter().all(|(g, _)| names.contains(g)));
    }
}
