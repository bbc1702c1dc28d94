// presets.rs - Well-known rule strings offered in the preset picker

use crate::error::Result;
use crate::rules::RuleTable;

pub struct Preset {
    pub name: &'static str,
    pub rules: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Classic",
        rules: "RL",
    },
    Preset {
        name: "Chaotic",
        rules: "RLR",
    },
    Preset {
        name: "Symmetric",
        rules: "LLRR",
    },
    Preset {
        name: "Filled square",
        rules: "LRRRRRLLR",
    },
    Preset {
        name: "Convoluted highway",
        rules: "LLRRRLRLRLLR",
    },
    Preset {
        name: "Filled triangle",
        rules: "RRLLLRLLLRRR",
    },
];

impl Preset {
    pub fn rule_table(&self) -> Result<RuleTable> {
        RuleTable::parse(self.rules)
    }
}

/// Looks a preset up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_is_valid() {
        for preset in PRESETS {
            let table = preset.rule_table().unwrap();
            assert_eq!(table.to_string(), preset.rules, "{}", preset.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("classic").map(|p| p.rules), Some("RL"));
        assert!(find("Gosper Glider Gun").is_none());
    }
}
