use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub y_size: usize,
    pub x_size: usize,
}

const PRESETS_DATA: &[Preset] = &[
    Preset {
        name: "pocket",
        y_size: 2,
        x_size: 2,
    },
    Preset {
        name: "cube",
        y_size: 3,
        x_size: 3,
    },
    Preset {
        name: "standard",
        y_size: 10,
        x_size: 10,
    },
    Preset {
        name: "wide",
        y_size: 6,
        x_size: 16,
    },
    Preset {
        name: "vault",
        y_size: 24,
        x_size: 24,
    },
];

pub fn all_presets() -> &'static [Preset] {
    PRESETS_DATA
}

// Build a name -> preset map once for O(1) lookup.
static PRESET_MAP: Lazy<HashMap<&'static str, &'static Preset>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for p in PRESETS_DATA.iter() {
        m.insert(p.name, p);
    }
    m
});

pub fn get_preset(name: &str) -> Option<&'static Preset> {
    PRESET_MAP.get(name).copied()
}
