use super::types::NamedColor;

/// Hex code returned when a name matches nothing in the table.
pub const DEFAULT_HEX: &str = "#6B7280";

/// Display color table. Order matters: substring lookups return the first
/// match in declared order, so more specific names ("Navy Blue") sit ahead of
/// other entries that share a word with them.
pub const COLOR_TABLE: &[(&str, &str)] = &[
    // Reds
    ("Pure Red", "#FF0000"),
    ("Bright Red", "#DC143C"),
    ("Deep Red", "#8B0000"),
    ("Hot Pink", "#FF1493"),
    ("Magenta", "#FF00FF"),
    ("Coral", "#FF7F50"),
    ("Brick Red", "#CB4154"),
    ("Burgundy", "#800020"),
    // Blues
    ("Navy Blue", "#000080"),
    ("Royal Navy", "#002366"),
    ("Sky Blue", "#87CEEB"),
    ("Powder Blue", "#B0E0E6"),
    ("Icy Blue", "#B6D7FF"),
    ("Electric Blue", "#7DF9FF"),
    ("Deep Teal", "#003366"),
    // Greens
    ("Emerald Green", "#50C878"),
    ("Forest Green", "#228B22"),
    ("Mint Green", "#98FB98"),
    ("Sage Green", "#9CAF88"),
    ("Olive Green", "#808000"),
    // Yellows/Golds
    ("Golden Yellow", "#FFD700"),
    ("Mustard Yellow", "#FFDB58"),
    ("Bright Yellow", "#FFFF00"),
    // Oranges
    ("Orange", "#FFA500"),
    ("Rust Orange", "#B7410E"),
    ("Burnt Sienna", "#E97451"),
    ("Peach", "#FFCBA4"),
    ("Burnt Orange", "#CC5500"),
    // Purples
    ("Deep Purple", "#663399"),
    ("Lavender", "#E6E6FA"),
    ("Mauve", "#E0B0FF"),
    ("Cool Purple", "#9966CC"),
    // Neutrals
    ("Pure White", "#FFFFFF"),
    ("Pearl White", "#F8F6F0"),
    ("True Black", "#000000"),
    ("Silver Gray", "#C0C0C0"),
    ("Soft Gray", "#D3D3D3"),
    ("Cool Gray", "#808080"),
    ("Cream", "#FFFDD0"),
    ("Beige", "#F5F5DC"),
    ("Camel", "#C19A6B"),
    // Browns
    ("Chocolate Brown", "#7B3F00"),
    ("Warm Brown", "#964B00"),
    ("Golden Brown", "#996515"),
    ("Terracotta", "#E2725B"),
    // Pinks
    ("Soft Pink", "#FFB6C1"),
    ("Rose Pink", "#FF66CC"),
    ("Dusty Rose", "#DCAE96"),
    ("Cool Pink", "#FF69B4"),
];

/// Resolve a color or metal name to its display hex code.
///
/// Exact match first, then a case-insensitive substring pass in table order
/// (entry name contains the input, or the input contains the entry name).
/// Names that match nothing resolve to [`DEFAULT_HEX`]; this never fails.
pub fn resolve_hex(name: &str) -> &'static str {
    for (key, hex) in COLOR_TABLE {
        if *key == name {
            return hex;
        }
    }

    let lowered = name.to_lowercase();
    for (key, hex) in COLOR_TABLE {
        let key_lowered = key.to_lowercase();
        if key_lowered.contains(&lowered) || lowered.contains(&key_lowered) {
            return hex;
        }
    }

    DEFAULT_HEX
}

/// Pair each name in a list with its resolved hex code.
pub fn with_hex(names: &[String]) -> Vec<NamedColor> {
    names
        .iter()
        .map(|name| NamedColor {
            name: name.clone(),
            hex: resolve_hex(name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_return_their_stored_hex() {
        for (name, hex) in COLOR_TABLE {
            assert_eq!(resolve_hex(name), *hex, "exact lookup for {name}");
        }
    }

    #[test]
    fn substring_lookup_is_case_insensitive_both_directions() {
        // Input contained in an entry name.
        assert_eq!(resolve_hex("navy"), "#000080");
        assert_eq!(resolve_hex("NAVY"), "#000080");
        // Entry name contained in the input.
        assert_eq!(resolve_hex("Bright Orange"), "#FFA500");
        assert_eq!(resolve_hex("deep navy blue shade"), "#000080");
    }

    #[test]
    fn first_declared_entry_wins_on_ties() {
        // "blue" is a substring of several entries; Navy Blue is declared
        // first among them.
        assert_eq!(resolve_hex("blue"), "#000080");
        // "green" hits Emerald Green first.
        assert_eq!(resolve_hex("green"), "#50C878");
    }

    #[test]
    fn unknown_names_fall_back_to_default_gray() {
        assert_eq!(resolve_hex("Chartreuse"), DEFAULT_HEX);
        assert_eq!(resolve_hex("Neon Colors"), DEFAULT_HEX);
        assert_eq!(resolve_hex("Taupe"), DEFAULT_HEX);
    }

    #[test]
    fn metal_names_from_jewelry_lists_resolve_without_error() {
        // Not all metals are in the table; resolution must still be total.
        for metal in ["Yellow Gold", "Sterling Silver", "Platinum", "Copper"] {
            let hex = resolve_hex(metal);
            assert!(hex.starts_with('#'));
        }
    }

    #[test]
    fn with_hex_preserves_order_and_names() {
        let names = vec!["Navy Blue".to_string(), "Chartreuse".to_string()];
        let resolved = with_hex(&names);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name, "Navy Blue");
        assert_eq!(resolved[0].hex, "#000080");
        assert_eq!(resolved[1].hex, DEFAULT_HEX);
    }
}
