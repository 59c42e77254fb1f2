//! Formatting rules shared by the list and detail views.

/// Upper bound of a base stat, used to scale stat bars.
pub const MAX_BASE_STAT: u32 = 255;

/// Colour for categories without an assigned one.
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// Background colour of a category badge.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "normal" => "#9ca3af",
        "fire" => "#ef4444",
        "water" => "#3b82f6",
        "electric" => "#facc15",
        "grass" => "#22c55e",
        "ice" => "#bfdbfe",
        "fighting" => "#b91c1c",
        "poison" => "#a855f7",
        "ground" => "#ca8a04",
        "flying" => "#818cf8",
        "psychic" => "#ec4899",
        "bug" => "#4ade80",
        "rock" => "#854d0e",
        "ghost" => "#7e22ce",
        "dragon" => "#4338ca",
        "dark" => "#1f2937",
        "steel" => "#6b7280",
        "fairy" => "#f9a8d4",
        _ => FALLBACK_COLOR,
    }
}

/// Turn an API slug into display text (`special-attack` -> `special attack`).
pub fn humanize(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Format `value / 10` the way the site shows heights and weights:
/// one decimal place, dropped when it is zero (`69` -> `6.9`, `10` -> `1`).
pub fn decimal_tenths(value: u32) -> String {
    let whole = value / 10;
    let tenth = value % 10;
    if tenth == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{tenth}")
    }
}

/// Width of a stat bar in percent of [`MAX_BASE_STAT`], rounded, at most 100.
pub const fn stat_percent(value: u32) -> u32 {
    let clamped = if value > MAX_BASE_STAT { MAX_BASE_STAT } else { value };
    clamped.saturating_mul(100).saturating_add(MAX_BASE_STAT / 2) / MAX_BASE_STAT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_colors() {
        assert_eq!(category_color("fire"), "#ef4444");
        assert_eq!(category_color("fairy"), "#f9a8d4");
        assert_eq!(category_color("shadow"), FALLBACK_COLOR);
    }

    #[test]
    fn humanize_replaces_every_hyphen() {
        assert_eq!(humanize("special-attack"), "special attack");
        assert_eq!(humanize("double-edge-slam"), "double edge slam");
        assert_eq!(humanize("tackle"), "tackle");
    }

    #[test]
    fn tenths_drop_trailing_zero() {
        assert_eq!(decimal_tenths(69), "6.9");
        assert_eq!(decimal_tenths(7), "0.7");
        assert_eq!(decimal_tenths(10), "1");
        assert_eq!(decimal_tenths(0), "0");
        assert_eq!(decimal_tenths(9999), "999.9");
    }

    #[test]
    fn stat_percent_scales_to_255() {
        assert_eq!(stat_percent(0), 0);
        assert_eq!(stat_percent(255), 100);
        assert_eq!(stat_percent(45), 18);
        assert_eq!(stat_percent(300), 100);
        assert_eq!(stat_percent(u32::MAX), 100);
    }
}
