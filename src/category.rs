/// Event taxonomy used to pick the title glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    RaidHour,
    RaidDay,
    MegaRaid,
    RaidBattle,
    MaxBattle,
    SpotlightHour,
    CommunityDay,
    BattleLeague,
    Festival,
    Halloween,
    GoPass,
    WildArea,
    Season,
    Trade,
    Showcase,
    Research,
    General,
}

/// Ordered rule table: the first keyword set that matches wins. Order is
/// load-bearing — "Mega Raid Battles" must hit MegaRaid before the generic
/// RaidBattle rule sees "raid battles".
const RULES: &[(&[&str], EventCategory)] = &[
    (&["raid hour"], EventCategory::RaidHour),
    (&["raid day", "raid weekend"], EventCategory::RaidDay),
    (&["mega raid", "in mega raids"], EventCategory::MegaRaid),
    (
        &[
            "in 1-star", "in 2-star", "in 3-star", "in 4-star", "in 5-star", "in 6-star",
            "raid battles",
        ],
        EventCategory::RaidBattle,
    ),
    (
        &["max battle", "max monday", "dynamax", "gigantamax"],
        EventCategory::MaxBattle,
    ),
    (&["spotlight hour"], EventCategory::SpotlightHour),
    (&["community day"], EventCategory::CommunityDay),
    (&["go battle", "battle league", "pvp"], EventCategory::BattleLeague),
    (&["festival", "celebration"], EventCategory::Festival),
    (&["halloween"], EventCategory::Halloween),
    (&["go pass"], EventCategory::GoPass),
    (&["wild area", "safari"], EventCategory::WildArea),
    (&["season", "tales of transformation"], EventCategory::Season),
    (&["trade"], EventCategory::Trade),
    (&["showcase"], EventCategory::Showcase),
    (&["research"], EventCategory::Research),
];

/// Classify a title by case-insensitive substring containment.
pub fn classify(title: &str) -> EventCategory {
    let lower = title.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, category)| *category)
        .unwrap_or(EventCategory::General)
}

impl EventCategory {
    /// Glyph prefixed to the event title in calendar summaries.
    pub fn glyph(self) -> &'static str {
        match self {
            EventCategory::RaidHour => "⏰",
            EventCategory::RaidDay => "🎯",
            EventCategory::MegaRaid => "💫",
            EventCategory::RaidBattle => "⚔️",
            EventCategory::MaxBattle => "⭐",
            EventCategory::SpotlightHour => "🔦",
            EventCategory::CommunityDay => "👥",
            EventCategory::BattleLeague => "🥊",
            EventCategory::Festival => "🎉",
            EventCategory::Halloween => "🎃",
            EventCategory::GoPass => "🎫",
            EventCategory::WildArea => "🗺️",
            EventCategory::Season => "🌍",
            EventCategory::Trade => "🤝",
            EventCategory::Showcase => "📸",
            EventCategory::Research => "🔍",
            EventCategory::General => "📅",
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mega_raid_wins_over_generic_raid() {
        assert_eq!(classify("Mega Raid Battles"), EventCategory::MegaRaid);
    }

    #[test]
    fn tiered_raid_battles() {
        assert_eq!(classify("5-Star Raid Battles"), EventCategory::RaidBattle);
        assert_eq!(classify("Zacian in 5-Star Raids"), EventCategory::RaidBattle);
    }

    #[test]
    fn raid_hour_before_raid_day() {
        assert_eq!(classify("Raid Hour: Mega Gengar"), EventCategory::RaidHour);
        assert_eq!(classify("Shadow Raid Weekend"), EventCategory::RaidDay);
    }

    #[test]
    fn max_battle_variants() {
        assert_eq!(classify("Max Monday"), EventCategory::MaxBattle);
        assert_eq!(classify("Gigantamax Charizard Max Battle Day"), EventCategory::MaxBattle);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("SPOTLIGHT HOUR"), EventCategory::SpotlightHour);
        assert_eq!(classify("community day classic"), EventCategory::CommunityDay);
    }

    #[test]
    fn battle_league() {
        assert_eq!(classify("GO Battle League: Great League"), EventCategory::BattleLeague);
    }

    #[test]
    fn season_keyword() {
        assert_eq!(classify("Tales of Transformation"), EventCategory::Season);
    }

    #[test]
    fn unmatched_title_is_general() {
        assert_eq!(classify("Mysterious Happening"), EventCategory::General);
        assert_eq!(classify(""), EventCategory::General);
    }

    #[test]
    fn glyph_mapping() {
        assert_eq!(EventCategory::RaidHour.glyph(), "⏰");
        assert_eq!(EventCategory::CommunityDay.glyph(), "👥");
        assert_eq!(EventCategory::General.glyph(), "📅");
    }
}
