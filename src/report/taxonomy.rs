//! The fixed vocabularies a reporter picks from.
//!
//! Each vocabulary is ordered; its numeric code is the 1-based position and is
//! what the user types to select it.

use serde::Serialize;

use crate::base::prompts;

/// Why the message is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    Spam,
    OffensiveContent,
    TargetedMisinformation,
    ImminentDanger,
    SexualContent,
    Harassment,
}

/// Which group targeted misinformation is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetGroup {
    Religious,
    Political,
    EthnicRacial,
    Other,
}

/// What the reporter would like done about the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestedAction {
    BlockUser,
    FilterSimilar,
    Both,
    None,
}

/// Shared behavior of the enumerated vocabularies.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option, in menu order.
    const ALL: &'static [Self];

    /// The text shown after the code in a menu line.
    fn menu_text(&self) -> String;

    /// The code the user types for this option.
    fn code(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).map(|i| i + 1).unwrap_or_default()
    }

    /// Parses an exact code such as `"3"`; anything else is `None`.
    fn from_code(input: &str) -> Option<Self> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) || input.starts_with('0') {
            return None;
        }

        let index: usize = input.parse().ok()?;

        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    /// Renders the option lines plus the cancel line.
    fn menu_lines() -> String {
        let mut lines = Self::ALL.iter().map(|c| format!("Enter `{}` for{}", c.code(), c.menu_text())).collect::<Vec<_>>();

        lines.push(prompts::CANCEL_OPTION.to_string());

        lines.join("\n")
    }
}

impl Reason {
    pub fn label(&self) -> &'static str {
        match self {
            Reason::Spam => "Spam",
            Reason::OffensiveContent => "Offensive Content",
            Reason::TargetedMisinformation => "Targeted Misinformation",
            Reason::ImminentDanger => "Imminent Danger",
            Reason::SexualContent => "Sexual Content",
            Reason::Harassment => "Harassment",
        }
    }

    pub fn definition(&self) -> &'static str {
        match self {
            Reason::Spam => "Repeated, unwanted and/or unsolicited actions, whether automated or manual, that negatively effect platform communities",
            Reason::OffensiveContent => "Material that can be considered vulgar, obscene, or offensive",
            Reason::TargetedMisinformation => "Content posted by a political actor containing misleading information about a domestic minority group",
            Reason::ImminentDanger => "Content that places an individual at serious risk of death or serious physical harm",
            Reason::SexualContent => "Content depicting sexual behavior",
            Reason::Harassment => "Content that aggressively intimidates or pressures someone",
        }
    }

    /// Only targeted misinformation asks which group is targeted.
    pub fn needs_group(&self) -> bool {
        matches!(self, Reason::TargetedMisinformation)
    }
}

impl Choice for Reason {
    const ALL: &'static [Self] = &[
        Reason::Spam,
        Reason::OffensiveContent,
        Reason::TargetedMisinformation,
        Reason::ImminentDanger,
        Reason::SexualContent,
        Reason::Harassment,
    ];

    fn menu_text(&self) -> String {
        format!(" {}: {}", self.label(), self.definition())
    }
}

impl TargetGroup {
    pub fn label(&self) -> &'static str {
        match self {
            TargetGroup::Religious => "Religious Group",
            TargetGroup::Political => "Political Group",
            TargetGroup::EthnicRacial => "Ethnic/Racial Group",
            TargetGroup::Other => "Other",
        }
    }
}

impl Choice for TargetGroup {
    const ALL: &'static [Self] = &[TargetGroup::Religious, TargetGroup::Political, TargetGroup::EthnicRacial, TargetGroup::Other];

    fn menu_text(&self) -> String {
        format!(": {}", self.label())
    }
}

impl RequestedAction {
    pub fn label(&self) -> &'static str {
        match self {
            RequestedAction::BlockUser => "Block this user",
            RequestedAction::FilterSimilar => "Filter out content similar to this post",
            RequestedAction::Both => "Both of the above",
            RequestedAction::None => "None of the above",
        }
    }
}

impl Choice for RequestedAction {
    const ALL: &'static [Self] = &[RequestedAction::BlockUser, RequestedAction::FilterSimilar, RequestedAction::Both, RequestedAction::None];

    fn menu_text(&self) -> String {
        format!(": {}", self.label())
    }
}

/// The reason menu shown once the message is found.
pub fn reason_menu() -> String {
    format!("{}\n{}", prompts::REASON_MENU_HEADER, Reason::menu_lines())
}

/// The targeted-group menu.
pub fn group_menu() -> String {
    format!("{}\n{}", prompts::GROUP_MENU_HEADER, TargetGroup::menu_lines())
}

/// The requested-action menu.
pub fn action_menu() -> String {
    format!("{}\n{}", prompts::ACTION_MENU_HEADER, RequestedAction::menu_lines())
}

/// Any vocabulary's options again, after an invalid selection.
pub fn correction_menu<C: Choice>() -> String {
    format!("{}\n{}", prompts::INVALID_SELECTION_HEADER, C::menu_lines())
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_menu_order() {
        assert_eq!(Reason::from_code("1"), Some(Reason::Spam));
        assert_eq!(Reason::from_code("3"), Some(Reason::TargetedMisinformation));
        assert_eq!(Reason::from_code("6"), Some(Reason::Harassment));
        assert_eq!(TargetGroup::from_code("3"), Some(TargetGroup::EthnicRacial));
        assert_eq!(RequestedAction::from_code("4"), Some(RequestedAction::None));

        assert_eq!(Reason::Harassment.code(), 6);
        assert_eq!(TargetGroup::Political.code(), 2);
    }

    #[test]
    fn test_from_code_is_exact() {
        for input in ["", "0", "7", "01", " 1", "1 ", "+1", "one", "1.0", "-1", "99999999999999999999999"] {
            assert_eq!(Reason::from_code(input), None, "input {input:?}");
        }

        assert_eq!(TargetGroup::from_code("5"), None);
        assert_eq!(RequestedAction::from_code("5"), None);
    }

    #[test]
    fn test_only_targeted_misinformation_needs_group() {
        let needing = Reason::ALL.iter().filter(|r| r.needs_group()).collect::<Vec<_>>();

        assert_eq!(needing, vec![&Reason::TargetedMisinformation]);
    }

    #[test]
    fn test_reason_menu_lists_every_reason_then_cancel() {
        let menu = reason_menu();
        let lines = menu.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], prompts::REASON_MENU_HEADER);
        assert!(lines[1].starts_with("Enter `1` for Spam: "));
        assert!(lines[3].starts_with("Enter `3` for Targeted Misinformation: "));
        assert!(lines[6].starts_with("Enter `6` for Harassment: "));
        assert_eq!(lines[7], prompts::CANCEL_OPTION);
    }

    #[test]
    fn test_group_and_action_menus() {
        let group = group_menu();
        assert!(group.contains("Enter `1` for: Religious Group"));
        assert!(group.contains("Enter `3` for: Ethnic/Racial Group"));
        assert!(group.ends_with(prompts::CANCEL_OPTION));

        let action = action_menu();
        assert!(action.starts_with(prompts::ACTION_MENU_HEADER));
        assert!(action.contains("Enter `1` for: Block this user"));
        assert!(action.contains("Enter `4` for: None of the above"));
    }

    #[test]
    fn test_correction_menu_swaps_header() {
        let menu = correction_menu::<TargetGroup>();

        assert!(menu.starts_with(prompts::INVALID_SELECTION_HEADER));
        assert!(menu.ends_with(&TargetGroup::menu_lines()));
    }

    #[test]
    fn test_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Reason::TargetedMisinformation).unwrap(), "\"targeted-misinformation\"");
        assert_eq!(serde_json::to_string(&RequestedAction::FilterSimilar).unwrap(), "\"filter-similar\"");
    }
}
