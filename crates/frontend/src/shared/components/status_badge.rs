//! Coloured badges for statuses, record kinds and active flags.
use leptos::prelude::*;
use thaw::*;

/// Semantic colour of a badge, independent of the UI kit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Brand,
    Info,
    Success,
    Warning,
    Danger,
}

impl StatusTone {
    fn badge_color(self) -> BadgeColor {
        match self {
            StatusTone::Neutral => BadgeColor::Subtle,
            StatusTone::Brand => BadgeColor::Brand,
            StatusTone::Info => BadgeColor::Informative,
            StatusTone::Success => BadgeColor::Success,
            StatusTone::Warning => BadgeColor::Warning,
            StatusTone::Danger => BadgeColor::Danger,
        }
    }
}

/// Tone of the "Active"/"Inactive" flag shown in every list
pub fn active_tone(is_active: bool) -> StatusTone {
    if is_active {
        StatusTone::Success
    } else {
        StatusTone::Neutral
    }
}

pub fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}

#[component]
pub fn StatusBadge(tone: StatusTone, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=tone.badge_color()>
            {label}
        </Badge>
    }
}

#[component]
pub fn ActiveBadge(is_active: bool) -> impl IntoView {
    view! { <StatusBadge tone=active_tone(is_active) label=active_label(is_active) /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flag_presentation() {
        assert_eq!(active_tone(true), StatusTone::Success);
        assert_eq!(active_tone(false), StatusTone::Neutral);
        assert_eq!(active_label(true), "Active");
        assert_eq!(active_label(false), "Inactive");
    }
}
