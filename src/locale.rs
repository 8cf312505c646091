use crate::consts::{LOCALE_EN_US, WEEKDAY_LABELS_EN_US, WEEKDAY_LABELS_ZH_CN};
use crate::prelude::*;

/// Locale for weekday header labels.
///
/// Two label sets exist; anything else resolves to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum Locale {
    /// Single-character Chinese labels (the default set).
    #[default]
    #[display(fmt = "zh-CN")]
    ZhCn,
    /// Three-letter English abbreviations.
    #[display(fmt = "en-US")]
    EnUs,
}

impl Locale {
    /// Resolves a locale tag. Unknown tags fall back to [`Locale::ZhCn`];
    /// this never errors.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            LOCALE_EN_US => Self::EnUs,
            _ => Self::ZhCn,
        }
    }

    /// Sunday-first weekday labels for this locale.
    pub const fn labels(self) -> [&'static str; 7] {
        match self {
            Self::ZhCn => WEEKDAY_LABELS_ZH_CN,
            Self::EnUs => WEEKDAY_LABELS_EN_US,
        }
    }
}

/// Sunday-first weekday labels for a locale tag, falling back to the
/// `zh-CN` set when the tag is unknown.
pub fn weekday_labels(locale: &str) -> [&'static str; 7] {
    Locale::from_tag(locale).labels()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locales() {
        assert_eq!(weekday_labels("en-US")[0], "Sun");
        assert_eq!(weekday_labels("en-US")[6], "Sat");
        assert_eq!(weekday_labels("zh-CN")[0], "日");
        assert_eq!(weekday_labels("zh-CN")[6], "六");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(weekday_labels("fr-FR"), weekday_labels("zh-CN"));
        assert_eq!(weekday_labels(""), weekday_labels("zh-CN"));
    }

    #[test]
    fn test_label_sets_are_week_sized() {
        assert_eq!(Locale::ZhCn.labels().len(), 7);
        assert_eq!(Locale::EnUs.labels().len(), 7);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUs);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("de-DE"), Locale::ZhCn);
        assert_eq!(Locale::default(), Locale::ZhCn);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::ZhCn.to_string(), "zh-CN");
        assert_eq!(Locale::EnUs.to_string(), "en-US");
    }
}
