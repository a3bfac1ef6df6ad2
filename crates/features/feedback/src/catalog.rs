//! Message pools. Built once when the slice starts, read-only afterwards.

use crate::error::FeedbackError;
use crate::summary::FeedbackCategory;
use ashy_kernel::domain::config::FeedbackConfig;

pub const COLORFUL_MESSAGES: &[&str] = &[
    "Your use of vibrant colors shows a joyful spirit! 🌈",
    "What a beautiful palette! The colors express such positive energy! ✨",
    "The variety of colors in your drawing radiates happiness! 🎨",
];

pub const SIMPLE_MESSAGES: &[&str] = &[
    "Sometimes simplicity speaks the loudest. Beautiful work! 🌸",
    "There's elegance in minimalism. Your drawing is peaceful! 🕊️",
    "The calm simplicity of your art is truly soothing! 🌿",
];

pub const DETAILED_MESSAGES: &[&str] = &[
    "The detail in your work shows wonderful focus and dedication! 🌺",
    "You've put so much care into this! It's amazing! ⭐",
    "The intricate details reveal a creative and thoughtful mind! 🎭",
];

pub const GENERAL_MESSAGES: &[&str] = &[
    "Your creativity is beautiful! Keep expressing yourself! 💝",
    "Art is a wonderful way to express feelings. You're doing great! 🌻",
    "Every stroke tells a story. Thank you for sharing yours! 🦋",
    "Your artistic expression is valuable and meaningful! 🌟",
];

pub const THERAPEUTIC_TIPS: &[&str] = &[
    "Drawing can reduce stress and anxiety by 84% after just 5 sessions!",
    "Art therapy helps process emotions in a healthy, creative way.",
    "Every mark you make is a step toward self-discovery.",
    "Your drawings are a reflection of your inner world - honor them!",
    "Creativity is a form of meditation. Enjoy the process!",
];

pub const ENCOURAGEMENTS: &[&str] = &[
    "You're doing wonderful! 🌈",
    "Keep creating! 💖",
    "Your art matters! ✨",
    "Beautiful expression! 🌸",
    "You're amazing! 🌟",
];

/// Encouragement used when the drawing could not be read.
pub const FALLBACK_ENCOURAGEMENT: &str = "Keep creating! 💖";

/// Every pool the classifier samples from. Each pool holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    colorful: Vec<String>,
    detailed: Vec<String>,
    simple: Vec<String>,
    general: Vec<String>,
    encouragements: Vec<String>,
    tips: Vec<String>,
    fallback_encouragement: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            colorful: owned(COLORFUL_MESSAGES),
            detailed: owned(DETAILED_MESSAGES),
            simple: owned(SIMPLE_MESSAGES),
            general: owned(GENERAL_MESSAGES),
            encouragements: owned(ENCOURAGEMENTS),
            tips: owned(THERAPEUTIC_TIPS),
            fallback_encouragement: FALLBACK_ENCOURAGEMENT.to_owned(),
        }
    }
}

impl Catalog {
    /// Built-in pools with the configured replacements applied.
    ///
    /// An empty list keeps the built-in pool. Entries are trimmed.
    ///
    /// # Errors
    /// [`FeedbackError::Config`] when a configured entry is blank.
    pub fn from_config(config: &FeedbackConfig) -> Result<Self, FeedbackError> {
        let defaults = Self::default();

        Ok(Self {
            colorful: replace("colorful", &config.colorful, defaults.colorful)?,
            detailed: replace("detailed", &config.detailed, defaults.detailed)?,
            simple: replace("simple", &config.simple, defaults.simple)?,
            general: replace("general", &config.general, defaults.general)?,
            encouragements: replace(
                "encouragements",
                &config.encouragements,
                defaults.encouragements,
            )?,
            tips: replace("tips", &config.tips, defaults.tips)?,
            fallback_encouragement: match &config.fallback_encouragement {
                Some(value) => entry("fallback_encouragement", value)?,
                None => defaults.fallback_encouragement,
            },
        })
    }

    #[must_use]
    pub fn messages(&self, category: FeedbackCategory) -> &[String] {
        match category {
            FeedbackCategory::Colorful => &self.colorful,
            FeedbackCategory::Detailed => &self.detailed,
            FeedbackCategory::Simple => &self.simple,
            FeedbackCategory::General => &self.general,
        }
    }

    #[must_use]
    pub fn encouragements(&self) -> &[String] {
        &self.encouragements
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    #[must_use]
    pub fn fallback_encouragement(&self) -> &str {
        &self.fallback_encouragement
    }
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|&entry| entry.to_owned()).collect()
}

fn replace(
    name: &'static str,
    configured: &[String],
    builtin: Vec<String>,
) -> Result<Vec<String>, FeedbackError> {
    if configured.is_empty() {
        return Ok(builtin);
    }
    configured.iter().map(|value| entry(name, value)).collect()
}

fn entry(name: &'static str, value: &str) -> Result<String, FeedbackError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FeedbackError::Config {
            message: format!("`feedback.{name}` contains a blank entry").into(),
            context: None,
        });
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_builtin_pool_sizes() {
        let catalog = Catalog::default();
        assert_eq!(catalog.messages(FeedbackCategory::Colorful).len(), 3);
        assert_eq!(catalog.messages(FeedbackCategory::Detailed).len(), 3);
        assert_eq!(catalog.messages(FeedbackCategory::Simple).len(), 3);
        assert_eq!(catalog.messages(FeedbackCategory::General).len(), 4);
        assert_eq!(catalog.encouragements().len(), 5);
        assert_eq!(catalog.tips().len(), 5);
        assert_eq!(catalog.fallback_encouragement(), FALLBACK_ENCOURAGEMENT);
    }

    #[test]
    fn test_fallback_encouragement_is_a_regular_encouragement() {
        assert!(ENCOURAGEMENTS.contains(&FALLBACK_ENCOURAGEMENT));
    }

    #[test]
    fn test_empty_config_keeps_builtins() {
        let catalog = Catalog::from_config(&FeedbackConfig::default()).unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_config_replaces_single_pools() {
        let config = FeedbackConfig {
            simple: vec!["  Less is more.  ".to_owned()],
            fallback_encouragement: Some("Thank you for drawing!".to_owned()),
            ..FeedbackConfig::default()
        };
        let catalog = Catalog::from_config(&config).unwrap();

        assert_eq!(catalog.messages(FeedbackCategory::Simple), ["Less is more."]);
        assert_eq!(catalog.fallback_encouragement(), "Thank you for drawing!");
        for category in FeedbackCategory::iter().filter(|c| *c != FeedbackCategory::Simple) {
            assert_eq!(catalog.messages(category), Catalog::default().messages(category));
        }
    }

    #[test]
    fn test_blank_entries_are_rejected() {
        let config = FeedbackConfig {
            tips: vec!["Breathe.".to_owned(), "   ".to_owned()],
            ..FeedbackConfig::default()
        };
        let err = Catalog::from_config(&config).unwrap_err();
        assert!(matches!(err, FeedbackError::Config { .. }));
        assert!(err.to_string().contains("feedback.tips"));
    }
}
