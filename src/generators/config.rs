// src/generators/config.rs
use crate::error::ConfigurationError;
use crate::models::{CharacterClass, ClassSet, GenerationOptions, Template};

pub const MIN_PASSWORD_LENGTH: usize = 12;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;
pub const DEFAULT_PASSWORD_COUNT: usize = 1;

/// Fully resolved, immutable generation settings.
///
/// Built once at the boundary by [`GenerationConfig::resolve`]; the sampling
/// code only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    classes: ClassSet,
    count: usize,
    template: Option<Template>,
}

/// Fallbacks for options the caller left unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionDefaults {
    pub length: usize,
    pub count: usize,
}

impl Default for ResolutionDefaults {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            count: DEFAULT_PASSWORD_COUNT,
        }
    }
}

impl GenerationConfig {
    pub fn resolve(
        options: &GenerationOptions,
        defaults: ResolutionDefaults,
    ) -> Result<Self, ConfigurationError> {
        let mut classes = ClassSet::all();
        if options.exclude_uppercase {
            classes.remove(CharacterClass::Uppercase);
        }
        if options.exclude_lowercase {
            classes.remove(CharacterClass::Lowercase);
        }
        if options.exclude_numbers {
            classes.remove(CharacterClass::Digit);
        }
        if options.exclude_special {
            classes.remove(CharacterClass::Special);
        }
        if classes.is_empty() {
            return Err(ConfigurationError::NoClassesEnabled);
        }

        let count = options.count.unwrap_or(defaults.count);
        if count < 1 {
            return Err(ConfigurationError::InvalidCount(count));
        }

        let template = options
            .template
            .as_deref()
            .map(str::parse::<Template>)
            .transpose()?;

        // A template fixes the length itself
        let length = match &template {
            Some(t) => t.len(),
            None => {
                let length = options.length.unwrap_or(defaults.length);
                if length < MIN_PASSWORD_LENGTH {
                    return Err(ConfigurationError::LengthTooShort {
                        length,
                        minimum: MIN_PASSWORD_LENGTH,
                    });
                }
                length
            }
        };

        Ok(Self {
            length,
            classes,
            count,
            template,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(options: GenerationOptions) -> Result<GenerationConfig, ConfigurationError> {
        GenerationConfig::resolve(&options, ResolutionDefaults::default())
    }

    #[test]
    fn defaults_enable_everything() {
        let config = resolve(GenerationOptions::default()).unwrap();
        assert_eq!(config.length(), 16);
        assert_eq!(config.count(), 1);
        assert_eq!(config.classes(), ClassSet::all());
        assert!(config.template().is_none());
    }

    #[test]
    fn uses_supplied_defaults() {
        let defaults = ResolutionDefaults { length: 24, count: 3 };
        let config = GenerationConfig::resolve(&GenerationOptions::default(), defaults).unwrap();
        assert_eq!(config.length(), 24);
        assert_eq!(config.count(), 3);
    }

    #[test]
    fn exclusions_narrow_the_classes() {
        let config = resolve(GenerationOptions {
            exclude_special: true,
            exclude_numbers: true,
            ..Default::default()
        })
        .unwrap();
        let classes: Vec<_> = config.classes().iter().collect();
        assert_eq!(classes, vec![CharacterClass::Uppercase, CharacterClass::Lowercase]);
    }

    #[test]
    fn all_classes_disabled_is_rejected() {
        let err = resolve(GenerationOptions {
            exclude_uppercase: true,
            exclude_lowercase: true,
            exclude_numbers: true,
            exclude_special: true,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigurationError::NoClassesEnabled);
    }

    #[test]
    fn all_classes_disabled_is_rejected_with_template() {
        let err = resolve(GenerationOptions {
            exclude_uppercase: true,
            exclude_lowercase: true,
            exclude_numbers: true,
            exclude_special: true,
            template: Some("UUUU".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigurationError::NoClassesEnabled);
    }

    #[test]
    fn short_length_is_rejected() {
        let err = resolve(GenerationOptions {
            length: Some(11),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigurationError::LengthTooShort { length: 11, minimum: 12 });

        assert!(resolve(GenerationOptions {
            length: Some(12),
            ..Default::default()
        })
        .is_ok());
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = resolve(GenerationOptions {
            count: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidCount(0));
    }

    #[test]
    fn template_overrides_length() {
        let config = resolve(GenerationOptions {
            length: Some(4),
            template: Some("UUULLLDDSXXXX".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.length(), 13);
        assert!(config.template().is_some());
    }

    #[test]
    fn invalid_template_is_rejected() {
        let err = resolve(GenerationOptions {
            template: Some("UUZ".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownTemplateToken { token: 'Z', position: 3 });

        let err = resolve(GenerationOptions {
            template: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyTemplate);
    }
}
