use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error raised where textual feature values become typed ones — the
/// lexicon loading path. Typed setters cannot construct an out-of-domain
/// value, so this is the only place the domain check can fire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("invalid value '{value}' for {dimension}")]
    InvalidFeatureValue {
        dimension: &'static str,
        value: String,
    },
}

/// Grammatical tense/aspect. Nine values — the aspect distinctions go
/// beyond a simple past/present split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Present,
    Aoristos,
    Paratatikos,
    Parak,
    Ypers,
    ExFuture,
    StigFuture,
    SyntFuture,
    Ypotaktiki,
}

impl Default for Tense {
    fn default() -> Self {
        Self::Present
    }
}

impl Tense {
    pub const ALL: [Tense; 9] = [
        Self::Present,
        Self::Aoristos,
        Self::Paratatikos,
        Self::Parak,
        Self::Ypers,
        Self::ExFuture,
        Self::StigFuture,
        Self::SyntFuture,
        Self::Ypotaktiki,
    ];

    /// True for the four past tenses.
    pub fn is_past(&self) -> bool {
        matches!(
            self,
            Self::Aoristos | Self::Paratatikos | Self::Parak | Self::Ypers
        )
    }

    /// True for the three future tenses.
    pub fn is_future(&self) -> bool {
        matches!(self, Self::ExFuture | Self::StigFuture | Self::SyntFuture)
    }

    /// Returns the tag string for this tense (e.g., "tense:aoristos").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Present => "tense:present",
            Self::Aoristos => "tense:aoristos",
            Self::Paratatikos => "tense:paratatikos",
            Self::Parak => "tense:parak",
            Self::Ypers => "tense:ypers",
            Self::ExFuture => "tense:ex_future",
            Self::StigFuture => "tense:stig_future",
            Self::SyntFuture => "tense:synt_future",
            Self::Ypotaktiki => "tense:ypotaktiki",
        }
    }
}

impl FromStr for Tense {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "aoristos" => Ok(Self::Aoristos),
            "paratatikos" => Ok(Self::Paratatikos),
            "parak" => Ok(Self::Parak),
            "ypers" => Ok(Self::Ypers),
            "ex_future" => Ok(Self::ExFuture),
            "stig_future" => Ok(Self::StigFuture),
            "synt_future" => Ok(Self::SyntFuture),
            "ypotaktiki" => Ok(Self::Ypotaktiki),
            _ => Err(ContextError::InvalidFeatureValue {
                dimension: "tense",
                value: s.to_string(),
            }),
        }
    }
}

/// Grammatical case, applied to a single referenced entity (or, via the
/// list-case dimension, to a described group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
}

impl Default for Case {
    fn default() -> Self {
        Self::Nominative
    }
}

impl Case {
    pub const ALL: [Case; 4] = [
        Self::Nominative,
        Self::Genitive,
        Self::Dative,
        Self::Accusative,
    ];

    /// Returns the tag string for this case (e.g., "case:genitive").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Nominative => "case:nominative",
            Self::Genitive => "case:genitive",
            Self::Dative => "case:dative",
            Self::Accusative => "case:accusative",
        }
    }
}

impl FromStr for Case {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nominative" => Ok(Self::Nominative),
            "genitive" => Ok(Self::Genitive),
            "dative" => Ok(Self::Dative),
            "accusative" => Ok(Self::Accusative),
            _ => Err(ContextError::InvalidFeatureValue {
                dimension: "case",
                value: s.to_string(),
            }),
        }
    }
}

/// Article selection for described lists of entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListArticle {
    Definite,
    Indefinite,
}

impl Default for ListArticle {
    fn default() -> Self {
        Self::Definite
    }
}

impl ListArticle {
    pub const ALL: [ListArticle; 2] = [Self::Definite, Self::Indefinite];
}

impl FromStr for ListArticle {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "definite" => Ok(Self::Definite),
            "indefinite" => Ok(Self::Indefinite),
            _ => Err(ContextError::InvalidFeatureValue {
                dimension: "list_article",
                value: s.to_string(),
            }),
        }
    }
}

/// Grammatical gender of a subject or group referent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Default for Gender {
    fn default() -> Self {
        Self::Neuter
    }
}

/// The six-way person/number/gender classification used to pick pronoun
/// and verb-ending forms: three singular genders plus three plural-like
/// distinctions for group referents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonNumber {
    MasculineSingular,
    FeminineSingular,
    NeuterSingular,
    MasculinePlural,
    FemininePlural,
    NeuterPlural,
}

impl Default for PersonNumber {
    fn default() -> Self {
        Self::NeuterSingular
    }
}

impl PersonNumber {
    pub const ALL: [PersonNumber; 6] = [
        Self::MasculineSingular,
        Self::FeminineSingular,
        Self::NeuterSingular,
        Self::MasculinePlural,
        Self::FemininePlural,
        Self::NeuterPlural,
    ];

    /// Classify a subject from its gender and plurality. Neuter singular
    /// is the fallback classification when nothing more specific applies.
    pub fn classify(gender: Gender, plural: bool) -> PersonNumber {
        match (gender, plural) {
            (Gender::Masculine, false) => Self::MasculineSingular,
            (Gender::Feminine, false) => Self::FeminineSingular,
            (Gender::Neuter, false) => Self::NeuterSingular,
            (Gender::Masculine, true) => Self::MasculinePlural,
            (Gender::Feminine, true) => Self::FemininePlural,
            (Gender::Neuter, true) => Self::NeuterPlural,
        }
    }

    pub fn is_plural(&self) -> bool {
        matches!(
            self,
            Self::MasculinePlural | Self::FemininePlural | Self::NeuterPlural
        )
    }
}

impl FromStr for PersonNumber {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "masculine_singular" => Ok(Self::MasculineSingular),
            "feminine_singular" => Ok(Self::FeminineSingular),
            "neuter_singular" => Ok(Self::NeuterSingular),
            "masculine_plural" => Ok(Self::MasculinePlural),
            "feminine_plural" => Ok(Self::FemininePlural),
            "neuter_plural" => Ok(Self::NeuterPlural),
            _ => Err(ContextError::InvalidFeatureValue {
                dimension: "person_number",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tense_defaults_to_present() {
        assert_eq!(Tense::default(), Tense::Present);
    }

    #[test]
    fn tense_past_grouping() {
        assert!(Tense::Aoristos.is_past());
        assert!(Tense::Paratatikos.is_past());
        assert!(Tense::Parak.is_past());
        assert!(Tense::Ypers.is_past());
        assert!(!Tense::Present.is_past());
        assert!(!Tense::Ypotaktiki.is_past());
    }

    #[test]
    fn tense_future_grouping() {
        assert!(Tense::ExFuture.is_future());
        assert!(Tense::StigFuture.is_future());
        assert!(Tense::SyntFuture.is_future());
        assert!(!Tense::Aoristos.is_future());
        assert!(!Tense::Present.is_future());
    }

    #[test]
    fn tense_from_str_valid() {
        assert_eq!("aoristos".parse::<Tense>().unwrap(), Tense::Aoristos);
        assert_eq!("stig_future".parse::<Tense>().unwrap(), Tense::StigFuture);
    }

    #[test]
    fn tense_from_str_invalid() {
        let err = "perfekt".parse::<Tense>().unwrap_err();
        assert_eq!(
            err,
            ContextError::InvalidFeatureValue {
                dimension: "tense",
                value: "perfekt".to_string(),
            }
        );
    }

    #[test]
    fn case_from_str() {
        assert_eq!("genitive".parse::<Case>().unwrap(), Case::Genitive);
        assert!("vocative".parse::<Case>().is_err());
    }

    #[test]
    fn case_defaults_to_nominative() {
        assert_eq!(Case::default(), Case::Nominative);
    }

    #[test]
    fn list_article_defaults_to_definite() {
        assert_eq!(ListArticle::default(), ListArticle::Definite);
    }

    #[test]
    fn classify_covers_all_six() {
        assert_eq!(
            PersonNumber::classify(Gender::Masculine, false),
            PersonNumber::MasculineSingular
        );
        assert_eq!(
            PersonNumber::classify(Gender::Feminine, true),
            PersonNumber::FemininePlural
        );
        assert_eq!(
            PersonNumber::classify(Gender::Neuter, true),
            PersonNumber::NeuterPlural
        );
    }

    #[test]
    fn classify_neuter_fallback_is_default() {
        assert_eq!(
            PersonNumber::classify(Gender::default(), false),
            PersonNumber::default()
        );
    }

    #[test]
    fn person_number_plurality() {
        assert!(PersonNumber::MasculinePlural.is_plural());
        assert!(!PersonNumber::FeminineSingular.is_plural());
    }

    #[test]
    fn tags() {
        assert_eq!(Tense::Parak.tag(), "tense:parak");
        assert_eq!(Case::Accusative.tag(), "case:accusative");
    }
}
