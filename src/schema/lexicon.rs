/// Lexical entries and lexicon loading — the dictionary side of the engine.
///
/// The host's vocabulary store supplies entries; the engine only reads
/// them. RON files are the interchange format, parsed through
/// intermediate structs so feature values arrive as validated enums.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use super::features::{Case, ContextError, ListArticle, PersonNumber, Tense};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("entry '{root}': {source}")]
    Feature {
        root: String,
        #[source]
        source: ContextError,
    },
}

/// Part of speech of a lexical entry. Determines which context
/// dimensions participate in the lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// Consults case + person/number.
    Noun,
    /// Consults tense + person/number.
    Verb,
    /// Consults list-case + list-article.
    Article,
}

impl std::str::FromStr for PartOfSpeech {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "article" => Ok(Self::Article),
            _ => Err(ContextError::InvalidFeatureValue {
                dimension: "part_of_speech",
                value: s.to_string(),
            }),
        }
    }
}

/// A feature-combination key into an entry's form table. Dimensions not
/// applicable to the entry's part of speech stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FeatureKey {
    pub tense: Option<Tense>,
    pub case: Option<Case>,
    pub person: Option<PersonNumber>,
    pub article: Option<ListArticle>,
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(t) = self.tense {
            parts.push(t.tag().to_string());
        }
        if let Some(c) = self.case {
            parts.push(c.tag().to_string());
        }
        if let Some(p) = self.person {
            parts.push(format!("person:{:?}", p));
        }
        if let Some(a) = self.article {
            parts.push(format!("article:{:?}", a));
        }
        if parts.is_empty() {
            write!(f, "<no features>")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// One word/root with its table of inflected forms. Owned by the
/// caller's dictionary; read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub root: String,
    pub part_of_speech: PartOfSpeech,
    /// Designated base form, the last stop of the fallback chain.
    pub base: Option<String>,
    pub forms: FxHashMap<FeatureKey, String>,
}

impl LexicalEntry {
    pub fn new(root: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        Self {
            root: root.into(),
            part_of_speech,
            base: None,
            forms: FxHashMap::default(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_form(mut self, key: FeatureKey, text: impl Into<String>) -> Self {
        self.forms.insert(key, text.into());
        self
    }

    pub fn form(&self, key: &FeatureKey) -> Option<&str> {
        self.forms.get(key).map(String::as_str)
    }
}

/// A set of lexical entries indexed by root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Lexicon {
    pub entries: FxHashMap<String, LexicalEntry>,
}

// RON deserialization helpers — the RON format carries feature values as
// strings, so we need intermediate structs that validate on the way in.

#[derive(Debug, Deserialize)]
struct RonForm {
    #[serde(default)]
    tense: Option<String>,
    #[serde(default)]
    case: Option<String>,
    #[serde(default)]
    person: Option<String>,
    #[serde(default)]
    article: Option<String>,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Entry")]
struct RonEntry {
    part_of_speech: String,
    #[serde(default)]
    base: Option<String>,
    forms: Vec<RonForm>,
}

fn parse_feature<T: std::str::FromStr<Err = ContextError>>(
    root: &str,
    raw: &Option<String>,
) -> Result<Option<T>, LexiconError> {
    match raw {
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|source| LexiconError::Feature {
                root: root.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

impl Lexicon {
    /// Load a lexicon from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Lexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a lexicon from a RON string.
    pub fn parse_ron(input: &str) -> Result<Lexicon, LexiconError> {
        let raw: HashMap<String, RonEntry> = ron::from_str(input)?;
        let mut entries = FxHashMap::default();

        for (root, ron_entry) in raw {
            let part_of_speech =
                ron_entry
                    .part_of_speech
                    .parse()
                    .map_err(|source| LexiconError::Feature {
                        root: root.clone(),
                        source,
                    })?;

            let mut forms = FxHashMap::default();
            for form in ron_entry.forms {
                let key = FeatureKey {
                    tense: parse_feature(&root, &form.tense)?,
                    case: parse_feature(&root, &form.case)?,
                    person: parse_feature(&root, &form.person)?,
                    article: parse_feature(&root, &form.article)?,
                };
                forms.insert(key, form.text);
            }

            entries.insert(
                root.clone(),
                LexicalEntry {
                    root,
                    part_of_speech,
                    base: ron_entry.base,
                    forms,
                },
            );
        }

        Ok(Lexicon { entries })
    }

    pub fn get(&self, root: &str) -> Option<&LexicalEntry> {
        self.entries.get(root)
    }

    pub fn insert(&mut self, entry: LexicalEntry) {
        self.entries.insert(entry.root.clone(), entry);
    }

    /// Merge another lexicon into this one. Entries from `other`
    /// override entries in `self` with the same root.
    pub fn merge(&mut self, other: Lexicon) {
        for (root, entry) in other.entries {
            self.entries.insert(root, entry);
        }
    }
}
