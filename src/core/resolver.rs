/// Agreement resolution — picks the correctly inflected surface form of
/// a lexical entry under the current grammatical context.
///
/// Resolution is a pure table lookup with a documented fallback chain;
/// for a fixed entry and fixed context values the result never varies.
use thiserror::Error;

use crate::core::context::{GrammaticalContext, SubjectId};
use crate::schema::features::{Case, PersonNumber, Tense};
use crate::schema::lexicon::{FeatureKey, LexicalEntry, PartOfSpeech};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no inflection of '{root}' for {key}")]
    MissingInflection { root: String, key: FeatureKey },
}

/// Build the lookup key from the context dimensions relevant to the
/// entry's part of speech.
fn key_for(
    entry: &LexicalEntry,
    context: &GrammaticalContext,
    tense: Tense,
    person: PersonNumber,
) -> FeatureKey {
    match entry.part_of_speech {
        PartOfSpeech::Noun => FeatureKey {
            case: Some(context.case()),
            person: Some(person),
            ..Default::default()
        },
        PartOfSpeech::Verb => FeatureKey {
            tense: Some(tense),
            person: Some(person),
            ..Default::default()
        },
        PartOfSpeech::Article => FeatureKey {
            case: Some(context.list_case()),
            article: Some(context.list_article()),
            ..Default::default()
        },
    }
}

/// Look up a key, walking the documented fallback chain on a miss:
/// the bare default-case citation form, then the bare default-tense
/// citation form, then the entry's designated base form. The chain
/// never scavenges a fully-keyed form for a different combination —
/// a miss on (Aoristos, 3sg) does not return the (Present, 3sg) form.
fn lookup(entry: &LexicalEntry, key: FeatureKey) -> Result<String, ResolveError> {
    if let Some(form) = entry.form(&key) {
        return Ok(form.to_string());
    }

    if key.case.is_some() {
        let citation = FeatureKey {
            case: Some(Case::Nominative),
            ..Default::default()
        };
        if let Some(form) = entry.form(&citation) {
            return Ok(form.to_string());
        }
    }
    if key.tense.is_some() {
        let citation = FeatureKey {
            tense: Some(Tense::Present),
            ..Default::default()
        };
        if let Some(form) = entry.form(&citation) {
            return Ok(form.to_string());
        }
    }

    match &entry.base {
        Some(base) => Ok(base.clone()),
        None => Err(ResolveError::MissingInflection {
            root: entry.root.clone(),
            key,
        }),
    }
}

/// Resolve under the ambient tense with the neutral default
/// person/number classification.
pub fn resolve(
    entry: &LexicalEntry,
    context: &GrammaticalContext,
) -> Result<String, ResolveError> {
    resolve_with(entry, context, PersonNumber::default())
}

/// Resolve with an explicit person/number classification, under the
/// ambient tense.
pub fn resolve_with(
    entry: &LexicalEntry,
    context: &GrammaticalContext,
    person: PersonNumber,
) -> Result<String, ResolveError> {
    let key = key_for(entry, context, context.tense(), person);
    lookup(entry, key)
}

/// Resolve for a specific narration subject: the subject's registered
/// narrative tense (if any) takes the place of the ambient tense.
pub fn resolve_for(
    entry: &LexicalEntry,
    context: &GrammaticalContext,
    subject: SubjectId,
    person: PersonNumber,
) -> Result<String, ResolveError> {
    let key = key_for(entry, context, context.tense_for(subject), person);
    lookup(entry, key)
}
