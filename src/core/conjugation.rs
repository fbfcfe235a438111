/// Analytic verb-phrase emission — tracks auxiliary repetition and
/// clause order while a sentence is being produced.
///
/// Some tenses are formed analytically (auxiliary + participle), and
/// fluent narration elides a repeated auxiliary across coordinated verb
/// phrases ("he took the book and [_] left" rather than "... and he
/// left"). Certain constructions also topicalize the participle, placing
/// it before the verb; those always emit both words.
use crate::core::context::GrammaticalContext;

/// Per-clause emission state. Created for one clause-generation call and
/// discarded when the clause is complete.
#[derive(Debug, Clone, Default)]
pub struct ConjugationState {
    /// The most recently emitted verb, or `None` — the sentinel meaning
    /// "nothing emitted yet, or already elided once."
    pub last_verb: Option<String>,
    /// One-shot flag: the next emission places the participle before
    /// the verb. Consumed (read and cleared) by `emit`.
    pub reversed_order: bool,
}

impl ConjugationState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Emit the verb part of an analytic verb phrase.
///
/// Normal order: a verb identical to the last one emitted is elided —
/// the return value is empty and `last_verb` resets to the sentinel, so
/// an immediately following identical verb is emitted again (elision
/// never happens twice in a row). Otherwise the verb is recorded and
/// returned. Either way the participle is stashed into the context for
/// downstream clauses.
///
/// Reversed order: the flag is consumed, the verb is stashed as the
/// active participle, and both words are returned as
/// `" <participle> <verb>"`. Repetition elision does not apply.
///
/// Empty strings are accepted and mean "no participle/verb to emit."
pub fn emit(
    participle: &str,
    verb: &str,
    state: &mut ConjugationState,
    context: &mut GrammaticalContext,
) -> String {
    if state.reversed_order {
        state.reversed_order = false;
        context.set_participle(verb);
        return format!(" {} {}", participle, verb);
    }

    context.set_participle(participle);
    match &state.last_verb {
        Some(last) if last == verb => {
            state.last_verb = None;
            String::new()
        }
        _ => {
            state.last_verb = Some(verb.to_string());
            verb.to_string()
        }
    }
}
