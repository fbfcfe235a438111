/// Feature-selection helpers — total mappings from tense and
/// person/number classifications to caller-supplied values.
///
/// These replace implicit fallthrough-to-default selection with an
/// explicit completeness requirement, so gaps in a tense table surface
/// as a named error instead of silently defaulting.
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::context::GrammaticalContext;
use crate::schema::features::{Gender, PersonNumber, Tense};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("tense table has no value for {}", .tense.tag())]
    IncompleteTenseTable { tense: Tense },
}

/// One value per tense, with an optional designated default for tenses
/// left unpopulated.
#[derive(Debug, Clone)]
pub struct TenseTable<T> {
    entries: FxHashMap<Tense, T>,
    default: Option<T>,
}

impl<T> TenseTable<T> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            default: None,
        }
    }

    /// Build a table with all nine tenses populated — total by
    /// construction, `select` cannot fail on it.
    #[allow(clippy::too_many_arguments)]
    pub fn complete(
        present: T,
        aoristos: T,
        paratatikos: T,
        parak: T,
        ypers: T,
        ex_future: T,
        stig_future: T,
        synt_future: T,
        ypotaktiki: T,
    ) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(Tense::Present, present);
        entries.insert(Tense::Aoristos, aoristos);
        entries.insert(Tense::Paratatikos, paratatikos);
        entries.insert(Tense::Parak, parak);
        entries.insert(Tense::Ypers, ypers);
        entries.insert(Tense::ExFuture, ex_future);
        entries.insert(Tense::StigFuture, stig_future);
        entries.insert(Tense::SyntFuture, synt_future);
        entries.insert(Tense::Ypotaktiki, ypotaktiki);
        Self {
            entries,
            default: None,
        }
    }

    pub fn insert(&mut self, tense: Tense, value: T) -> &mut Self {
        self.entries.insert(tense, value);
        self
    }

    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// The value for `tense`, the designated default if that tense is
    /// unpopulated, or `IncompleteTenseTable` if there is neither.
    pub fn select(&self, tense: Tense) -> Result<&T, SelectError> {
        self.entries
            .get(&tense)
            .or(self.default.as_ref())
            .ok_or(SelectError::IncompleteTenseTable { tense })
    }

    /// True when every tense resolves, either directly or via the
    /// default. Content validation uses this ahead of narration time.
    pub fn is_total(&self) -> bool {
        self.default.is_some() || Tense::ALL.iter().all(|t| self.entries.contains_key(t))
    }
}

impl<T> Default for TenseTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Select from a tense table under the context's ambient tense.
pub fn tense_select<'a, T>(
    context: &GrammaticalContext,
    table: &'a TenseTable<T>,
) -> Result<&'a T, SelectError> {
    table.select(context.tense())
}

/// Two-way selection on the past/non-past split. Future tenses and the
/// subjunctive count as non-past.
pub fn time_select<T>(context: &GrammaticalContext, present: T, past: T) -> T {
    if context.tense().is_past() {
        past
    } else {
        present
    }
}

/// One value per six-way person/number classification. Total by
/// construction: every classification maps to something.
#[derive(Debug, Clone)]
pub struct PersonNumberTable<T> {
    pub masculine_singular: T,
    pub feminine_singular: T,
    pub neuter_singular: T,
    pub masculine_plural: T,
    pub feminine_plural: T,
    pub neuter_plural: T,
}

impl<T> PersonNumberTable<T> {
    pub fn select(&self, person: PersonNumber) -> &T {
        match person {
            PersonNumber::MasculineSingular => &self.masculine_singular,
            PersonNumber::FeminineSingular => &self.feminine_singular,
            PersonNumber::NeuterSingular => &self.neuter_singular,
            PersonNumber::MasculinePlural => &self.masculine_plural,
            PersonNumber::FemininePlural => &self.feminine_plural,
            PersonNumber::NeuterPlural => &self.neuter_plural,
        }
    }

    /// Select for a subject described by gender and plurality, with the
    /// neuter classification as the fallback.
    pub fn select_for(&self, gender: Gender, plural: bool) -> &T {
        self.select(PersonNumber::classify(gender, plural))
    }
}

impl<T: Clone> PersonNumberTable<T> {
    /// A table with one value for all plural classifications and one for
    /// all singular ones.
    pub fn split(plural: T, singular: T) -> Self {
        Self {
            masculine_singular: singular.clone(),
            feminine_singular: singular.clone(),
            neuter_singular: singular,
            masculine_plural: plural.clone(),
            feminine_plural: plural.clone(),
            neuter_plural: plural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine_endings() -> TenseTable<&'static str> {
        TenseTable::complete(
            "-ω", "-σα", "-α", "-κα", "-κει", "θα -ω", "θα -σω", "θα -ξω", "να -ω",
        )
    }

    #[test]
    fn complete_table_is_total() {
        let table = nine_endings();
        assert!(table.is_total());
        for tense in Tense::ALL {
            assert!(table.select(tense).is_ok());
        }
    }

    #[test]
    fn complete_table_maps_each_tense() {
        let table = nine_endings();
        assert_eq!(*table.select(Tense::Present).unwrap(), "-ω");
        assert_eq!(*table.select(Tense::Aoristos).unwrap(), "-σα");
        assert_eq!(*table.select(Tense::Ypotaktiki).unwrap(), "να -ω");
    }

    #[test]
    fn missing_tense_is_an_error() {
        let mut table = TenseTable::new();
        table.insert(Tense::Present, "now");
        assert!(!table.is_total());

        let err = table.select(Tense::Aoristos).unwrap_err();
        assert_eq!(
            err,
            SelectError::IncompleteTenseTable {
                tense: Tense::Aoristos
            }
        );
    }

    #[test]
    fn designated_default_fills_gaps() {
        let mut table = TenseTable::new().with_default("sometime");
        table.insert(Tense::Present, "now");

        assert!(table.is_total());
        assert_eq!(*table.select(Tense::Present).unwrap(), "now");
        assert_eq!(*table.select(Tense::Ypers).unwrap(), "sometime");
    }

    #[test]
    fn tense_select_reads_ambient_tense() {
        let table = nine_endings();
        let mut ctx = GrammaticalContext::new();
        ctx.set_tense(Tense::Parak);
        assert_eq!(*tense_select(&ctx, &table).unwrap(), "-κα");
    }

    #[test]
    fn time_select_past_split() {
        let mut ctx = GrammaticalContext::new();
        assert_eq!(time_select(&ctx, "is", "was"), "is");

        ctx.set_tense(Tense::Paratatikos);
        assert_eq!(time_select(&ctx, "is", "was"), "was");

        // Future and subjunctive are non-past.
        ctx.set_tense(Tense::SyntFuture);
        assert_eq!(time_select(&ctx, "is", "was"), "is");
        ctx.set_tense(Tense::Ypotaktiki);
        assert_eq!(time_select(&ctx, "is", "was"), "is");
    }

    #[test]
    fn person_table_covers_all_six() {
        let table = PersonNumberTable {
            masculine_singular: "he",
            feminine_singular: "she",
            neuter_singular: "it",
            masculine_plural: "they-m",
            feminine_plural: "they-f",
            neuter_plural: "they-n",
        };
        assert_eq!(*table.select(PersonNumber::MasculineSingular), "he");
        assert_eq!(*table.select(PersonNumber::FemininePlural), "they-f");
        assert_eq!(*table.select_for(Gender::Neuter, true), "they-n");
    }

    #[test]
    fn split_table_distinguishes_number_only() {
        let table = PersonNumberTable::split("are", "is");
        assert_eq!(*table.select(PersonNumber::MasculineSingular), "is");
        assert_eq!(*table.select(PersonNumber::NeuterPlural), "are");
        // Fallback classification is neuter singular.
        assert_eq!(*table.select(PersonNumber::default()), "is");
    }
}
