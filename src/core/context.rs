/// Grammatical context — the active tense/case/article selection for one
/// narration session, with scoped overrides.
///
/// One instance per narration session. Concurrent sessions must each own
/// their own context; nothing here is synchronized.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::schema::features::{Case, ListArticle, Tense};

/// Newtype wrapper for narration subject IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub u64);

/// A typed (dimension, value) pair, the unit of scoped overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureValue {
    Tense(Tense),
    Case(Case),
    ListCase(Case),
    ListArticle(ListArticle),
}

/// The current grammatical selection. Exactly one value is active per
/// dimension; setting a dimension overwrites the previous value.
#[derive(Debug, Clone, Default)]
pub struct GrammaticalContext {
    tense: Tense,
    case: Case,
    list_case: Case,
    list_article: ListArticle,
    /// Per-subject narrative tense, e.g. the protagonist narrates in
    /// past tense while everyone else stays in present.
    subject_tenses: FxHashMap<SubjectId, Tense>,
    /// The participle stashed by the most recent verb emission, for
    /// downstream clauses that continue the same construction.
    participle: Option<String>,
}

impl GrammaticalContext {
    /// A fresh context with session defaults: Present, Nominative,
    /// Nominative list case, Definite list article.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tense(&self) -> Tense {
        self.tense
    }

    pub fn case(&self) -> Case {
        self.case
    }

    pub fn list_case(&self) -> Case {
        self.list_case
    }

    pub fn list_article(&self) -> ListArticle {
        self.list_article
    }

    pub fn set_tense(&mut self, tense: Tense) {
        self.tense = tense;
    }

    pub fn set_case(&mut self, case: Case) {
        self.case = case;
    }

    pub fn set_list_case(&mut self, case: Case) {
        self.list_case = case;
    }

    pub fn set_list_article(&mut self, article: ListArticle) {
        self.list_article = article;
    }

    /// Register a narrative tense for one subject. Subjects without a
    /// registered tense narrate in the ambient tense.
    pub fn set_subject_tense(&mut self, subject: SubjectId, tense: Tense) {
        self.subject_tenses.insert(subject, tense);
    }

    pub fn clear_subject_tense(&mut self, subject: SubjectId) {
        self.subject_tenses.remove(&subject);
    }

    /// The tense this subject narrates in, falling back to the ambient
    /// tense when no per-subject tense is registered.
    pub fn tense_for(&self, subject: SubjectId) -> Tense {
        self.subject_tenses
            .get(&subject)
            .copied()
            .unwrap_or(self.tense)
    }

    pub fn set_participle(&mut self, participle: impl Into<String>) {
        self.participle = Some(participle.into());
    }

    pub fn participle(&self) -> Option<&str> {
        self.participle.as_deref()
    }

    /// Set one dimension and return the value it replaced.
    pub fn set(&mut self, feature: FeatureValue) -> FeatureValue {
        match feature {
            FeatureValue::Tense(t) => FeatureValue::Tense(std::mem::replace(&mut self.tense, t)),
            FeatureValue::Case(c) => FeatureValue::Case(std::mem::replace(&mut self.case, c)),
            FeatureValue::ListCase(c) => {
                FeatureValue::ListCase(std::mem::replace(&mut self.list_case, c))
            }
            FeatureValue::ListArticle(a) => {
                FeatureValue::ListArticle(std::mem::replace(&mut self.list_article, a))
            }
        }
    }

    /// Run `body` with one dimension temporarily overridden. The saved
    /// value is restored on every exit path, so a failing production
    /// never leaves the caller's ambient context mutated.
    pub fn with_override<T, E>(
        &mut self,
        feature: FeatureValue,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let saved = self.set(feature);
        let result = body(self);
        self.set(saved);
        result
    }

    pub fn with_tense<T, E>(
        &mut self,
        tense: Tense,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        self.with_override(FeatureValue::Tense(tense), body)
    }

    pub fn with_case<T, E>(
        &mut self,
        case: Case,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        self.with_override(FeatureValue::Case(case), body)
    }

    pub fn with_list_case<T, E>(
        &mut self,
        case: Case,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        self.with_override(FeatureValue::ListCase(case), body)
    }

    pub fn with_list_article<T, E>(
        &mut self,
        article: ListArticle,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        self.with_override(FeatureValue::ListArticle(article), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults() {
        let ctx = GrammaticalContext::new();
        assert_eq!(ctx.tense(), Tense::Present);
        assert_eq!(ctx.case(), Case::Nominative);
        assert_eq!(ctx.list_case(), Case::Nominative);
        assert_eq!(ctx.list_article(), ListArticle::Definite);
        assert!(ctx.participle().is_none());
    }

    #[test]
    fn setters_are_last_write_wins() {
        let mut ctx = GrammaticalContext::new();
        ctx.set_case(Case::Genitive);
        ctx.set_case(Case::Accusative);
        assert_eq!(ctx.case(), Case::Accusative);

        ctx.set_tense(Tense::Aoristos);
        ctx.set_tense(Tense::Parak);
        assert_eq!(ctx.tense(), Tense::Parak);
    }

    #[test]
    fn set_returns_previous_value() {
        let mut ctx = GrammaticalContext::new();
        let prev = ctx.set(FeatureValue::Tense(Tense::Ypers));
        assert_eq!(prev, FeatureValue::Tense(Tense::Present));
        assert_eq!(ctx.tense(), Tense::Ypers);
    }

    #[test]
    fn override_restores_on_success() {
        let mut ctx = GrammaticalContext::new();
        ctx.set_tense(Tense::Paratatikos);

        let out: Result<String, ()> = ctx.with_tense(Tense::Aoristos, |c| {
            assert_eq!(c.tense(), Tense::Aoristos);
            Ok("done".to_string())
        });

        assert_eq!(out.unwrap(), "done");
        assert_eq!(ctx.tense(), Tense::Paratatikos);
    }

    #[test]
    fn override_restores_on_failure() {
        let mut ctx = GrammaticalContext::new();
        ctx.set_case(Case::Dative);

        let out: Result<String, &str> = ctx.with_case(Case::Genitive, |_| Err("production failed"));

        assert!(out.is_err());
        assert_eq!(ctx.case(), Case::Dative);
    }

    #[test]
    fn overrides_nest() {
        let mut ctx = GrammaticalContext::new();
        let out: Result<(), ()> = ctx.with_tense(Tense::Aoristos, |c| {
            c.with_tense(Tense::ExFuture, |inner| {
                assert_eq!(inner.tense(), Tense::ExFuture);
                Ok(())
            })?;
            assert_eq!(c.tense(), Tense::Aoristos);
            Ok(())
        });
        assert!(out.is_ok());
        assert_eq!(ctx.tense(), Tense::Present);
    }

    #[test]
    fn override_is_per_dimension() {
        let mut ctx = GrammaticalContext::new();
        ctx.set_list_case(Case::Accusative);

        let _: Result<(), ()> = ctx.with_case(Case::Genitive, |c| {
            // The list-case dimension is untouched by a case override.
            assert_eq!(c.list_case(), Case::Accusative);
            Ok(())
        });
        assert_eq!(ctx.list_case(), Case::Accusative);
    }

    #[test]
    fn subject_tense_fallback() {
        let mut ctx = GrammaticalContext::new();
        ctx.set_tense(Tense::Present);
        ctx.set_subject_tense(SubjectId(1), Tense::Aoristos);

        assert_eq!(ctx.tense_for(SubjectId(1)), Tense::Aoristos);
        assert_eq!(ctx.tense_for(SubjectId(2)), Tense::Present);

        ctx.clear_subject_tense(SubjectId(1));
        assert_eq!(ctx.tense_for(SubjectId(1)), Tense::Present);
    }

    #[test]
    fn participle_stash() {
        let mut ctx = GrammaticalContext::new();
        ctx.set_participle("taken");
        assert_eq!(ctx.participle(), Some("taken"));
        ctx.set_participle("left");
        assert_eq!(ctx.participle(), Some("left"));
    }
}
