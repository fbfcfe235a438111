/// Narration example — resolving agreed forms while composing a short
/// passage: ambient tense, one scoped flashback, and auxiliary elision
/// across a coordinated clause.
///
/// Run with: cargo run --example narration
use agreement_engine::core::conjugation::{emit, ConjugationState};
use agreement_engine::core::context::{GrammaticalContext, SubjectId};
use agreement_engine::core::resolver;
use agreement_engine::schema::features::{Case, PersonNumber, Tense};
use agreement_engine::schema::lexicon::{FeatureKey, LexicalEntry, PartOfSpeech};

fn main() {
    // --- A tiny in-memory lexicon ---
    let verb_key = |tense: Tense, person: PersonNumber| FeatureKey {
        tense: Some(tense),
        person: Some(person),
        ..Default::default()
    };
    let noun_key = |case: Case| FeatureKey {
        case: Some(case),
        person: Some(PersonNumber::NeuterSingular),
        ..Default::default()
    };

    let take = LexicalEntry::new("take", PartOfSpeech::Verb)
        .with_base("take")
        .with_form(
            verb_key(Tense::Present, PersonNumber::MasculineSingular),
            "takes",
        )
        .with_form(
            verb_key(Tense::Aoristos, PersonNumber::MasculineSingular),
            "took",
        )
        .with_form(verb_key(Tense::Parak, PersonNumber::MasculineSingular), "has");

    let book = LexicalEntry::new("book", PartOfSpeech::Noun)
        .with_base("book")
        .with_form(noun_key(Case::Nominative), "book")
        .with_form(noun_key(Case::Accusative), "book");

    // --- Session context: protagonist narrates in past tense ---
    let mut ctx = GrammaticalContext::new();
    let hero = SubjectId(1);
    ctx.set_subject_tense(hero, Tense::Aoristos);

    let verb = resolver::resolve_for(&take, &ctx, hero, PersonNumber::MasculineSingular)
        .expect("verb resolution failed");
    let object = ctx
        .with_case(Case::Accusative, |c| resolver::resolve(&book, c))
        .expect("noun resolution failed");
    println!("He {} the {}.", verb, object);

    // --- A flashback clause in pluperfect, scoped ---
    let flashback = ctx
        .with_tense(Tense::Parak, |c| {
            resolver::resolve_with(&take, c, PersonNumber::MasculineSingular)
        })
        .expect("flashback resolution failed");
    println!("(He {} taken it before — ambient tense is still {:?}.)", flashback, ctx.tense());

    // --- Auxiliary elision across a coordinated clause ---
    let mut state = ConjugationState::new();
    let first = emit("taken", "has", &mut state, &mut ctx);
    let second = emit("left", "has", &mut state, &mut ctx);
    println!(
        "He {} taken the book and{} left. (second auxiliary elided: {})",
        first,
        if second.is_empty() { "" } else { " has" },
        second.is_empty()
    );
}
