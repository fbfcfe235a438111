/// Lexicon Linter — validates inflection coverage ahead of narration.
///
/// Usage: lexicon_linter <lexicon_path> [--allow-base-fallback]
///
/// A combination that cannot resolve at all is an authoring bug and is
/// reported as an error; a combination that only resolves through the
/// base form is reported as a warning (or suppressed with
/// --allow-base-fallback).
use agreement_engine::core::context::GrammaticalContext;
use agreement_engine::core::resolver::{self, ResolveError};
use agreement_engine::schema::features::{Case, ListArticle, PersonNumber, Tense};
use agreement_engine::schema::lexicon::{LexicalEntry, Lexicon, PartOfSpeech};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: lexicon_linter <lexicon_path> [--allow-base-fallback]");
        process::exit(0);
    }

    let lexicon_path = &args[1];
    let allow_base = args.iter().any(|a| a == "--allow-base-fallback");

    let mut lexicon = Lexicon::default();
    let path = Path::new(lexicon_path);

    if path.is_file() {
        match Lexicon::load_from_ron(path) {
            Ok(lex) => lexicon.merge(lex),
            Err(e) => {
                eprintln!("ERROR: Failed to load lexicon file: {}", e);
                process::exit(1);
            }
        }
    } else if path.is_dir() {
        load_lexicons_recursive(path, &mut lexicon);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", lexicon_path);
        process::exit(1);
    }

    println!("Loaded {} lexical entries", lexicon.entries.len());

    let (errors, warnings) = lint_lexicon(&lexicon);

    println!("\n=== Lexicon Lint Report ===\n");

    if errors.is_empty() && (allow_base || warnings.is_empty()) {
        println!("All checks passed!");
    }

    if !allow_base {
        for warning in &warnings {
            println!("WARNING: {}", warning);
        }
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        if allow_base { 0 } else { warnings.len() }
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn load_lexicons_recursive(dir: &Path, lexicon: &mut Lexicon) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("ERROR: Cannot read directory '{}': {}", dir.display(), e);
            process::exit(1);
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            load_lexicons_recursive(&path, lexicon);
        } else if path.extension().map(|e| e == "ron").unwrap_or(false) {
            match Lexicon::load_from_ron(&path) {
                Ok(lex) => lexicon.merge(lex),
                Err(e) => {
                    eprintln!("ERROR: Failed to load '{}': {}", path.display(), e);
                    process::exit(1);
                }
            }
        }
    }
}

/// Walk every feature combination relevant to each entry's part of
/// speech and classify the outcome.
fn lint_lexicon(lexicon: &Lexicon) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut roots: Vec<&String> = lexicon.entries.keys().collect();
    roots.sort();

    for root in roots {
        let entry = &lexicon.entries[root];
        for ctx in contexts_for(entry) {
            match resolver::resolve(entry, &ctx) {
                Ok(form) => {
                    if entry.base.as_deref() == Some(form.as_str())
                        && !resolves_without_base(entry, &ctx)
                    {
                        warnings.push(format!(
                            "'{}' falls back to base form under {}",
                            root,
                            describe(entry, &ctx)
                        ));
                    }
                }
                Err(ResolveError::MissingInflection { key, .. }) => {
                    errors.push(format!("'{}' has no inflection for {}", root, key));
                }
            }
        }
    }

    (errors, warnings)
}

fn resolves_without_base(entry: &LexicalEntry, ctx: &GrammaticalContext) -> bool {
    let mut stripped = entry.clone();
    stripped.base = None;
    resolver::resolve(&stripped, ctx).is_ok()
}

/// Every context the lint grid visits for this entry. Person/number is
/// left at the neuter default; per-person gaps still surface through
/// the per-tense and per-case sweep.
fn contexts_for(entry: &LexicalEntry) -> Vec<GrammaticalContext> {
    let mut contexts = Vec::new();
    match entry.part_of_speech {
        PartOfSpeech::Noun => {
            for case in Case::ALL {
                let mut ctx = GrammaticalContext::new();
                ctx.set_case(case);
                contexts.push(ctx);
            }
        }
        PartOfSpeech::Verb => {
            for tense in Tense::ALL {
                let mut ctx = GrammaticalContext::new();
                ctx.set_tense(tense);
                contexts.push(ctx);
            }
        }
        PartOfSpeech::Article => {
            for case in Case::ALL {
                for article in ListArticle::ALL {
                    let mut ctx = GrammaticalContext::new();
                    ctx.set_list_case(case);
                    ctx.set_list_article(article);
                    contexts.push(ctx);
                }
            }
        }
    }
    contexts
}

fn describe(entry: &LexicalEntry, ctx: &GrammaticalContext) -> String {
    match entry.part_of_speech {
        PartOfSpeech::Noun => format!("{}+person:{:?}", ctx.case().tag(), PersonNumber::default()),
        PartOfSpeech::Verb => format!("{}+person:{:?}", ctx.tense().tag(), PersonNumber::default()),
        PartOfSpeech::Article => format!(
            "{}+article:{:?}",
            ctx.list_case().tag(),
            ctx.list_article()
        ),
    }
}
