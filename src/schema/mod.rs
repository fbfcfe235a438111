pub mod features;
pub mod lexicon;
