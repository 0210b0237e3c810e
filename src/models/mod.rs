pub mod implementations;
pub mod lexicon;

pub use implementations::{RuleBasedModel, RuleBasedOptions};
pub use lexicon::{Lexicon, WordClass};
