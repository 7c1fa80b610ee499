pub mod chain_resolver;
pub mod negative_answer;
pub mod wildcard_locator;

pub use chain_resolver::ChainResolver;
pub use negative_answer::NegativeAnswerBuilder;
pub use wildcard_locator::WildcardLocator;
