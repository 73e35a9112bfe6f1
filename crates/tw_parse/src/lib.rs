pub mod modifiers;
pub mod parser;
pub mod types;

// Re-export main types
pub use modifiers::ModifierSorter;
pub use parser::ClassNameParser;
pub use types::{ParsedClassName, IMPORTANT_MODIFIER, MODIFIER_SEPARATOR, POSTFIX_SEPARATOR};
