// nested value model and dotted-path lookup
mod nested;
// counted key/value store
mod path_dictionary;

pub use nested::{path_get, path_lookup, NestedValue};
pub use path_dictionary::PathDictionary;
