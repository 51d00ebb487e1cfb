// src/resolution/interpreter.rs

use crate::language::{Language, LanguageRegistry};

/// Interpreter names whose language differs from (or is missing in) the
/// lexer table. Checked in order; exact, case-sensitive matches.
const INTERPRETER_ALIASES: &[(&str, &str)] = &[
    ("bash", "Shell"),
    ("sh", "Shell"),
    ("zsh", "Shell"),
    ("groovy", "Java"),
    ("macruby", "Ruby"),
    ("rake", "Ruby"),
    ("node", "JavaScript"),
];

/// Maps a shebang interpreter to a language.
///
/// Well-known aliases are checked first; anything else is looked up as a
/// lexer name in the registry. A "Text" result carries no information about
/// the script and is reported as no match.
///
/// # Examples
/// ```
/// use blobkind::language::BuiltinRegistry;
/// use blobkind::resolution::language_for_interpreter;
///
/// let registry = BuiltinRegistry;
/// assert_eq!(language_for_interpreter("node", &registry).unwrap().name(), "JavaScript");
/// assert_eq!(language_for_interpreter("python", &registry).unwrap().name(), "Python");
/// assert!(language_for_interpreter("unknownscript", &registry).is_none());
/// ```
pub fn language_for_interpreter(
    script: &str,
    registry: &dyn LanguageRegistry,
) -> Option<Language> {
    if let Some((_, name)) = INTERPRETER_ALIASES
        .iter()
        .find(|(interpreter, _)| *interpreter == script)
    {
        return registry.find_by_name(name);
    }

    registry
        .find_by_lexer(script)
        .filter(|language| !language.is_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::BuiltinRegistry;

    #[derive(Debug)]
    struct TextOnlyRegistry;

    impl LanguageRegistry for TextOnlyRegistry {
        fn find_by_extension(&self, _: &str) -> Option<Language> {
            None
        }
        fn find_by_lexer(&self, _: &str) -> Option<Language> {
            Some(Language::text())
        }
        fn find_by_name(&self, name: &str) -> Option<Language> {
            Some(Language::new(name, name.to_lowercase()))
        }
        fn find_by_path(&self, _: &str) -> Language {
            Language::text()
        }
    }

    #[test]
    fn test_alias_table() {
        let registry = BuiltinRegistry;
        let name = |script: &str| {
            language_for_interpreter(script, &registry).map(|l| l.name().to_string())
        };
        assert_eq!(name("bash").as_deref(), Some("Shell"));
        assert_eq!(name("sh").as_deref(), Some("Shell"));
        assert_eq!(name("zsh").as_deref(), Some("Shell"));
        assert_eq!(name("groovy").as_deref(), Some("Java"));
        assert_eq!(name("macruby").as_deref(), Some("Ruby"));
        assert_eq!(name("rake").as_deref(), Some("Ruby"));
        assert_eq!(name("node").as_deref(), Some("JavaScript"));
    }

    #[test]
    fn test_alias_table_is_case_sensitive() {
        // "Node" is not an alias and no lexer answers to it.
        assert!(language_for_interpreter("Node", &BuiltinRegistry).is_none());
    }

    #[test]
    fn test_registry_fallback() {
        let registry = BuiltinRegistry;
        assert_eq!(
            language_for_interpreter("perl", &registry).unwrap().name(),
            "Perl"
        );
        assert_eq!(
            language_for_interpreter("escript", &registry).unwrap().name(),
            "Erlang"
        );
    }

    #[test]
    fn test_text_is_never_a_shebang_language() {
        assert!(language_for_interpreter("text", &BuiltinRegistry).is_none());
        assert!(language_for_interpreter("anything", &TextOnlyRegistry).is_none());
        // Aliases do not go through the lexer lookup.
        assert_eq!(
            language_for_interpreter("node", &TextOnlyRegistry).unwrap().name(),
            "JavaScript"
        );
    }

    #[test]
    fn test_empty_script_has_no_language() {
        assert!(language_for_interpreter("", &BuiltinRegistry).is_none());
    }
}
