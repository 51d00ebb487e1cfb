// src/language/builtin.rs

use super::{Language, LanguageRegistry};
use crate::pathname::{basename, extname};
use once_cell::sync::Lazy;
use std::collections::HashMap;

struct LanguageDef {
    name: &'static str,
    lexer: &'static str,
    /// Other names the lexer answers to (interpreter names included).
    aliases: &'static [&'static str],
    extensions: &'static [&'static str],
    filenames: &'static [&'static str],
}

// Earlier entries win when an extension, alias or filename appears twice.
const LANGUAGES: &[LanguageDef] = &[
    LanguageDef {
        name: "Text",
        lexer: "text",
        aliases: &[],
        extensions: &[".txt"],
        filenames: &[],
    },
    LanguageDef {
        name: "Shell",
        lexer: "bash",
        aliases: &["sh", "ksh", "zsh", "dash", "ash", "shell"],
        extensions: &[".sh", ".bash", ".zsh", ".ksh"],
        filenames: &[".bashrc", ".bash_profile", ".zshrc", ".profile"],
    },
    LanguageDef {
        name: "Ruby",
        lexer: "ruby",
        aliases: &["rb", "duby", "jruby"],
        extensions: &[".rb", ".rake", ".gemspec", ".rbx", ".ru"],
        filenames: &["Rakefile", "Gemfile", "Guardfile", "Capfile", "Vagrantfile"],
    },
    LanguageDef {
        name: "Python",
        lexer: "python",
        aliases: &["py", "python2", "python3"],
        extensions: &[".py", ".pyw", ".pyi"],
        filenames: &["SConstruct", "SConscript", "wscript"],
    },
    LanguageDef {
        name: "JavaScript",
        lexer: "javascript",
        aliases: &["js"],
        extensions: &[".js", ".mjs", ".cjs"],
        filenames: &["Jakefile"],
    },
    LanguageDef {
        name: "TypeScript",
        lexer: "typescript",
        aliases: &["ts"],
        extensions: &[".ts", ".tsx"],
        filenames: &[],
    },
    LanguageDef {
        name: "CoffeeScript",
        lexer: "coffee-script",
        aliases: &["coffee"],
        extensions: &[".coffee"],
        filenames: &["Cakefile"],
    },
    LanguageDef {
        name: "Java",
        lexer: "java",
        aliases: &[],
        extensions: &[".java"],
        filenames: &[],
    },
    LanguageDef {
        name: "Groovy",
        lexer: "groovy",
        aliases: &[],
        extensions: &[".groovy", ".gradle"],
        filenames: &[],
    },
    LanguageDef {
        name: "Scala",
        lexer: "scala",
        aliases: &[],
        extensions: &[".scala", ".sbt"],
        filenames: &[],
    },
    LanguageDef {
        name: "Clojure",
        lexer: "clojure",
        aliases: &["clj"],
        extensions: &[".clj", ".cljs", ".cljc"],
        filenames: &[],
    },
    LanguageDef {
        name: "Perl",
        lexer: "perl",
        aliases: &["pl"],
        extensions: &[".pl", ".pm", ".t"],
        filenames: &[],
    },
    LanguageDef {
        name: "PHP",
        lexer: "php",
        aliases: &["php3", "php4", "php5"],
        extensions: &[".php", ".phtml"],
        filenames: &[],
    },
    LanguageDef {
        name: "Lua",
        lexer: "lua",
        aliases: &[],
        extensions: &[".lua"],
        filenames: &[],
    },
    LanguageDef {
        name: "Tcl",
        lexer: "tcl",
        aliases: &["tclsh", "wish"],
        extensions: &[".tcl"],
        filenames: &[],
    },
    LanguageDef {
        name: "Awk",
        lexer: "awk",
        aliases: &["gawk", "mawk", "nawk"],
        extensions: &[".awk"],
        filenames: &[],
    },
    LanguageDef {
        name: "Erlang",
        lexer: "erlang",
        aliases: &["erl", "escript"],
        extensions: &[".erl", ".hrl"],
        filenames: &["rebar.config"],
    },
    LanguageDef {
        name: "Elixir",
        lexer: "elixir",
        aliases: &["ex", "exs"],
        extensions: &[".ex", ".exs"],
        filenames: &[],
    },
    LanguageDef {
        name: "Haskell",
        lexer: "haskell",
        aliases: &["hs", "runhaskell"],
        extensions: &[".hs", ".lhs"],
        filenames: &[],
    },
    LanguageDef {
        name: "R",
        lexer: "r",
        aliases: &["rscript", "splus"],
        extensions: &[".r", ".R"],
        filenames: &[],
    },
    LanguageDef {
        name: "C",
        lexer: "c",
        aliases: &[],
        extensions: &[".c", ".h"],
        filenames: &[],
    },
    LanguageDef {
        name: "C++",
        lexer: "cpp",
        aliases: &["c++"],
        extensions: &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx"],
        filenames: &[],
    },
    LanguageDef {
        name: "Objective-C",
        lexer: "objective-c",
        aliases: &["objc", "obj-c"],
        extensions: &[".m"],
        filenames: &[],
    },
    LanguageDef {
        name: "Go",
        lexer: "go",
        aliases: &["golang"],
        extensions: &[".go"],
        filenames: &[],
    },
    LanguageDef {
        name: "Rust",
        lexer: "rust",
        aliases: &["rs"],
        extensions: &[".rs"],
        filenames: &[],
    },
    LanguageDef {
        name: "Swift",
        lexer: "swift",
        aliases: &[],
        extensions: &[".swift"],
        filenames: &[],
    },
    LanguageDef {
        name: "SQL",
        lexer: "sql",
        aliases: &[],
        extensions: &[".sql"],
        filenames: &[],
    },
    LanguageDef {
        name: "Gettext Catalog",
        lexer: "pot",
        aliases: &["po"],
        extensions: &[".po", ".pot"],
        filenames: &[],
    },
    LanguageDef {
        name: "Makefile",
        lexer: "make",
        aliases: &["makefile", "mf", "bsdmake"],
        extensions: &[".mak", ".mk"],
        filenames: &["Makefile", "GNUmakefile", "makefile"],
    },
    LanguageDef {
        name: "Dockerfile",
        lexer: "docker",
        aliases: &["dockerfile"],
        extensions: &[".dockerfile"],
        filenames: &["Dockerfile"],
    },
    LanguageDef {
        name: "HTML",
        lexer: "html",
        aliases: &[],
        extensions: &[".html", ".htm", ".xhtml"],
        filenames: &[],
    },
    LanguageDef {
        name: "CSS",
        lexer: "css",
        aliases: &[],
        extensions: &[".css"],
        filenames: &[],
    },
    LanguageDef {
        name: "XML",
        lexer: "xml",
        aliases: &[],
        extensions: &[".xml", ".xib", ".plist", ".xsd"],
        filenames: &[],
    },
    LanguageDef {
        name: "JSON",
        lexer: "json",
        aliases: &[],
        extensions: &[".json"],
        filenames: &[],
    },
    LanguageDef {
        name: "YAML",
        lexer: "yaml",
        aliases: &["yml"],
        extensions: &[".yml", ".yaml"],
        filenames: &[],
    },
    LanguageDef {
        name: "INI",
        lexer: "ini",
        aliases: &["cfg"],
        extensions: &[".ini", ".cfg"],
        filenames: &[".gitconfig", ".editorconfig"],
    },
    LanguageDef {
        name: "Markdown",
        lexer: "markdown",
        aliases: &["md"],
        extensions: &[".md", ".markdown", ".mkd"],
        filenames: &[],
    },
    LanguageDef {
        name: "Diff",
        lexer: "diff",
        aliases: &["udiff", "patch"],
        extensions: &[".diff", ".patch"],
        filenames: &[],
    },
    LanguageDef {
        name: "Batchfile",
        lexer: "bat",
        aliases: &["batch"],
        extensions: &[".bat", ".cmd"],
        filenames: &[],
    },
];

struct Index {
    by_name: HashMap<String, usize>,
    by_lexer: HashMap<String, usize>,
    by_extension: HashMap<&'static str, usize>,
    by_filename: HashMap<&'static str, usize>,
}

impl Index {
    fn build() -> Self {
        let mut index = Index {
            by_name: HashMap::new(),
            by_lexer: HashMap::new(),
            by_extension: HashMap::new(),
            by_filename: HashMap::new(),
        };
        for (i, def) in LANGUAGES.iter().enumerate() {
            index.by_name.entry(def.name.to_lowercase()).or_insert(i);
            for lexer in std::iter::once(&def.lexer).chain(def.aliases) {
                index.by_lexer.entry(lexer.to_lowercase()).or_insert(i);
            }
            for ext in def.extensions {
                index.by_extension.entry(*ext).or_insert(i);
            }
            for filename in def.filenames {
                index.by_filename.entry(*filename).or_insert(i);
            }
        }
        index
    }
}

static INDEX: Lazy<Index> = Lazy::new(Index::build);

fn language_at(i: usize) -> Language {
    let def = &LANGUAGES[i];
    Language::new(def.name, def.lexer)
}

/// The built-in language table.
///
/// Extension and filename lookups are exact (case-sensitive); name and lexer
/// lookups ignore case.
///
/// # Examples
///
/// ```
/// use blobkind::language::{BuiltinRegistry, LanguageRegistry};
///
/// let registry = BuiltinRegistry;
/// assert_eq!(registry.find_by_extension(".rb").unwrap().name(), "Ruby");
/// assert_eq!(registry.find_by_lexer("python").unwrap().name(), "Python");
/// assert_eq!(registry.find_by_path("Rakefile").name(), "Ruby");
/// assert!(registry.find_by_path("LICENSE").is_text());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRegistry;

impl LanguageRegistry for BuiltinRegistry {
    fn find_by_extension(&self, extension: &str) -> Option<Language> {
        if extension.is_empty() {
            return None;
        }
        INDEX.by_extension.get(extension).copied().map(language_at)
    }

    fn find_by_lexer(&self, name: &str) -> Option<Language> {
        INDEX
            .by_lexer
            .get(&name.to_lowercase())
            .copied()
            .map(language_at)
    }

    fn find_by_name(&self, name: &str) -> Option<Language> {
        INDEX
            .by_name
            .get(&name.to_lowercase())
            .copied()
            .map(language_at)
    }

    fn find_by_path(&self, path: &str) -> Language {
        INDEX
            .by_filename
            .get(basename(path))
            .copied()
            .map(language_at)
            .or_else(|| self.find_by_extension(extname(path)))
            .unwrap_or_else(Language::text)
    }
}
