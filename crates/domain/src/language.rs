use std::{collections::HashMap, sync::LazyLock};

use project_stats_shared_kernel::FileExtension;

/// One row of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRule {
    pub ext: &'static str,
    pub name: &'static str,
}

const fn rule(ext: &'static str, name: &'static str) -> LanguageRule {
    LanguageRule { ext, name }
}

/// Recognised extensions. Matching is case-sensitive, hence both `.r` and `.R`.
pub const LANGUAGE_RULES: &[LanguageRule] = &[
    rule(".py", "Python"),
    rule(".js", "JavaScript"),
    rule(".ts", "TypeScript"),
    rule(".tsx", "TypeScript (TSX)"),
    rule(".jsx", "JavaScript (JSX)"),
    rule(".html", "HTML"),
    rule(".htm", "HTML"),
    rule(".css", "CSS"),
    rule(".scss", "SCSS"),
    rule(".sass", "Sass"),
    rule(".less", "Less"),
    rule(".java", "Java"),
    rule(".c", "C"),
    rule(".cpp", "C++"),
    rule(".h", "C/C++ Header"),
    rule(".hpp", "C++ Header"),
    rule(".cs", "C#"),
    rule(".go", "Go"),
    rule(".rs", "Rust"),
    rule(".rb", "Ruby"),
    rule(".php", "PHP"),
    rule(".swift", "Swift"),
    rule(".kt", "Kotlin"),
    rule(".scala", "Scala"),
    rule(".r", "R"),
    rule(".R", "R"),
    rule(".sql", "SQL"),
    rule(".sh", "Shell"),
    rule(".bash", "Bash"),
    rule(".ps1", "PowerShell"),
    rule(".json", "JSON"),
    rule(".xml", "XML"),
    rule(".yaml", "YAML"),
    rule(".yml", "YAML"),
    rule(".md", "Markdown"),
    rule(".txt", "Text"),
    rule(".vue", "Vue"),
    rule(".svelte", "Svelte"),
];

static BUILTIN: LazyLock<LanguageTable> = LazyLock::new(|| LanguageTable::from_rules(LANGUAGE_RULES));

/// Read-only lookup from extension to language name.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    by_ext: HashMap<&'static str, &'static str>,
}

impl LanguageTable {
    /// The compiled-in table shared by every entry point.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn from_rules(rules: &[LanguageRule]) -> Self {
        Self { by_ext: rules.iter().map(|r| (r.ext, r.name)).collect() }
    }

    pub fn language_of(&self, ext: &FileExtension) -> Option<&'static str> {
        self.by_ext.get(ext.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_ext.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ext.is_empty()
    }
}
