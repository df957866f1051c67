//! Skill name canonicalization
//!
//! Candidate and job skills are free text; two names compare equal iff their
//! normalized forms are equal. The alias table below is the versioned synonym
//! dictionary; keep it alongside its tests when adding entries.

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Alias -> canonical skill mapping. Every canonical maps to itself so the
/// table doubles as the canonical vocabulary.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // JavaScript ecosystem
        ("javascript", &["js", "java script", "ecmascript", "es6", "es2015"]),
        ("typescript", &["ts", "type script"]),
        ("nodejs", &["node.js", "node js", "node"]),
        ("react", &["reactjs", "react.js", "react js"]),
        ("vue", &["vue.js", "vuejs", "vue js"]),
        ("angular", &["angularjs", "angular.js"]),
        ("nextjs", &["next.js", "next js"]),
        ("svelte", &["sveltejs", "svelte.js"]),
        // Styling
        ("css", &["css3", "cascading style sheets"]),
        ("sass", &["scss"]),
        ("tailwind", &["tailwindcss", "tailwind css"]),
        // Backend frameworks
        ("express", &["express.js", "expressjs", "express js"]),
        ("django", &["django rest framework", "drf"]),
        ("spring", &["spring boot", "springboot", "spring framework"]),
        ("rails", &["ruby on rails", "ror"]),
        ("dotnet", &[".net", "dot net", "asp.net", "aspnet"]),
        // Languages
        ("python", &["python3", "python 3", "py"]),
        ("golang", &["go", "go lang"]),
        ("csharp", &["c#", "c sharp"]),
        ("cplusplus", &["c++", "cpp", "c plus plus"]),
        ("java", &["java8", "java11", "java17", "openjdk"]),
        ("ruby", &["ruby lang"]),
        ("rust", &["rust lang", "rust language"]),
        ("php", &["php7", "php8"]),
        // Databases
        ("postgresql", &["postgres", "postgre sql", "pg"]),
        ("mysql", &["my sql", "mariadb"]),
        ("mongodb", &["mongo", "mongo db"]),
        ("redis", &["redis cache"]),
        ("elasticsearch", &["elastic search"]),
        ("sqlite", &["sqlite3", "sql lite"]),
        ("sql", &["structured query language"]),
        // Cloud & DevOps
        ("aws", &["amazon web services", "amazon aws"]),
        ("gcp", &["google cloud platform", "google cloud"]),
        ("azure", &["microsoft azure", "ms azure"]),
        ("kubernetes", &["k8s", "kube"]),
        ("docker", &["docker container", "containerization"]),
        ("terraform", &["tf", "infrastructure as code", "iac"]),
        ("jenkins", &["jenkins ci"]),
        ("git", &["git scm", "version control"]),
        ("cicd", &["ci/cd", "ci cd", "continuous integration"]),
        // Data & ML tooling (as skills, not as engine features)
        ("pandas", &["python pandas"]),
        ("numpy", &["numerical python"]),
        ("spark", &["apache spark"]),
        ("kafka", &["apache kafka"]),
        ("tensorflow", &["tensor flow"]),
        ("pytorch", &["py torch", "torch"]),
        // Mobile
        ("reactnative", &["react native", "react-native"]),
        ("flutter", &["flutter framework"]),
        ("swift", &["ios swift"]),
        ("kotlin", &["kotlin jvm"]),
        // APIs
        ("graphql", &["graph ql"]),
        ("rest", &["rest api", "restful", "restful api"]),
        ("grpc", &["g rpc"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Same table keyed by separator-stripped form, so "React JS", "react-js"
/// and "reactjs" all resolve without separate entries.
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

/// Case-insensitive automaton over every alias, used to spot a known skill
/// embedded in a longer free-text entry ("5 years of React.js development").
static EMBEDDED_MATCHER: LazyLock<(AhoCorasick, Vec<&'static str>)> = LazyLock::new(|| {
    let mut patterns: Vec<&'static str> = Vec::new();
    let mut canonicals: Vec<&'static str> = Vec::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        // Short aliases ("go", "ts", "pg") are too ambiguous inside prose.
        if alias.len() >= 4 {
            patterns.push(alias);
            canonicals.push(canonical);
        }
    }
    let matcher = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(&patterns)
        .expect("static alias patterns are valid");
    (matcher, canonicals)
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Role-token synonyms for title comparison: job boards use "developer",
/// "engineer", and "programmer" interchangeably.
static ROLE_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("developer", "engineer"),
        ("dev", "engineer"),
        ("programmer", "engineer"),
        ("coder", "engineer"),
        ("frontend", "frontend"),
        ("front", "frontend"),
        ("backend", "backend"),
        ("back", "backend"),
        ("fullstack", "fullstack"),
    ])
});

fn lower_trim_collapse(input: &str) -> String {
    WHITESPACE
        .replace_all(input.trim(), " ")
        .to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ',' | '+'))
        .collect()
}

fn lookup(token: &str) -> Option<&'static str> {
    if token.is_empty() {
        return None;
    }
    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some(canonical);
    }
    COMPACT_ALIAS_TO_CANONICAL.get(&compact_key(token)).copied()
}

/// Find a known alias embedded in a longer entry, requiring word boundaries
/// so "javascripter" does not resolve to "javascript".
fn find_embedded(cleaned: &str) -> Option<&'static str> {
    let (matcher, canonicals) = &*EMBEDDED_MATCHER;
    let bytes = cleaned.as_bytes();

    for mat in matcher.find_iter(cleaned) {
        let before_ok = mat.start() == 0 || !bytes[mat.start() - 1].is_ascii_alphanumeric();
        let after_ok = mat.end() == bytes.len() || !bytes[mat.end()].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return Some(canonicals[mat.pattern().as_usize()]);
        }
    }
    None
}

/// Canonicalize a free-text skill name.
///
/// Lowercases, trims, collapses whitespace, resolves synonyms through the
/// alias table, and falls back to separator stripping for unknown names.
/// Idempotent; empty or whitespace-only input yields the empty string.
pub fn normalize(name: &str) -> String {
    let cleaned = lower_trim_collapse(name);
    if cleaned.is_empty() {
        return String::new();
    }

    if let Some(canonical) = lookup(&cleaned) {
        return canonical.to_string();
    }

    // Composite entries: try parts split on list separators first, then a
    // boundary-checked scan for an embedded alias.
    for segment in cleaned.split(['/', ',', ';', '|']) {
        if let Some(canonical) = lookup(segment.trim()) {
            return canonical.to_string();
        }
    }
    if let Some(canonical) = find_embedded(&cleaned) {
        return canonical.to_string();
    }

    // Unknown skill: keep it comparable by dropping the separators commonly
    // used as cosmetic punctuation ("react.js" style), preserving hyphens.
    cleaned.replace(['.', '/'], "")
}

/// Normalize a collection of skill names into a set, dropping entries that
/// normalize to the empty string.
pub fn normalize_set<'a, I>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Map a lowercase title token through the role-synonym table.
pub fn normalize_role_token(token: &str) -> &str {
    ROLE_SYNONYMS.get(token).copied().unwrap_or(token)
}
