use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, path::Path};

pub const DEFAULT_KEYWORD: &str = "fun";

lazy_static! {
    pub static ref EXTENSION_KEYWORDS: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("kt", "fun");
        map.insert("kts", "fun");
        map.insert("rs", "fn");
        map.insert("py", "def");
        map.insert("go", "func");
        map.insert("swift", "func");
        map.insert("js", "function");
        map.insert("ts", "function");
        map
    };
}

#[derive(Debug, Clone)]
pub struct ScanPattern {
    regex: Regex,
    keyword: String,
}

impl ScanPattern {
    // Keyword at a word boundary, whitespace, one captured identifier.
    // The keyword is regex-escaped, so construction never fails.
    pub fn for_keyword(keyword: &str) -> ScanPattern {
        let regex = Regex::new(&format!(r"\b{}\s+(\w+)", regex::escape(keyword))).unwrap();

        ScanPattern {
            regex,
            keyword: String::from(keyword),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Default for ScanPattern {
    fn default() -> Self {
        ScanPattern::for_keyword(DEFAULT_KEYWORD)
    }
}

pub fn keyword_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|extension| extension.to_str())
        .and_then(|extension| EXTENSION_KEYWORDS.get(extension).copied())
        .unwrap_or(DEFAULT_KEYWORD)
}
