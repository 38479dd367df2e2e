use std::fmt::Display;
use std::rc::Rc;

use crate::{Position, Span, MK_MATCH};

use super::pattern::ScanPattern;

#[derive(Debug, Clone)]
pub struct Match {
    pub token: String,
    pub span: Span,
}

impl Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match {{\ntoken: {},\nstart: {}}}", self.token, self.span.start.0)
    }
}

impl Match {
    pub fn debug(&self) {
        println!("{} ({}..{})", self.token, self.span.start.0, self.span.end.0);
    }
}

pub fn scan(source: &str, pattern: &ScanPattern, file: Option<String>) -> Vec<Match> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("<text>"))
    };

    let mut matches = vec![];

    for captures in pattern.regex().captures_iter(source) {
        // Group 1 always exists, the pattern carries exactly one group.
        let token = captures.get(1).unwrap();

        // The span covers the captured identifier, not the keyword.
        matches.push(MK_MATCH!(
            String::from(token.as_str()),
            Span {
                start: Position(token.start() as u32, Rc::clone(&file_name)),
                end: Position(token.end() as u32, Rc::clone(&file_name)),
            }
        ));
    }

    matches
}
