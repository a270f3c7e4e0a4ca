// crates/gitignore/src/glob.rs
//! Shell-style matching of a single path segment.
//!
//! Supports `*`, `?`, bracket classes (with `!`/`^` negation, ranges and
//! POSIX named classes) and backslash escapes. A glob that cannot be
//! tokenized is kept but never matches anything.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Posix {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Xdigit,
}

impl Posix {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "alnum" => Posix::Alnum,
            "alpha" => Posix::Alpha,
            "blank" => Posix::Blank,
            "cntrl" => Posix::Cntrl,
            "digit" => Posix::Digit,
            "graph" => Posix::Graph,
            "lower" => Posix::Lower,
            "print" => Posix::Print,
            "punct" => Posix::Punct,
            "space" => Posix::Space,
            "upper" => Posix::Upper,
            "xdigit" => Posix::Xdigit,
            _ => return None,
        })
    }

    fn contains(self, c: char) -> bool {
        match self {
            Posix::Alnum => c.is_ascii_alphanumeric(),
            Posix::Alpha => c.is_ascii_alphabetic(),
            Posix::Blank => c == ' ' || c == '\t',
            Posix::Cntrl => c.is_ascii_control(),
            Posix::Digit => c.is_ascii_digit(),
            Posix::Graph => c.is_ascii_graphic(),
            Posix::Lower => c.is_ascii_lowercase(),
            Posix::Print => c.is_ascii_graphic() || c == ' ',
            Posix::Punct => c.is_ascii_punctuation(),
            Posix::Space => matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'),
            Posix::Upper => c.is_ascii_uppercase(),
            Posix::Xdigit => c.is_ascii_hexdigit(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
    Named(Posix),
}

impl ClassItem {
    fn contains(&self, c: char) -> bool {
        match *self {
            ClassItem::Char(x) => x == c,
            ClassItem::Range(lo, hi) => lo <= c && c <= hi,
            ClassItem::Named(class) => class.contains(c),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnyRun,
    Class { negated: bool, items: Vec<ClassItem> },
}

impl Token {
    fn accepts(&self, c: char) -> bool {
        match self {
            Token::Literal(x) => *x == c,
            Token::AnyChar => true,
            Token::AnyRun => true,
            Token::Class { negated, items } => items.iter().any(|i| i.contains(c)) != *negated,
        }
    }
}

/// A compiled single-segment glob.
#[derive(Clone, PartialEq, Eq)]
pub struct Glob {
    source: String,
    tokens: Option<Vec<Token>>,
}

impl Glob {
    /// Compile `source`. Never fails; malformed input yields a glob that
    /// matches nothing.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            tokens: tokenize(source),
        }
    }

    /// The glob text as written in the rule.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// False when the source had an unterminated class, an unknown named
    /// class or a dangling escape.
    pub fn is_valid(&self) -> bool {
        self.tokens.is_some()
    }

    /// Test one path segment against the glob.
    pub fn is_match(&self, name: &str) -> bool {
        match &self.tokens {
            Some(tokens) => match_tokens(tokens, name),
            None => false,
        }
    }
}

impl fmt::Debug for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Glob").field(&self.source).finish()
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// True if `seg` holds an unescaped `**` but is not exactly `**`.
pub fn has_fused_double_star(seg: &str) -> bool {
    if seg == "**" {
        return false;
    }
    let mut prev_star = false;
    let mut chars = seg.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
                prev_star = false;
            }
            '*' if prev_star => return true,
            '*' => prev_star = true,
            _ => prev_star = false,
        }
    }
    false
}

fn tokenize(pat: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = pat.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let escaped = *chars.get(i + 1)?;
                tokens.push(Token::Literal(escaped));
                i += 2;
            }
            '?' => {
                tokens.push(Token::AnyChar);
                i += 1;
            }
            '*' => {
                // consecutive stars collapse into one run
                if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
                i += 1;
            }
            '[' => {
                let (token, next) = parse_class(&chars, i + 1)?;
                tokens.push(token);
                i = next;
            }
            c => {
                tokens.push(Token::Literal(c));
                i += 1;
            }
        }
    }
    Some(tokens)
}

// Parses a bracket class body starting right after `[`. Returns the token and
// the index just past the closing `]`.
fn parse_class(chars: &[char], mut i: usize) -> Option<(Token, usize)> {
    let mut negated = false;
    if matches!(chars.get(i), Some('!') | Some('^')) {
        negated = true;
        i += 1;
    }
    let mut items = Vec::new();
    let mut first = true;
    loop {
        let c = *chars.get(i)?;
        if c == ']' && !first {
            return Some((Token::Class { negated, items }, i + 1));
        }
        first = false;

        if c == '[' && chars.get(i + 1) == Some(&':') {
            let start = i + 2;
            let len = chars[start..]
                .windows(2)
                .position(|w| w[0] == ':' && w[1] == ']')?;
            let name: String = chars[start..start + len].iter().collect();
            items.push(ClassItem::Named(Posix::from_name(&name)?));
            i = start + len + 2;
            continue;
        }

        let (lo, after) = class_char(chars, i)?;
        if chars.get(after) == Some(&'-') && chars.get(after + 1).is_some_and(|&n| n != ']') {
            let (hi, next) = class_char(chars, after + 1)?;
            items.push(ClassItem::Range(lo, hi));
            i = next;
        } else {
            items.push(ClassItem::Char(lo));
            i = after;
        }
    }
}

fn class_char(chars: &[char], i: usize) -> Option<(char, usize)> {
    match *chars.get(i)? {
        '\\' => chars.get(i + 1).map(|&c| (c, i + 2)),
        c => Some((c, i + 1)),
    }
}

// Iterative wildcard matching: on mismatch, fall back to the most recent `*`
// and let it swallow one more character.
fn match_tokens(tokens: &[Token], name: &str) -> bool {
    let text: Vec<char> = name.chars().collect();
    let (mut t, mut s) = (0usize, 0usize);
    let mut backtrack: Option<(usize, usize)> = None;

    while s < text.len() {
        match tokens.get(t) {
            Some(Token::AnyRun) => {
                backtrack = Some((t, s));
                t += 1;
                continue;
            }
            Some(tok) if tok.accepts(text[s]) => {
                t += 1;
                s += 1;
                continue;
            }
            _ => {}
        }
        match backtrack {
            Some((star, from)) => {
                t = star + 1;
                s = from + 1;
                backtrack = Some((star, from + 1));
            }
            None => return false,
        }
    }

    tokens[t..].iter().all(|tok| *tok == Token::AnyRun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_wildcards() {
        assert!(Glob::new("value").is_match("value"));
        assert!(!Glob::new("val").is_match("value"));
        assert!(Glob::new("v*o").is_match("vulkano"));
        assert!(Glob::new("*").is_match(""));
        assert!(Glob::new("vul?ano").is_match("vulkano"));
        assert!(!Glob::new("vul?ano").is_match("vulano"));
        assert!(Glob::new("*.rs").is_match("main.rs"));
        assert!(!Glob::new("*.rs").is_match("main.rsx"));
        assert!(Glob::new("a*b*c").is_match("aXbYbZc"));
    }

    #[test]
    fn classes() {
        let g = Glob::new("v[ou]l[kc]ano");
        assert!(g.is_match("volcano"));
        assert!(g.is_match("vulkano"));
        assert!(!g.is_match("valcano"));
        assert!(Glob::new("file[0-9]").is_match("file7"));
        assert!(!Glob::new("file[!0-9]").is_match("file7"));
        assert!(Glob::new("file[^0-9]").is_match("filex"));
        assert!(Glob::new("[]]").is_match("]"));
        assert!(Glob::new("[a-]").is_match("-"));
        assert!(Glob::new("x[[:digit:]]").is_match("x4"));
        assert!(!Glob::new("x[[:upper:]]").is_match("xa"));
    }

    #[test]
    fn escapes() {
        assert!(Glob::new("\\*").is_match("*"));
        assert!(!Glob::new("\\*").is_match("a"));
        assert!(Glob::new("\\#notes").is_match("#notes"));
        assert!(Glob::new("trail\\ ").is_match("trail "));
        assert!(Glob::new("[\\]]").is_match("]"));
    }

    #[test]
    fn malformed_never_matches() {
        for src in ["v[ou]l[", "[", "x[[:nope:]]", "tail\\"] {
            let g = Glob::new(src);
            assert!(!g.is_valid(), "{src}");
            assert!(!g.is_match(src));
            assert_eq!(g.as_str(), src);
        }
        assert!(!Glob::new("v[ou]l[").is_match("vol["));
    }

    #[test]
    fn fused_double_star() {
        assert!(!has_fused_double_star("**"));
        assert!(!has_fused_double_star("*a*"));
        assert!(has_fused_double_star("**foo"));
        assert!(has_fused_double_star("a***"));
        assert!(!has_fused_double_star("\\**"));
    }
}
