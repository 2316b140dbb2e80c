//! Pattern compilation and the process-wide compiled-pattern cache.

mod lexer;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::locale;
use crate::Error;

pub(crate) use lexer::{lex, Segment};

/// A lexed pattern, ready for rendering without re-lexing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct CompiledPattern {
    /// Ordered literal and field segments.
    pub(crate) segments: Vec<Segment>,
    /// Index of the first segment repeating an earlier field, used to halve
    /// interval patterns. `None` for ordinary patterns.
    pub(crate) split: Option<usize>,
}

impl CompiledPattern {
    /// The two halves of an interval pattern, if it has a repeated field.
    pub(crate) fn halves(&self) -> Option<(&[Segment], &[Segment])> {
        self.split.map(|at| self.segments.split_at(at))
    }
}

/// Compile a pattern string.
pub(crate) fn compile(pattern: &str) -> Result<CompiledPattern, Error> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }
    let segments = lex(pattern)?;
    let split = split_index(&segments);
    Ok(CompiledPattern { segments, split })
}

/// Find the first segment whose field class already occurred.
///
/// The four hour symbols count as one class, so `"h:mm – h:mm a"` splits at
/// the second `h` and `"HH:mm – HH:mm"` at the second `HH`.
fn split_index(segments: &[Segment]) -> Option<usize> {
    let mut seen = [false; 128];
    for (index, segment) in segments.iter().enumerate() {
        if let Segment::Field { symbol, .. } = segment {
            let class = match symbol {
                'h' | 'H' | 'K' | 'k' => 'h',
                other => *other,
            };
            let slot = &mut seen[class as usize % 128];
            if *slot {
                return Some(index);
            }
            *slot = true;
        }
    }
    None
}

/// Fetch a compiled pattern from the process-wide cache, compiling on miss.
///
/// The cache is primed with every pattern the built-in locale data declares,
/// so standard, available and interval formats never compile during a
/// formatting call; ad-hoc caller patterns are interned on first use.
pub(crate) fn compiled(pattern: &str) -> Result<Arc<CompiledPattern>, Error> {
    static CACHE: OnceLock<Mutex<HashMap<String, Arc<CompiledPattern>>>> = OnceLock::new();

    let cache = CACHE.get_or_init(|| Mutex::new(prime()));
    let mut map = cache.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(hit) = map.get(pattern) {
        return Ok(Arc::clone(hit));
    }
    let entry = Arc::new(compile(pattern)?);
    map.insert(pattern.into(), Arc::clone(&entry));
    Ok(entry)
}

/// Eagerly compile the fixed universe of locale-declared patterns.
fn prime() -> HashMap<String, Arc<CompiledPattern>> {
    let mut map = HashMap::new();
    for pattern in locale::declared_patterns() {
        if let Ok(entry) = compile(pattern) {
            map.insert(pattern.to_owned(), Arc::new(entry));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_empty_pattern() {
        assert_eq!(compile(""), Err(Error::EmptyPattern));
    }

    #[test]
    fn test_compile_bad_quote() {
        assert_eq!(compile("h 'oops"), Err(Error::BadQuote));
    }

    #[test]
    fn test_split_index() {
        let halved = compile("h:mm – h:mm a").unwrap();
        let (left, right) = halved.halves().unwrap();
        assert_eq!(left.len(), 4);
        assert!(matches!(right[0], Segment::Field { symbol: 'h', .. }));

        let mixed_hours = compile("HH:mm – h:mm a").unwrap();
        assert!(mixed_hours.split.is_some());

        let plain = compile("EEEE, MMMM d, y").unwrap();
        assert_eq!(plain.split, None);
    }

    #[test]
    fn test_split_keeps_joining_literal_on_the_left() {
        let compiled = compile("MMM d – d, y").unwrap();
        let (left, right) = compiled.halves().unwrap();
        assert!(matches!(left.last(), Some(Segment::Literal(text)) if text == " – "));
        assert!(matches!(right.first(), Some(Segment::Field { symbol: 'd', .. })));
    }

    #[test]
    fn test_compiled_interns() {
        let a = compiled("yyyy-MM-dd").unwrap();
        let b = compiled("yyyy-MM-dd").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
