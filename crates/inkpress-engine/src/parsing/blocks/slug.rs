use std::collections::HashMap;

/// Lowercases text, collapses runs of non-alphanumeric characters into
/// single hyphens, and trims leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Hands out heading anchor slugs, unique within one document.
/// Collisions get `-2`, `-3`, ... suffixes.
#[derive(Debug, Default)]
pub struct SlugCounter {
    seen: HashMap<String, usize>,
}

impl SlugCounter {
    pub fn assign(&mut self, heading_text: &str) -> String {
        let mut base = slugify(heading_text);
        if base.is_empty() {
            base = "section".to_string();
        }

        let count = {
            let c = self.seen.entry(base.clone()).or_insert(0);
            *c += 1;
            *c
        };
        if count == 1 {
            return base;
        }

        // Suffixed candidates can themselves collide with headings the
        // author literally numbered, so keep probing.
        let mut n = count;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.seen.contains_key(&candidate) {
                self.seen.insert(candidate.clone(), 1);
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basics() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & Me  "), "rust-me");
    }

    #[test]
    fn slugify_collapses_symbol_runs() {
        assert_eq!(slugify("a --- b"), "a-b");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Überblick"), "überblick");
    }

    #[test]
    fn collisions_get_numeric_suffixes() {
        let mut slugs = SlugCounter::default();
        assert_eq!(slugs.assign("Heading"), "heading");
        assert_eq!(slugs.assign("Heading"), "heading-2");
        assert_eq!(slugs.assign("Heading"), "heading-3");
    }

    #[test]
    fn suffix_collision_with_literal_heading_is_avoided() {
        let mut slugs = SlugCounter::default();
        assert_eq!(slugs.assign("Heading 2"), "heading-2");
        assert_eq!(slugs.assign("Heading"), "heading");
        assert_eq!(slugs.assign("Heading"), "heading-3");
    }

    #[test]
    fn symbol_only_heading_gets_fallback() {
        let mut slugs = SlugCounter::default();
        assert_eq!(slugs.assign("!!!"), "section");
        assert_eq!(slugs.assign("???"), "section-2");
    }
}
