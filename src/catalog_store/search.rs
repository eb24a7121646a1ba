//! Fuzzy full-text matching for product search.
//!
//! A query is split into lowercase terms. Each term is compared against the words of
//! a product's name and description, allowing a number of edits that grows with the
//! term's length:
//!
//! | term length | edits allowed |
//! |-------------|---------------|
//! | 1-2         | 0             |
//! | 3-5         | 1             |
//! | 6+          | 2             |
//!
//! A product matches when any term matches. Exact hits score higher than fuzzy ones,
//! and a hit in the name scores higher than one found only in the description.

const EXACT_NAME: u32 = 4;
const EXACT_DESCRIPTION: u32 = 3;
const FUZZY_NAME: u32 = 2;
const FUZZY_DESCRIPTION: u32 = 1;

/// A parsed search query, used as the catalog store's query filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            terms: tokenize(query).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Relevance of a document with the given fields; `None` when no term matches.
    pub fn score(&self, name: &str, description: &str) -> Option<u32> {
        let name_words: Vec<String> = tokenize(name).collect();
        let description_words: Vec<String> = tokenize(description).collect();

        let total: u32 = self
            .terms
            .iter()
            .map(|term| {
                let max_edits = fuzziness(term);
                let in_name = best_hit(term, &name_words, max_edits);
                let in_description = best_hit(term, &description_words, max_edits);
                let name_score = match in_name {
                    Some(Hit::Exact) => EXACT_NAME,
                    Some(Hit::Fuzzy) => FUZZY_NAME,
                    None => 0,
                };
                let description_score = match in_description {
                    Some(Hit::Exact) => EXACT_DESCRIPTION,
                    Some(Hit::Fuzzy) => FUZZY_DESCRIPTION,
                    None => 0,
                };
                name_score.max(description_score)
            })
            .sum();

        (total > 0).then_some(total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Exact,
    Fuzzy,
}

fn best_hit(term: &str, words: &[String], max_edits: usize) -> Option<Hit> {
    let mut best = None;
    for word in words {
        if word == term {
            return Some(Hit::Exact);
        }
        if max_edits > 0 && edit_distance_within(term, word, max_edits) {
            best = Some(Hit::Fuzzy);
        }
    }
    best
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

/// Edits allowed for a term of this length.
pub fn fuzziness(term: &str) -> usize {
    match term.chars().count() {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

/// True when `a` can be turned into `b` with at most `max` insertions, deletions,
/// substitutions or adjacent transpositions.
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    // Optimal string alignment distance, three rolling rows.
    let mut before_prev: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i;
        let mut row_min = current[0];
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut value = (prev[j] + 1)
                .min(current[j - 1] + 1)
                .min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                value = value.min(before_prev[j - 2] + 1);
            }
            current[j] = value;
            row_min = row_min.min(value);
        }
        if row_min > max {
            return false;
        }
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()] <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzziness_grows_with_term_length() {
        assert_eq!(fuzziness("tv"), 0);
        assert_eq!(fuzziness("lamp"), 1);
        assert_eq!(fuzziness("keyboard"), 2);
    }

    #[test]
    fn edit_distance_counts_transpositions_once() {
        assert!(edit_distance_within("lamp", "lmap", 1));
        assert!(edit_distance_within("kitten", "sitting", 3));
        assert!(!edit_distance_within("kitten", "sitting", 2));
        assert!(!edit_distance_within("a", "abcd", 2));
    }

    #[test]
    fn short_terms_must_match_exactly() {
        let query = SearchQuery::new("tv");
        assert_eq!(query.score("TV stand", ""), Some(EXACT_NAME));
        assert_eq!(query.score("TX stand", ""), None);
    }

    #[test]
    fn exact_name_beats_fuzzy_and_description() {
        let query = SearchQuery::new("keyboard");
        let exact = query.score("Mechanical Keyboard", "").unwrap();
        let fuzzy = query.score("Mechanical Kyeboard", "").unwrap();
        let in_description = query.score("Desk mat", "fits a keyboard").unwrap();
        assert!(exact > in_description);
        assert!(in_description > fuzzy);
    }

    #[test]
    fn any_term_is_enough_and_more_terms_score_higher() {
        let query = SearchQuery::new("red lamp");
        let one = query.score("Desk lamp", "white").unwrap();
        let both = query.score("Red lamp", "").unwrap();
        assert!(both > one);
        assert_eq!(query.score("Chair", "oak"), None);
    }

    #[test]
    fn punctuation_only_query_is_empty() {
        assert!(SearchQuery::new("  -- ").is_empty());
        assert_eq!(SearchQuery::new("Red, LAMP").terms(), ["red", "lamp"]);
    }
}
