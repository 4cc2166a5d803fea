//! Inner joins over the in-memory collections
//!
//! Keys compare by exact string equality. A key with no match yields no
//! rows; a key with several matches yields one row per match, in
//! collection order. Missing keys match nothing, on either side.

use std::collections::HashMap;

/// Multimap from a key column to the records carrying it
pub struct KeyIndex<'a, T> {
    entries: HashMap<&'a str, Vec<&'a T>>,
}

impl<'a, T> KeyIndex<'a, T> {
    pub fn build<F>(records: &'a [T], key: F) -> Self
    where
        F: Fn(&'a T) -> Option<&'a str>,
    {
        let mut entries: HashMap<&'a str, Vec<&'a T>> = HashMap::new();
        for record in records {
            if let Some(k) = key(record) {
                entries.entry(k).or_default().push(record);
            }
        }
        Self { entries }
    }

    /// Records matching `key`; empty when there are none
    pub fn lookup(&self, key: &str) -> &[&'a T] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Pair every left row with each right record sharing its key
pub fn inner_join<'a, L, R, I, F>(left: I, left_key: F, right: &KeyIndex<'a, R>) -> Vec<(L, &'a R)>
where
    I: IntoIterator<Item = L>,
    L: Clone,
    F: Fn(&L) -> Option<&str>,
{
    let mut joined = Vec::new();
    for row in left {
        let Some(key) = left_key(&row) else {
            continue;
        };
        for record in right.lookup(key) {
            joined.push((row.clone(), *record));
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Rec {
        id: &'static str,
        tag: &'static str,
    }

    #[test]
    fn test_lookup_by_key() {
        let records = vec![
            Rec { id: "1", tag: "a" },
            Rec { id: "2", tag: "b" },
            Rec { id: "1", tag: "c" },
        ];
        let index = KeyIndex::build(&records, |r| Some(r.id));

        let tags: Vec<_> = index.lookup("1").iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec!["a", "c"]);
        assert!(index.lookup("3").is_empty());
    }

    #[test]
    fn test_inner_join_drops_unmatched_and_expands_duplicates() {
        let right = vec![
            Rec { id: "x", tag: "first" },
            Rec { id: "x", tag: "second" },
            Rec { id: "y", tag: "third" },
        ];
        let index = KeyIndex::build(&right, |r| Some(r.id));
        let left = vec!["x", "z", "y"];

        let joined: Vec<_> = inner_join(left.iter(), |k| Some(**k), &index)
            .into_iter()
            .map(|(k, r)| (*k, r.tag))
            .collect();

        assert_eq!(
            joined,
            vec![("x", "first"), ("x", "second"), ("y", "third")]
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let right = vec![Rec { id: "ab", tag: "t" }];
        let index = KeyIndex::build(&right, |r| Some(r.id));
        assert!(index.lookup("AB").is_empty());
    }

    #[test]
    fn test_missing_keys_never_match() {
        let right = vec![Rec { id: "", tag: "blank" }, Rec { id: "k", tag: "keyed" }];
        let index = KeyIndex::build(&right, |r| if r.tag == "blank" { None } else { Some(r.id) });
        assert!(index.lookup("").is_empty());

        let left = vec![None, Some("k")];
        let joined: Vec<_> = inner_join(left, |k| *k, &index)
            .into_iter()
            .map(|(_, r)| r.tag)
            .collect();
        assert_eq!(joined, vec!["keyed"]);
    }
}
