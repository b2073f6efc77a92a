use std::collections::HashMap;

/// Occurrence counts of cleaned tokens for a single run.
///
/// Keys keep their first-encounter order so a plain word list can be emitted
/// without ranking. The longest token length (in codepoints) and the highest
/// count only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
    longest_len: usize,
    max_count: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one cleaned token. Empty tokens are ignored.
    pub fn record(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }

        let count = match self.counts.get_mut(token) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                self.counts.insert(token.to_string(), 1);
                self.order.push(token.to_string());
                1
            }
        };

        self.max_count = self.max_count.max(count);
        self.longest_len = self.longest_len.max(token.chars().count());
    }

    /// Fold another table into this one. Keys new to `self` are appended in
    /// the other table's encounter order.
    pub fn merge(&mut self, other: FrequencyTable) {
        let FrequencyTable {
            mut counts, order, ..
        } = other;

        for token in order {
            let added = counts.remove(&token).unwrap_or(0);
            if added == 0 {
                continue;
            }
            let count = self.counts.entry(token.clone()).or_insert(0);
            if *count == 0 {
                self.order.push(token.clone());
            }
            *count += added;

            self.max_count = self.max_count.max(*count);
            self.longest_len = self.longest_len.max(token.chars().count());
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn longest_len(&self) -> usize {
        self.longest_len
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Tokens in first-encounter order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(token, count)` pairs sorted by descending count, ties broken by
    /// ascending token text.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
