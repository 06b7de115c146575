use crate::AirportIndex;

/// Flattened, position-addressable view of every code stored in an
/// [`AirportIndex`].
///
/// The catalog owns no records; it holds codes only, and each code is
/// resolved back through the index on use. Read-only after construction.
pub struct AirportCatalog {
    codes: Vec<String>,
}

impl AirportCatalog {
    /// Builds the catalog by walking buckets `0..BUCKET_COUNT` in order; for
    /// each non-empty bucket the head code is emitted first, then the rest of
    /// the chain in link order.
    ///
    /// # Parameters
    /// - `index`: The populated index to flatten.
    /// - `count`: The exact number of successfully inserted records. Passing
    ///   a smaller value truncates the catalog; a larger one stops at bucket
    ///   exhaustion and yields an under-sized catalog.
    ///
    /// # Returns
    /// * `AirportCatalog` - The ordered sequence of codes.
    pub fn build(index: &AirportIndex, count: usize) -> Self {
        let mut codes = Vec::with_capacity(count);

        'buckets: for bucket in &index.buckets {
            let mut current = bucket.as_deref();
            while let Some(node) = current {
                if codes.len() == count {
                    break 'buckets;
                }
                codes.push(node.record.icao.clone());
                current = node.next.as_deref();
            }
        }

        AirportCatalog { codes }
    }

    /// Returns the code at position `position % len`, wrapping cyclically.
    ///
    /// Panics on an empty catalog; callers check [`AirportCatalog::is_empty`]
    /// first.
    pub fn at(&self, position: usize) -> &str {
        &self.codes[position % self.codes.len()]
    }

    /// Returns the number of codes in the catalog.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the catalog holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AirportRecord;

    fn populated_index(codes: &[&str]) -> AirportIndex {
        let mut index = AirportIndex::new();
        for (i, code) in codes.iter().enumerate() {
            let accepted = index.insert(AirportRecord::new(code.to_string(), i as f64, i as f64));
            assert!(accepted, "fixture codes must not collide as heads");
        }
        index
    }

    #[test]
    fn test_catalog_length_matches_insert_count() {
        let index = populated_index(&["EGLL", "KJFK", "SAEZ", "NZCH", "YSSY"]);
        let catalog = AirportCatalog::build(&index, index.len());

        assert_eq!(catalog.len(), 5);
        for i in 0..catalog.len() {
            assert!(
                index.lookup(catalog.at(i)).is_some(),
                "every catalog code must resolve through the index"
            );
        }
    }

    #[test]
    fn test_catalog_emits_head_before_chain_remainder() {
        // AAFO and AASP collide; the later insert is the head.
        let mut index = populated_index(&["AAFO"]);
        index.insert(AirportRecord::new("AASP".to_string(), 1.0, 1.0));

        let catalog = AirportCatalog::build(&index, index.len());
        let codes: Vec<&str> = (0..catalog.len()).map(|i| catalog.at(i)).collect();
        assert_eq!(codes, vec!["AASP", "AAFO"]);
    }

    #[test]
    fn test_mismatched_count_truncates_or_undershoots() {
        let index = populated_index(&["EGLL", "KJFK", "SAEZ"]);

        let truncated = AirportCatalog::build(&index, 2);
        assert_eq!(truncated.len(), 2);

        let undersized = AirportCatalog::build(&index, 10);
        assert_eq!(
            undersized.len(),
            3,
            "bucket exhaustion bounds an oversized count"
        );
    }

    #[test]
    fn test_at_wraps_cyclically() {
        let index = populated_index(&["EGLL", "KJFK"]);
        let catalog = AirportCatalog::build(&index, 2);

        assert_eq!(catalog.at(0), catalog.at(2));
        assert_eq!(catalog.at(1), catalog.at(5));
    }

    #[test]
    fn test_distinct_inserts_round_trip_without_duplicates() {
        let codes = ["EGLL", "KJFK", "SAEZ", "NZCH", "YSSY", "QWER", "WXYZ"];
        let index = populated_index(&codes);
        let catalog = AirportCatalog::build(&index, index.len());

        assert_eq!(catalog.len(), codes.len());
        let mut seen: Vec<&str> = (0..catalog.len()).map(|i| catalog.at(i)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), codes.len(), "catalog must not duplicate codes");
    }
}
