use record::AirportRecord;
pub mod catalog;
pub mod record;

/// Number of buckets in the table. Fixed; the table never grows.
pub const BUCKET_COUNT: usize = 10_000;

const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x1000_0000_01B3;

/// Computes the bucket for an ICAO code using a 64-bit FNV-1a variant over
/// exactly the first 4 bytes of the code.
///
/// # Parameters
/// - `code`: The airport code to hash.
///
/// # Returns
/// * `usize` - A bucket in `[0, BUCKET_COUNT)`. Codes whose length is not
///   exactly 4 bytes map to the degenerate bucket `0` instead of failing;
///   callers that care must validate the length before inserting or looking
///   up (the CSV loader does).
pub fn bucket_for(code: &str) -> usize {
    let bytes = code.as_bytes();
    if bytes.len() != 4 {
        return 0;
    }

    let mut result = FNV_OFFSET;
    for &byte in &bytes[..4] {
        result ^= u64::from(byte);
        result = result.wrapping_mul(FNV_PRIME);
    }

    (result % BUCKET_COUNT as u64) as usize
}

pub(crate) struct Node {
    pub(crate) record: AirportRecord,
    pub(crate) next: Option<Box<Node>>,
}

/// Fixed-size hash table of airports with chained collision resolution.
///
/// Each bucket owns an optional singly linked chain of records; a record
/// belongs to exactly one chain. The table is populated once at startup and
/// treated as read-only afterwards.
pub struct AirportIndex {
    buckets: Vec<Option<Box<Node>>>,
    collisions: u64,
    stored: usize,
}

impl Default for AirportIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl AirportIndex {
    /// Creates a new, empty `AirportIndex` with `BUCKET_COUNT` buckets.
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(BUCKET_COUNT);
        buckets.resize_with(BUCKET_COUNT, || None);
        AirportIndex {
            buckets,
            collisions: 0,
            stored: 0,
        }
    }

    /// Inserts a record into the bucket selected by its code.
    ///
    /// If the bucket is empty the record becomes the chain head. If it is
    /// occupied, the incoming code is compared against the CURRENT HEAD only:
    /// a match rejects the insert and the record is dropped. A duplicate code
    /// sitting deeper in the chain is not detected and will be inserted a
    /// second time. This head-only check is intentional, inherited behavior;
    /// widening it to a full-chain scan is a product decision, not a fix.
    ///
    /// On a non-duplicate collision the record is prepended (it becomes the
    /// new head) and the collision counter is incremented.
    ///
    /// # Parameters
    /// - `record`: The record to insert. Ownership moves into the table.
    ///
    /// # Returns
    /// * `bool` - `false` if the head-equality check rejected the record,
    ///   `true` otherwise.
    pub fn insert(&mut self, record: AirportRecord) -> bool {
        let bucket = &mut self.buckets[bucket_for(&record.icao)];

        if let Some(head) = bucket.as_deref() {
            if head.record.icao == record.icao {
                return false;
            }
            let previous = bucket.take();
            *bucket = Some(Box::new(Node {
                record,
                next: previous,
            }));
            self.collisions += 1;
        } else {
            *bucket = Some(Box::new(Node { record, next: None }));
        }

        self.stored += 1;
        true
    }

    /// Looks up a code and returns the HEAD record of its bucket, if any.
    ///
    /// Chain members behind the head are not inspected; every resolution in
    /// this design goes through the bucket head.
    ///
    /// # Parameters
    /// - `code`: The airport code to resolve.
    ///
    /// # Returns
    /// * `Option<&AirportRecord>` - The bucket head, or `None` for an empty
    ///   bucket.
    pub fn lookup(&self, code: &str) -> Option<&AirportRecord> {
        self.buckets[bucket_for(code)].as_deref().map(|n| &n.record)
    }

    /// Returns the number of prepend-due-to-collision events since creation.
    pub fn collision_count(&self) -> u64 {
        self.collisions
    }

    /// Returns the number of successfully inserted records.
    pub fn len(&self) -> usize {
        self.stored
    }

    /// Returns `true` if no record has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.stored == 0
    }
}

impl Drop for AirportIndex {
    /// Releases every chain iteratively, keeping teardown flat regardless of
    /// chain length, then lets the bucket array go.
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut head = bucket.take();
            while let Some(mut node) = head {
                head = node.next.take();
            }
        }
    }
}
