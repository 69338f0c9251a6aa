use crate::models::FrequencyRecord;

/// Sorts frequency records in place.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by count in descending order (higher count first).
/// - **Secondary:** If two characters have the same count, sorts by character
///   in ascending code point order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use bookbot::models::FrequencyRecord;
/// use bookbot::utils::sort_records;
///
/// let mut records = vec![
///     FrequencyRecord::new('b', 3),
///     FrequencyRecord::new('c', 8),
///     FrequencyRecord::new('a', 3),
/// ];
///
/// sort_records(&mut records);
/// assert_eq!(records, vec![
///     FrequencyRecord::new('c', 8),
///     FrequencyRecord::new('a', 3),
///     FrequencyRecord::new('b', 3),
/// ]);
/// ```
pub fn sort_records(records: &mut [FrequencyRecord]) {
    records.sort_by(|a, b| {
        b.num
            .cmp(&a.num) // Sort by count (descending)
            .then_with(|| a.char.cmp(&b.char)) // Secondary sort by character (ascending)
    });
}
