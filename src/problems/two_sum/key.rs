use std::collections::HashMap;

/// Returns the indices `(i, j)` with `i < j` of the two numbers adding up to `target`.
///
/// Single pass remembering the index at which each value was last seen, so
/// `O(n)` time and space. Assumes exactly one valid answer; returns `None` if
/// there is none.
pub fn two_sum_key(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &num) in nums.iter().enumerate() {
        if let Some(&i) = target.checked_sub(num).and_then(|complement| seen.get(&complement)) {
            return Some((i, j));
        }
        seen.insert(num, j);
    }
    None
}
