/// Learner's attempt at two-sum.
///
/// Tries every pair, pairing each number with the closest earlier one first.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for j in 1..nums.len() {
        for i in (0..j).rev() {
            if nums[i].checked_add(nums[j]) == Some(target) {
                return Some((i, j));
            }
        }
    }
    None
}
