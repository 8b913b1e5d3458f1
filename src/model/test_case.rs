/// One data row of a test table.
///
/// Holds the raw literals only; parsing them is up to the
/// [Problem](crate::problems::Problem) under test, so a malformed literal
/// fails just this case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position among the data rows
    pub number: usize,
    /// Case identifier from the first column
    pub id: String,
    /// Raw input literal, e.g. `nums=[2,7,11,15];target=9`
    pub input: String,
    /// Raw expected-output literal, e.g. `[0,1]`
    pub expected: String,
}

impl TestCase {
    pub fn new(number: usize, id: String, input: String, expected: String) -> Self {
        TestCase {
            number,
            id,
            input,
            expected,
        }
    }
}
