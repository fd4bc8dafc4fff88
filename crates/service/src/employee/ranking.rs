//! Pure derivations over a fetched collection. Order-preserving throughout.

use models::Employee;

/// How many names the earners ranking returns.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Records whose name contains `needle`, ignoring case. An empty needle keeps everything.
pub fn filter_by_name(employees: Vec<Employee>, needle: &str) -> Vec<Employee> {
    let needle = needle.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Largest salary, or 0 for an empty collection.
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best paid records, highest first.
///
/// Equal salaries keep their upstream order (`sort_by` is stable).
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked.into_iter().take(limit).map(|e| e.name.clone()).collect()
}
