use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandEntry {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayEntry {
    pub skill: String,
    pub avg_salary: f64,
    /// Postings contributing to `avg_salary`.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalEntry {
    pub skill: String,
    pub demand_count: usize,
    pub avg_salary: f64,
}
