use serde::Serialize;

/// A faculty roster entry.
/// One flat record: the source system's Person/Faculty split carries no
/// behavior, so it collapses into a single struct.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FacultyRecord {
    pub id: String,         // ⇔ Faculty.FacultyID (TEXT, primary key)
    pub full_name: String,  // ⇔ Faculty.FullName
    pub department: String, // ⇔ Faculty.Department
}

impl FacultyRecord {
    pub fn new(id: &str, full_name: &str, department: &str) -> Self {
        Self {
            id: id.to_string(),
            full_name: full_name.to_string(),
            department: department.to_string(),
        }
    }

    pub fn describe(&self) -> String {
        format!("{} ({}) - Dept: {}", self.full_name, self.id, self.department)
    }
}
