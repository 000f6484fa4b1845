//! Seed data for the directory
//!
//! The directory starts from either the built-in sample staff or a JSON seed
//! file. Seed files are read-only inputs: nothing is ever written back.
//!
//! # File format
//!
//! ```json
//! {
//!   "employees": [
//!     { "id": 1, "firstName": "Ann", "lastName": "Lee", "email": "ann@example.com",
//!       "department": "Sales", "role": "Manager" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::employee::{Employee, EmployeeId};
use crate::types::{Department, Role};

/// Contents of a seed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    pub employees: Vec<Employee>,
}

impl SeedFile {
    /// Load a seed file from disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read seed data from {:?}", path.as_ref()))?;

        Self::from_json(&content)
            .with_context(|| format!("Invalid seed data in {:?}", path.as_ref()))
    }

    /// Parse seed data from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let seed: Self =
            serde_json::from_str(content).context("Failed to parse seed data JSON")?;
        Ok(seed)
    }

    /// Validate the seed data
    ///
    /// Ids must be unique and every text field must be present.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.employees.len());
        for employee in &self.employees {
            if !seen.insert(employee.id) {
                anyhow::bail!("Duplicate employee id {}", employee.id);
            }
            if employee.first_name.trim().is_empty() {
                anyhow::bail!("Employee {} has no first name", employee.id);
            }
            if employee.last_name.trim().is_empty() {
                anyhow::bail!("Employee {} has no last name", employee.id);
            }
            if employee.email.trim().is_empty() {
                anyhow::bail!("Employee {} has no email", employee.id);
            }
        }
        Ok(())
    }
}

/// Built-in sample staff used when no seed file is given
pub fn sample_employees() -> Vec<Employee> {
    use Department as D;
    use Role as R;

    let rows: [(&str, &str, Department, Role); 30] = [
        ("John", "Doe", D::Engineering, R::Developer),
        ("Jane", "Smith", D::Marketing, R::Manager),
        ("Alice", "Johnson", D::Sales, R::Specialist),
        ("Bob", "Brown", D::It, R::Engineer),
        ("Charlie", "Davis", D::Hr, R::Coordinator),
        ("Diana", "Miller", D::Finance, R::Analyst),
        ("Ethan", "Wilson", D::Engineering, R::Engineer),
        ("Fiona", "Moore", D::Marketing, R::Designer),
        ("George", "Taylor", D::Sales, R::Manager),
        ("Hannah", "Anderson", D::Operations, R::Coordinator),
        ("Ian", "Thomas", D::It, R::Specialist),
        ("Julia", "Jackson", D::Engineering, R::Manager),
        ("Kevin", "White", D::Finance, R::Manager),
        ("Laura", "Harris", D::Hr, R::Specialist),
        ("Michael", "Martin", D::Engineering, R::Intern),
        ("Nina", "Thompson", D::Sales, R::Analyst),
        ("Oscar", "Garcia", D::Operations, R::Manager),
        ("Paula", "Martinez", D::Marketing, R::Analyst),
        ("Quentin", "Robinson", D::It, R::Manager),
        ("Rachel", "Clark", D::Engineering, R::Designer),
        ("Samuel", "Rodriguez", D::Finance, R::Intern),
        ("Tina", "Lewis", D::Sales, R::Coordinator),
        ("Umar", "Lee", D::Engineering, R::Developer),
        ("Vera", "Walker", D::Hr, R::Manager),
        ("William", "Hall", D::Operations, R::Analyst),
        ("Xena", "Allen", D::It, R::Developer),
        ("Yusuf", "Young", D::Marketing, R::Specialist),
        ("Zoe", "King", D::Engineering, R::Analyst),
        ("Aaron", "Wright", D::Sales, R::Intern),
        ("Bella", "Lopez", D::Finance, R::Specialist),
    ];

    rows.iter()
        .zip(1u32..)
        .map(|((first, last, department, role), id)| Employee {
            id: EmployeeId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!(
                "{}.{}@company.com",
                first.to_lowercase(),
                last.to_lowercase()
            ),
            department: *department,
            role: *role,
        })
        .collect()
}
