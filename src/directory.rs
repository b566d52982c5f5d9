use crate::types::employee::{Employee, EmployeeId};

/// Employees currently shown by the list view.
///
/// The list is held as fetched; nothing is cached between commands.
#[derive(Debug, Clone, Default)]
pub struct EmployeeList {
    employees: Vec<Employee>,
}

impl EmployeeList {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }

    /// Drops the records with the given id, returning how many were removed.
    pub fn remove(&mut self, id: &EmployeeId) -> usize {
        let before = self.employees.len();
        self.employees.retain(|employee| &employee.id != id);
        before - self.employees.len()
    }

    /// Distinct departments, in the order they first appear.
    pub fn departments(&self) -> Vec<&str> {
        let mut departments: Vec<&str> = Vec::new();
        for employee in self.employees.iter() {
            let department = employee.department.as_str();
            if !departments.contains(&department) {
                departments.push(department);
            }
        }
        departments
    }

    /// Records of one department. `None` or an empty name selects everyone.
    pub fn filter(&self, department: Option<&str>) -> Vec<&Employee> {
        match department {
            Some(department) if !department.is_empty() => self
                .employees
                .iter()
                .filter(|employee| employee.department == department)
                .collect(),
            _ => self.employees.iter().collect(),
        }
    }
}
