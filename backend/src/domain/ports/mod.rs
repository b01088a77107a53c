//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_directory;
mod employees_command;
mod employees_query;

#[cfg(test)]
pub use employee_directory::MockEmployeeDirectory;
pub use employee_directory::{
    EmployeeCollection, EmployeeDirectory, EmployeeDirectoryError, EmployeeItem,
};
#[cfg(test)]
pub use employees_command::MockEmployeesCommand;
pub use employees_command::{CreateEmployeeRequest, EmployeesCommand};
#[cfg(test)]
pub use employees_query::MockEmployeesQuery;
pub use employees_query::EmployeesQuery;
