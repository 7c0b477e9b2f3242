// crates/patterns/src/employee.rs

/// Employee record. Holds identity data and nothing else, so the only
/// reason for this type to change is a change in what an employee *is*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: u32,
    name: String,
    address: String,
}

impl Employee {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }
}

/// Performance reporting, owned separately from [`Employee`] so a report
/// format change never touches the record type.
#[derive(Debug, Default)]
pub struct PerformanceReporter;

impl PerformanceReporter {
    /// Render the report line for an employee.
    #[must_use]
    pub fn render(&self, employee: &Employee) -> String {
        format!("Performance report for {}", employee.name())
    }

    /// Emit the report. Stub: logs the rendered line and does nothing else.
    pub fn report(&self, employee: &Employee) {
        log::info!("{}", self.render(employee));
    }
}
