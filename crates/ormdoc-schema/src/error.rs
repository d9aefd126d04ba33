use std::fmt;

///
/// ErrorReport
/// Flat accumulator for validation failures, so a bad manifest reports every
/// problem in one pass instead of failing on the first.
///

#[derive(Debug, Default)]
pub struct ErrorReport {
    errors: Vec<String>,
}

impl ErrorReport {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the report, returning `Err(self)` if any error was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} validation error(s)", self.errors.len())?;
        for err in &self.errors {
            writeln!(f, "  - {err}")?;
        }

        Ok(())
    }
}

/// Push a formatted validation error onto an [`ErrorReport`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $errs.add(format!($fmt $(, $arg)*))
    };
}
