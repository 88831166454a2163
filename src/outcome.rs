//! Successful results paired with an optional advisory warning.

/// A successful value plus the most recent non-fatal warning raised while
/// producing it.
///
/// Warnings never block a result; they describe conditions such as a
/// coordinate near the domain edge or a search radius that was clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> Outcome<T> {
    pub fn new(value: T, warning: Option<String>) -> Self {
        Self { value, warning }
    }

    pub fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Option<String>) {
        (self.value, self.warning)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

impl<T> std::ops::Deref for Outcome<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
