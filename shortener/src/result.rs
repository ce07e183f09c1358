//! Result value held by the page shell and what the result display shows.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

/// Label rendered next to the result.
pub const RESULT_LABEL: &str = "Short URL";

/// Text the result display renders, or `None` to render nothing.
#[must_use]
pub fn display_text(result: Option<&str>) -> Option<&str> {
    result.filter(|value| !value.is_empty())
}

/// Most recent short URL. No history; each write replaces the last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSlot {
    value: Option<String>,
}

impl ResultSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn display(&self) -> Option<&str> {
        display_text(self.get())
    }
}
