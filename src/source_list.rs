use std::ops::Deref;

/// Ordered source values of a single directive.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SourceList {
    values: Vec<String>,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends values in order, skipping any already present.
    pub(crate) fn extend_unique<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        for value in values {
            if !self.values.contains(&value) {
                self.values.push(value);
            }
        }
    }

    /// Swaps the contents for `values` exactly as given, duplicates included.
    pub(crate) fn replace(&mut self, values: Vec<String>) {
        self.values = values;
    }

    pub(crate) fn remove_all(&mut self, values: &[String]) {
        self.values.retain(|existing| !values.contains(existing));
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }

    /// Serializes the list into a space separated fragment.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(" "))
        }
    }
}

impl Deref for SourceList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
#[path = "source_list_test.rs"]
mod source_list_test;
