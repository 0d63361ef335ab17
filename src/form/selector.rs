//! Multi-select list of categories.

use crate::domain::Category;

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Ordered category options with independent selection state.
#[derive(Debug, Default)]
pub struct CategorySelector {
    options: Vec<CategoryOption>,
}

impl CategorySelector {
    /// Appends an unselected option whose value and label are the category name.
    pub fn append(&mut self, category: &Category) {
        self.options.push(CategoryOption {
            value: category.name.clone(),
            label: category.name.clone(),
            selected: false,
        });
    }

    pub fn options(&self) -> &[CategoryOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn clear_selection(&mut self) {
        for option in &mut self.options {
            option.selected = false;
        }
    }

    /// Selects exactly the options whose value is in `values`.
    ///
    /// Names with no matching option are ignored.
    pub fn select_exactly<S: AsRef<str>>(&mut self, values: &[S]) {
        for option in &mut self.options {
            option.selected = values.iter().any(|v| v.as_ref() == option.value);
        }
    }

    /// Flips the selection of the named option. Returns false if no option matches.
    pub fn toggle(&mut self, value: &str) -> bool {
        let mut found = false;
        for option in self.options.iter_mut().filter(|o| o.value == value) {
            option.selected = !option.selected;
            found = true;
        }
        found
    }

    /// Values of the selected options, in option order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }
}
