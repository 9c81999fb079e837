//! Categories command handler.
//!
//! Lists the simplified category labels in the order the trivia API returned
//! them, separated by `;\t`.

use log::debug;

use crate::{
    commands::markdown_response::format_categories, sequencer::Step, trivia::CategoryMap,
};

/// Returns the category listing as a single immediate step.
pub fn handle_categories(categories: &CategoryMap) -> Vec<Step> {
    debug!("handling categories command");

    vec![Step::now(format_categories(categories.simplified_labels()))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_categories_lists_every_label_once_in_order() {
        let categories = CategoryMap::new([
            ("General Knowledge", 9),
            ("Entertainment: Books", 10),
            ("Science: Nature", 17),
        ]);

        let steps = handle_categories(&categories);

        assert_eq!(steps.len(), 1);
        let labels: Vec<&str> = steps[0].text.split(";\t").collect();
        assert_eq!(labels, vec!["General Knowledge", " Books", " Nature"]);
    }
}
