use crate::listing::{apply, results_count_text};
use crate::model::Model;

use super::card::card_grid;
use super::markup::empty_state;

pub struct Listing {
    pub markup: String,
    pub results_count: String,
}

pub fn render(model: &Model) -> Listing {
    let filtered = apply(&model.events, &model.filters, &model.registrations);
    let results_count = results_count_text(filtered.len());

    let markup = if filtered.is_empty() {
        empty_state("No events match your filters. Try adjusting your search criteria.")
    } else {
        card_grid(
            filtered,
            &model.registrations,
            &model.config,
            "col-md-6 col-xl-4",
        )
    };

    Listing {
        markup,
        results_count,
    }
}
