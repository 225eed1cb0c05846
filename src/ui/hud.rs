use super::state::UiState;
use crate::game::Stats;

pub(super) fn stats_text(stats: Stats) -> String {
    format!(
        "Moves: {} | Pairs: {}/{}",
        stats.moves, stats.matched_pairs, stats.total_pairs
    )
}

pub(super) fn update_subtitle(st: &UiState) {
    if let Some(subtitle) = &st.title_subtitle {
        subtitle.set_text(&stats_text(st.controller.stats()));
    }
}
