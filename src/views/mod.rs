pub mod card;
pub mod detail;
pub mod input;
pub mod root;
pub mod search;
pub mod stat_bar;
