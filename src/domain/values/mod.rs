pub mod alert_state;
pub mod decision;
pub mod index_type;
pub mod macro_indicator;
pub mod score;
pub mod score_badge;
pub mod score_ma;
pub mod score_zone;
