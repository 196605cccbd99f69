pub mod crop_table;
pub mod garden_list;
pub mod kpi_card;
pub mod mutation_grid;
pub mod profit_indicator;
pub mod recommendation_list;
pub mod toast;
