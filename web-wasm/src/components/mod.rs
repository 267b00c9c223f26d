pub mod header;
pub mod artworks_table;
pub mod paginator;
pub mod row_count_dialog;
