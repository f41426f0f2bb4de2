pub mod column;
pub mod raw_table;
pub mod record;
