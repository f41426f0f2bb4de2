pub mod colors;
pub mod date;
pub mod excel_date;
pub mod formatting;
pub mod table;
