pub mod lobby_list;
pub mod practice;
pub mod ranked;
