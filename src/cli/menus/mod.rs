pub mod calculator_menu;
pub mod ledger_menu;
pub mod main_menu;
