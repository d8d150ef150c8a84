pub mod app_mode;
