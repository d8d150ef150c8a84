pub mod confirmation_overlay;
pub mod create_form_overlay;
pub mod password_overlay;
pub mod status_bar;
pub mod team_select_overlay;
