//! `AppMode`-specific key handling modules.

pub(crate) mod browse;
pub(crate) mod confirmation;
pub(crate) mod create;
pub(crate) mod password;
pub(crate) mod search;
pub(crate) mod team_select;
