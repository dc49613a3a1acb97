pub(crate) mod categories;
pub(crate) mod config;
pub(crate) mod extract;
pub(crate) mod run;
