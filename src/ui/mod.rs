pub mod components;
pub mod form;
pub mod pages;
pub mod shell;
pub mod theme;
