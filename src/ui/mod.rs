//! UI module - reusable widgets shared by the form view

pub mod components;
