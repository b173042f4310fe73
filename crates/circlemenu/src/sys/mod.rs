pub mod icon;
pub mod runtime;
