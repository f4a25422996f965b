pub mod bhandara;
