pub mod case_resolver;
pub mod cases;
pub mod convert;

#[cfg(test)]
mod convert_tests;
