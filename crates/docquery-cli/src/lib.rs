//! Command-line front ends for docquery: `docquery` and `xmlcheck`.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

#[cfg(test)]
mod logging_tests;
