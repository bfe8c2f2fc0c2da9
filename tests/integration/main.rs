//! Integration tests for typecast

mod cli_test;
mod helpers;
mod host_test;
mod page_test;
