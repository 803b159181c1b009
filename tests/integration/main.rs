//! Integration tests for msgcloud

mod cli_test;
mod cloud_test;
mod extract_test;
mod filename_test;
