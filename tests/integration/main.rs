mod common;

mod annotate_test;
mod loader_test;
