mod description_block_tests;
mod list_block_tests;
mod string_block_tests;
mod utils;
