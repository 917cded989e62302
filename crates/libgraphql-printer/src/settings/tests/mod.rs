mod name_filter_tests;
mod settings_tests;
