mod print_scenarios;
mod utils;
