mod name_filter;
#[allow(clippy::module_inception)]
mod settings;

pub use name_filter::NameFilter;
pub use settings::Settings;

#[cfg(test)]
mod tests;
