mod introspection;
mod lowering;
mod print_result;
mod printable;
#[allow(clippy::module_inception)]
mod printer;

pub use print_result::PrintResult;
pub use printable::Printable;
pub use printer::Printer;
pub use printer::SchemaTypeRef;

#[cfg(test)]
mod tests;
