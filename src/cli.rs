//! CLI domain: parse, route and output only.
//! The route resolves configuration and hands off to the generator.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
