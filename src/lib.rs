pub mod constants;
mod directive;
mod options;
mod policy;
mod preset;
mod result;
mod source_list;
mod util;

pub use directive::{DirectiveName, DirectiveType};
pub use options::CspOptions;
pub use policy::ContentSecurityPolicy;
pub use preset::Preset;
pub use result::{CspError, Header};
pub use source_list::SourceList;
pub use util::{directive_token, normalize_lower};
