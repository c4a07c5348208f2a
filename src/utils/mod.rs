// Utils compartidos

pub mod status;
pub mod i18n;
pub mod format;

pub use i18n::t;
pub use format::*;
