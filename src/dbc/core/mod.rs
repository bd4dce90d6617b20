//! Line decoders, one module per DBC keyword.

pub(crate) mod bo_;
pub(crate) mod cm_;
pub(crate) mod sg_;
pub(crate) mod sig_valtype_;
pub(crate) mod strings;
pub(crate) mod val_;
pub(crate) mod version;
