pub mod emotion;
pub(crate) mod output;
pub mod polarity;
pub(crate) mod stats;
pub(crate) mod utils;
