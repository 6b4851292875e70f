mod root;

pub use root::{App, filter_markets};
