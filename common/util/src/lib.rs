pub mod assert;
pub mod source;
#[cfg(any(test, feature = "testing"))]
pub mod test;
