pub mod confirm;
pub mod limit;
pub mod parse;
#[cfg(test)]
pub mod testing;
