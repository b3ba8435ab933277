pub mod analyze;
pub mod batch;
pub mod conf;

#[cfg(test)]
mod tests;
