pub mod crypto;
#[cfg(test)]
pub mod memory;
pub mod postgres;
