pub mod console_interface;
pub mod core;
pub mod models;

#[cfg(test)]
mod test;
