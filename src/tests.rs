pub mod setup_test;

#[cfg(test)]
mod pages_test;
