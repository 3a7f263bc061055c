pub mod compositor;
pub mod normalize;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
