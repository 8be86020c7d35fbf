pub mod util;

#[cfg(test)]
mod primitives;
