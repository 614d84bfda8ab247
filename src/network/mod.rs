pub mod network;

pub use network::{ForwardCache, Gradients, Network};
