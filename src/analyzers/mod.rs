pub mod neighbor;
pub mod normalizer;
pub mod rates;

pub use neighbor::{NO_NEIGHBOR, resolve};
pub use normalizer::{normalize, normalize_description, normalize_hostname};
pub use rates::{Rates, compute_rates};
