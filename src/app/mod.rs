pub mod envy;
pub mod models;
pub mod util;
