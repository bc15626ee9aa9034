pub mod session;

pub mod prelude {
    pub use super::session::*;
}
