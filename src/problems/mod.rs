//! Problem frontends: concrete domains wired to the generic machinery.

pub mod australia;
pub mod sliding_tiles;
