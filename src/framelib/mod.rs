//! Reference frames and the transforms between them
//!
//! - [`inertial`]: ecliptic and equatorial coordinates, which do not depend
//!   on the observer
//! - [`topocentric`]: the observer's horizon frame

pub mod inertial;
pub mod topocentric;
