pub mod approach;
pub mod constants;
pub mod data_access;
pub mod env_state;
pub mod flyby;
pub mod flyby_errors;
pub mod geometry;
pub mod jpl_request;
pub mod risk;
pub mod time;

pub use approach::batch::ApproachBatch;
pub use approach::{CloseApproachRecord, CloseApproachResult, PhysicalParameters};
pub use data_access::DataAccess;
pub use flyby::Flyby;
pub use flyby_errors::FlybyError;
pub use geometry::spherical::{cartesian_to_spherical, SphericalPosition};
pub use geometry::trajectory::{launch_angles, TrajectoryAngles};
pub use geometry::StateVector;
pub use risk::{RiskEstimate, RiskInputs};
