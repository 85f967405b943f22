pub mod collision;
pub mod kinematics;
pub mod motion;
