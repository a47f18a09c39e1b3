mod lin_motion;
mod ptp_motion;
mod joint_motion;
mod slin_motion;
mod sptp_motion;
mod spline_block;
mod home_motion;
mod set_frame;
mod select_frame;
mod pre_milling;
mod delay;
mod outputs;
mod speed;
mod smoothing;
mod set_parameter;
mod raw_krl;

pub use lin_motion::*;
pub use ptp_motion::*;
pub use joint_motion::*;
pub use slin_motion::*;
pub use sptp_motion::*;
pub use spline_block::*;
pub use home_motion::*;
pub use set_frame::*;
pub use select_frame::*;
pub use pre_milling::*;
pub use delay::*;
pub use outputs::*;
pub use speed::*;
pub use smoothing::*;
pub use set_parameter::*;
pub use raw_krl::*;
