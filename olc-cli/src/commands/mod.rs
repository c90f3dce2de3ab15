pub mod check;
pub mod decode;
pub mod encode;
pub mod recover;
pub mod shorten;
