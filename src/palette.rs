pub mod cluster;
pub mod deadline;
pub mod remap;
pub mod stats;
