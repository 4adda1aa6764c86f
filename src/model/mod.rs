//! The cost-model core: blocking, cycle policies, the architecture facade,
//! and the design-space enumerator

pub mod architecture;
pub mod blocking;
pub mod cycles;
pub mod range;
pub mod space;

pub use architecture::{ArchParams, ResourceUsage, SpmvArchitecture};
pub use blocking::{block, partition, BlockingResult, IndptrValue};
pub use cycles::CycleModel;
pub use range::Range;
pub use space::ArchitectureSpace;
