pub mod interface;
pub mod neighbor;
pub mod totals;

pub use interface::{InterfaceRecord, InterfaceState, PortChannelRecord};
pub use neighbor::{CdpNeighbor, LldpNeighbor, NeighborTables};
pub use totals::RunningTotals;
