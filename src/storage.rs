pub mod arena;
pub mod edge_list;

pub use arena::Arena;
pub use edge_list::UndirectedGraph;
