pub mod cnv;
pub mod io;
pub mod phylo;
