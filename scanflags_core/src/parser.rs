mod coerce;
mod interface;
mod printer;
mod scan;

pub(crate) use coerce::*;
pub(crate) use interface::*;
pub(crate) use printer::*;
pub(crate) use scan::*;
