mod array;
mod generated;
mod list;

pub(crate) use array::ArrayElements;
pub(crate) use generated::GeneratedElements;
pub(crate) use list::ListElements;
