pub(crate) mod districts;
pub(crate) mod states;
